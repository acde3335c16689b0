//! Positional layout of the settlement-advice template.
//!
//! The advice is a single rigid export format, so lines are classified by
//! index alone. Content is never consulted here; it only matters to the
//! extractors in [`crate::advice_format`]. The flip side is that any
//! positional drift in the source document silently misclassifies lines,
//! which is why the whole table lives in this one module where it can be
//! tested directly.

use std::ops::RangeInclusive;

/// Index of the title line.
pub const TITLE_LINE: usize = 1;

/// Indices of the addressee/bank/date/session header block.
pub const META_LINES: RangeInclusive<usize> = 3..=8;

/// Index of the account-number / opening-collateral line.
pub const ACCOUNT_LINE: usize = 9;

/// Index of the table header naming the debit and credit currencies.
pub const CURRENCY_HEADER_LINE: usize = 10;

/// Smallest document the template can describe: the eleven fixed header
/// positions plus totals, net position and footer, with an empty table.
pub const MIN_TEMPLATE_LINES: usize = 14;

/// Semantic role a line plays, decided purely by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Spacer line; carries nothing.
    Blank,
    /// Document title.
    Title,
    /// Header fragment accumulated into the meta block.
    Meta,
    /// Account number and opening collateral.
    Account,
    /// Table header naming the debit/credit currencies.
    CurrencyHeader,
    /// Transaction table row.
    TableRow,
    /// Total debit / total credit line.
    Totals,
    /// Overall net position line.
    NetPosition,
    /// Trailing footer, accumulated into the meta block when non-blank.
    Footer,
}

/// Classify a line by its index within a document of `total_lines` lines.
///
/// Absolute positions take precedence over relative-to-end positions: in a
/// document short enough for index 9 to also be third-from-last, it is
/// still the account line. Callers are expected to have applied the
/// [`MIN_TEMPLATE_LINES`] short-circuit first, so the collision never
/// arises on real input.
pub fn classify(line_index: usize, total_lines: usize) -> Role {
    match line_index {
        0 | 2 => Role::Blank,
        TITLE_LINE => Role::Title,
        i if META_LINES.contains(&i) => Role::Meta,
        ACCOUNT_LINE => Role::Account,
        CURRENCY_HEADER_LINE => Role::CurrencyHeader,
        i if i + 1 == total_lines => Role::Footer,
        i if i + 2 == total_lines => Role::NetPosition,
        i if i + 3 == total_lines => Role::Totals,
        _ => Role::TableRow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_header_positions() {
        let total = 20;
        assert_eq!(classify(0, total), Role::Blank);
        assert_eq!(classify(1, total), Role::Title);
        assert_eq!(classify(2, total), Role::Blank);
        for i in 3..=8 {
            assert_eq!(classify(i, total), Role::Meta);
        }
        assert_eq!(classify(9, total), Role::Account);
        assert_eq!(classify(10, total), Role::CurrencyHeader);
    }

    #[test]
    fn test_trailer_positions_are_relative_to_end() {
        for total in [14, 15, 20, 40] {
            assert_eq!(classify(total - 1, total), Role::Footer);
            assert_eq!(classify(total - 2, total), Role::NetPosition);
            assert_eq!(classify(total - 3, total), Role::Totals);
        }
    }

    #[test]
    fn test_everything_between_header_and_trailer_is_a_row() {
        let total = 20;
        for i in 11..total - 3 {
            assert_eq!(classify(i, total), Role::TableRow);
        }
    }

    #[test]
    fn test_minimal_template_has_no_rows() {
        let total = MIN_TEMPLATE_LINES;
        assert_eq!(classify(10, total), Role::CurrencyHeader);
        assert_eq!(classify(11, total), Role::Totals);
        assert_eq!(classify(12, total), Role::NetPosition);
        assert_eq!(classify(13, total), Role::Footer);
    }

    #[test]
    fn test_fixed_positions_win_over_trailer_positions() {
        // In a 12-line document index 9 is both the account line and
        // third-from-last; the absolute position wins.
        assert_eq!(classify(9, 12), Role::Account);
        assert_eq!(classify(10, 12), Role::CurrencyHeader);
        assert_eq!(classify(11, 12), Role::Footer);
    }
}
