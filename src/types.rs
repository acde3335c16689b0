//! Data holders for the parsed settlement advice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency codes the advice template can name in its table header.
///
/// This is a closed set: the currency-header extractor filters tokens
/// against it and anything else on the line is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    NGN,
    USD,
    EUR,
    GBP,
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NGN" => Ok(Currency::NGN),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            _ => Err(format!("Unrecognized currency code: {}", s)),
        }
    }
}

impl Currency {
    /// The code as printed in the document.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NGN => "NGN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of the advice's transaction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLine {
    /// Serial number as printed. Carried through, not recomputed, so it is
    /// not guaranteed unique or contiguous.
    pub serial_number: u32,

    /// Payment scheme label; may contain embedded spaces.
    pub payment_scheme: String,

    /// Short scheme-type code (e.g. Card, EFT).
    pub scheme_type: String,

    /// Debit amount; zero when the column shows the `-` placeholder.
    pub debit_amount: Decimal,

    /// Credit amount; zero when the column shows the `-` placeholder.
    pub credit_amount: Decimal,
}

/// The structured result of parsing one settlement advice.
///
/// Built incrementally by the parse operation and immutable once returned.
/// Every field is optional: an empty or all-blank document yields the
/// all-unset record rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Document title.
    pub title: Option<String>,

    /// Account number from the account/collateral line.
    pub account_number: Option<String>,

    /// Opening collateral amount.
    pub opening_collateral: Option<Decimal>,

    /// Addressee, bank, date and session header lines plus the trailing
    /// footer line, newline-joined in the order encountered.
    pub meta_information: Option<String>,

    /// Currency of the table's debit column.
    pub debit_currency: Option<Currency>,

    /// Currency of the table's credit column.
    pub credit_currency: Option<Currency>,

    /// Transaction table rows in source order.
    pub transactions: Vec<TransactionLine>,

    /// Total of the debit column.
    pub total_debit: Option<Decimal>,

    /// Total of the credit column.
    pub total_credit: Option<Decimal>,

    /// Overall net position (magnitude; the CR/DR marker is not carried).
    pub overall_net_position: Option<Decimal>,
}

impl SettlementRecord {
    /// Create a record with every field unset and no transactions.
    pub fn unset() -> Self {
        Self {
            title: None,
            account_number: None,
            opening_collateral: None,
            meta_information: None,
            debit_currency: None,
            credit_currency: None,
            transactions: Vec::new(),
            total_debit: None,
            total_credit: None,
            overall_net_position: None,
        }
    }

    /// Add a transaction row to the record.
    pub fn add_transaction(&mut self, transaction: TransactionLine) {
        self.transactions.push(transaction);
    }
}

impl Default for SettlementRecord {
    fn default() -> Self {
        Self::unset()
    }
}
