//! Settlement-advice text format parser and serializer.
//!
//! The advice is a fixed-layout, line-oriented document: a title block,
//! six header lines, an account/collateral line, the table header, a
//! variable-length transaction table, and a three-line trailer. Lines are
//! classified by position (see [`crate::layout`]) and each role has its own
//! extraction rule in this module.

use crate::error::{Error, Result};
use crate::layout::{classify, Role, META_LINES, MIN_TEMPLATE_LINES};
use crate::types::{Currency, SettlementRecord, TransactionLine};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Number of lines in the accumulated header meta block.
const META_LINE_COUNT: usize = *META_LINES.end() - *META_LINES.start() + 1;

/// Represents one parsed settlement advice.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementAdvice {
    /// The underlying record data.
    pub record: SettlementRecord,
}

impl SettlementAdvice {
    /// Parse a settlement advice from any source implementing `Read`.
    ///
    /// The stream is split on line boundaries and handed to
    /// [`parse_lines`](Self::parse_lines).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use settlement_advice::advice_format::SettlementAdvice;
    ///
    /// let mut file = File::open("advice.txt")?;
    /// let advice = SettlementAdvice::from_read(&mut file)?;
    /// println!("Title: {:?}", advice.record.title);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_read<R: std::io::Read>(reader: &mut R) -> Result<Self> {
        let buf_reader = std::io::BufReader::new(reader);
        let mut lines: Vec<String> = Vec::new();
        for line in buf_reader.lines() {
            lines.push(line?);
        }
        Self::parse_lines(&lines)
    }

    /// Parse a settlement advice from an ordered sequence of text lines.
    ///
    /// This is the core entry point. A document shorter than the template's
    /// fixed minimum, or consisting entirely of blank lines, yields a record
    /// with every field unset rather than an error. Any malformed
    /// fixed-position line aborts the whole parse; there is no partial
    /// record.
    pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut record = SettlementRecord::unset();

        let all_blank = lines.iter().all(|l| l.as_ref().trim().is_empty());
        if lines.len() < MIN_TEMPLATE_LINES || all_blank {
            return Ok(SettlementAdvice { record });
        }

        let total = lines.len();
        let mut meta = String::new();

        for (index, line) in lines.iter().enumerate() {
            let data = line.as_ref().trim();

            match classify(index, total) {
                Role::Blank => {}
                Role::Title => {
                    record.title = Some(data.to_string());
                }
                Role::Meta => {
                    meta.push_str(data);
                    meta.push('\n');
                }
                Role::Account => {
                    let (account, collateral) = parse_account_line(data, index)?;
                    record.account_number = Some(account);
                    record.opening_collateral = Some(collateral);
                }
                Role::CurrencyHeader => {
                    if let Some((debit, credit)) = parse_currency_header(data) {
                        record.debit_currency = Some(debit);
                        record.credit_currency = Some(credit);
                    }
                }
                Role::TableRow => {
                    record.add_transaction(parse_table_row(data, index)?);
                }
                Role::Totals => {
                    let (debit, credit) = parse_totals_line(data, index)?;
                    record.total_debit = Some(debit);
                    record.total_credit = Some(credit);
                }
                Role::NetPosition => {
                    record.overall_net_position = Some(parse_net_position_line(data, index)?);
                }
                Role::Footer => {
                    if !data.is_empty() {
                        meta.push_str(data);
                        meta.push('\n');
                    }
                }
            }
        }

        record.meta_information = Some(meta);

        Ok(SettlementAdvice { record })
    }

    /// Render the record back into the positional advice template.
    ///
    /// A record parsed from a well-formed document re-renders into a
    /// document that parses to the same record.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use settlement_advice::advice_format::SettlementAdvice;
    /// use settlement_advice::types::SettlementRecord;
    ///
    /// let advice = SettlementAdvice { record: SettlementRecord::unset() };
    /// let mut file = File::create("advice.txt")?;
    /// advice.write_to(&mut file)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let record = &self.record;

        writeln!(writer)?;
        writeln!(writer, "{}", record.title.as_deref().unwrap_or(""))?;
        writeln!(writer)?;

        let meta: Vec<&str> = record
            .meta_information
            .as_deref()
            .map(|m| m.lines().collect())
            .unwrap_or_default();
        for index in 0..META_LINE_COUNT {
            writeln!(writer, "{}", meta.get(index).copied().unwrap_or(""))?;
        }

        writeln!(
            writer,
            "Account No.{} Opening Collateral:{}",
            record.account_number.as_deref().unwrap_or(""),
            record.opening_collateral.unwrap_or(Decimal::ZERO),
        )?;

        writeln!(
            writer,
            "S/N Payment Scheme SchemeType Debit ({}) Credit ({})",
            currency_marker(record.debit_currency),
            currency_marker(record.credit_currency),
        )?;

        for transaction in &record.transactions {
            writeln!(
                writer,
                "{} {} {} {} {}",
                transaction.serial_number,
                transaction.payment_scheme,
                transaction.scheme_type,
                render_column_amount(transaction.debit_amount),
                render_column_amount(transaction.credit_amount),
            )?;
        }

        writeln!(
            writer,
            "Total Debit / Credit({}) {} {}",
            currency_marker(record.debit_currency),
            record.total_debit.unwrap_or(Decimal::ZERO),
            record.total_credit.unwrap_or(Decimal::ZERO),
        )?;

        // The net-position sign and CR/DR marker are not carried in the
        // record, so the magnitude is rendered with a fixed CR marker.
        writeln!(
            writer,
            "OVERALL NET POSITION ({}) {} CR",
            currency_marker(record.debit_currency),
            record.overall_net_position.unwrap_or(Decimal::ZERO),
        )?;

        writeln!(writer, "{}", meta.get(META_LINE_COUNT).copied().unwrap_or(""))?;

        Ok(())
    }
}

/// Extract the account number and opening collateral from the compound
/// account line, e.g.
/// `Account No.4000070135 Opening Collateral:N3,390,000,000.00`.
///
/// The account number is whatever follows the first `.` in the second
/// token; the collateral is whatever follows the first `:` in the fourth,
/// monetary-normalized.
fn parse_account_line(data: &str, line: usize) -> Result<(String, Decimal)> {
    let tokens: Vec<&str> = data.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(Error::structure(
            line,
            format!("account line has {} tokens, expected at least 4", tokens.len()),
        ));
    }

    let account = tokens[1]
        .split_once('.')
        .map(|(_, rest)| rest)
        .ok_or_else(|| Error::structure(line, "account token has no '.' separator"))?;
    let collateral = tokens[3]
        .split_once(':')
        .map(|(_, rest)| rest)
        .ok_or_else(|| Error::structure(line, "collateral token has no ':' separator"))?;

    Ok((account.to_string(), normalize_amount(collateral)?))
}

/// Extract the debit and credit currencies from the table header line.
///
/// Tokens are stripped of parentheses, uppercased, and filtered against the
/// closed [`Currency`] set. Anything other than exactly two matches is the
/// designed fallback: both currencies stay unset and parsing continues.
fn parse_currency_header(data: &str) -> Option<(Currency, Currency)> {
    let codes: Vec<Currency> = data
        .split_whitespace()
        .filter_map(|token| token.replace(['(', ')'], "").parse::<Currency>().ok())
        .collect();

    match codes[..] {
        [debit, credit] => Some((debit, credit)),
        _ => None,
    }
}

/// Extract one transaction row: serial number first, scheme type and the
/// two amounts last, and whatever sits between them is the payment-scheme
/// label (rejoined on single spaces).
fn parse_table_row(data: &str, line: usize) -> Result<TransactionLine> {
    let tokens: Vec<&str> = data.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(Error::structure(
            line,
            format!("table row has {} tokens, expected at least 4", tokens.len()),
        ));
    }

    let serial_number = tokens[0]
        .parse::<u32>()
        .map_err(|_| Error::InvalidSerialNumber(tokens[0].to_string()))?;

    let tail = tokens.len() - 3;
    Ok(TransactionLine {
        serial_number,
        payment_scheme: tokens[1..tail].join(" "),
        scheme_type: tokens[tail].to_string(),
        debit_amount: normalize_amount(tokens[tail + 1])?,
        credit_amount: normalize_amount(tokens[tail + 2])?,
    })
}

/// Extract total debit and total credit from the totals line, e.g.
/// `Total Debit / Credit(NGN) 549,345,888.61 4,320,410,494.37`.
fn parse_totals_line(data: &str, line: usize) -> Result<(Decimal, Decimal)> {
    let tokens: Vec<&str> = data.split_whitespace().collect();
    if tokens.len() < 6 {
        return Err(Error::structure(
            line,
            format!("totals line has {} tokens, expected at least 6", tokens.len()),
        ));
    }

    Ok((normalize_amount(tokens[4])?, normalize_amount(tokens[5])?))
}

/// Extract the net position from the overall-net-position line, e.g.
/// `OVERALL NET POSITION (NGN) 3,771,064,605.76 CR`.
fn parse_net_position_line(data: &str, line: usize) -> Result<Decimal> {
    let tokens: Vec<&str> = data.split_whitespace().collect();
    if tokens.len() < 5 {
        return Err(Error::structure(
            line,
            format!("net position line has {} tokens, expected at least 5", tokens.len()),
        ));
    }

    normalize_amount(tokens[4])
}

/// Normalize a money-like token into an exact decimal.
///
/// Every character that is not an ASCII digit or a decimal point is
/// stripped (currency symbols, thousands separators, signs, placeholders).
/// An empty remainder yields zero, never an error; a non-empty remainder
/// that still fails to parse is a fatal numeric-format failure.
pub fn normalize_amount(token: &str) -> Result<Decimal> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(&cleaned).map_err(|_| Error::InvalidAmount(token.to_string()))
}

/// Currency code for rendered lines; `N/A` keeps the token count stable
/// without matching any code in the closed set.
fn currency_marker(currency: Option<Currency>) -> &'static str {
    currency.map(|c| c.code()).unwrap_or("N/A")
}

/// Table-column amount: the template prints `-` for an empty column.
fn render_column_amount(amount: Decimal) -> String {
    if amount.is_zero() {
        "-".to_string()
    } else {
        amount.to_string()
    }
}
