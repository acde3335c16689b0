//! CSV export of the advice's transaction table.
//!
//! Export-only: the advice document itself is never read from CSV, so
//! there is no parsing counterpart here.

use crate::error::Result;
use crate::types::SettlementRecord;
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// CSV view over a parsed settlement record.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvAdvice {
    /// The underlying record data.
    pub record: SettlementRecord,
}

/// One CSV row of the transaction table.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "S/N")]
    serial_number: u32,
    #[serde(rename = "Payment Scheme")]
    payment_scheme: &'a str,
    #[serde(rename = "Scheme Type")]
    scheme_type: &'a str,
    #[serde(rename = "Debit")]
    debit_amount: Decimal,
    #[serde(rename = "Credit")]
    credit_amount: Decimal,
}

impl CsvAdvice {
    /// Write the record's transaction table to any destination implementing
    /// `Write`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use settlement_advice::csv_format::CsvAdvice;
    /// use settlement_advice::types::SettlementRecord;
    ///
    /// let csv = CsvAdvice { record: SettlementRecord::unset() };
    /// let mut file = File::create("transactions.csv")?;
    /// csv.write_to(&mut file)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut csv_writer = Writer::from_writer(writer);

        for transaction in &self.record.transactions {
            csv_writer.serialize(CsvRow {
                serial_number: transaction.serial_number,
                payment_scheme: &transaction.payment_scheme,
                scheme_type: &transaction.scheme_type,
                debit_amount: transaction.debit_amount,
                credit_amount: transaction.credit_amount,
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionLine;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_write_transaction_table() {
        let mut record = SettlementRecord::unset();
        record.add_transaction(TransactionLine {
            serial_number: 1,
            payment_scheme: "e-Transact".to_string(),
            scheme_type: "Card".to_string(),
            debit_amount: dec("20000.00"),
            credit_amount: Decimal::ZERO,
        });
        record.add_transaction(TransactionLine {
            serial_number: 2,
            payment_scheme: "NIBSS Instant Payment".to_string(),
            scheme_type: "EFT".to_string(),
            debit_amount: Decimal::ZERO,
            credit_amount: dec("421219549.97"),
        });

        let mut output = Vec::new();
        CsvAdvice { record }.write_to(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("S/N,Payment Scheme,Scheme Type,Debit,Credit")
        );
        assert_eq!(lines.next(), Some("1,e-Transact,Card,20000.00,0"));
        assert_eq!(
            lines.next(),
            Some("2,NIBSS Instant Payment,EFT,0,421219549.97")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_record_writes_nothing() {
        let mut output = Vec::new();
        CsvAdvice {
            record: SettlementRecord::unset(),
        }
        .write_to(&mut output)
        .unwrap();
        assert!(output.is_empty());
    }
}
