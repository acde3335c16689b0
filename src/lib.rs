//! Settlement Advice Reader Library
//!
//! A library for parsing an inter-bank settlement advice (a fixed-layout,
//! line-oriented text document) into a structured record, and exporting
//! that record to other representations.
//!
//! # Supported Outputs
//!
//! - **JSON**: the full record, field for field
//! - **CSV**: the transaction table
//! - **Advice**: the positional text template itself
//!
//! # Features
//!
//! - Classify lines by position and extract fields per role
//! - Exact-decimal monetary handling (no floating point)
//! - Use standard `Read` and `Write` traits for flexibility
//!
//! # Examples
//!
//! ## Parsing an advice document
//!
//! ```no_run
//! use std::fs::File;
//! use settlement_advice::advice_format::SettlementAdvice;
//!
//! let mut file = File::open("advice.txt")?;
//! let advice = SettlementAdvice::from_read(&mut file)?;
//! println!("Account: {:?}", advice.record.account_number);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Exporting the transaction table as CSV
//!
//! ```no_run
//! use std::fs::File;
//! use settlement_advice::advice_format::SettlementAdvice;
//! use settlement_advice::csv_format::CsvAdvice;
//!
//! let mut input = File::open("advice.txt")?;
//! let advice = SettlementAdvice::from_read(&mut input)?;
//!
//! let csv = CsvAdvice { record: advice.record };
//! let mut output = File::create("transactions.csv")?;
//! csv.write_to(&mut output)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod advice_format;
pub mod csv_format;
pub mod error;
pub mod layout;
pub mod types;

use std::str::FromStr;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Currency, SettlementRecord, TransactionLine};

/// Supported output formats for a parsed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON serialization of the whole record
    Json,
    /// CSV export of the transaction table
    Csv,
    /// The positional advice text template
    Advice,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            "advice" | "text" | "txt" => Ok(Format::Advice),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl Format {
    /// Get file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Advice => "txt",
        }
    }
}
