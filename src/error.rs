//! Error types for the settlement-advice library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during parsing and export operations.
///
/// Two document conditions are deliberately *not* represented here: a
/// currency header with anything other than exactly two recognized codes
/// leaves both currency fields unset, and an empty or all-blank document
/// yields a record with every field unset. Neither aborts a parse.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing the CSV export.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Error writing the JSON export.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fixed-position line does not have the expected token shape.
    #[error("structural mismatch at line {line}: {message}")]
    Structure { line: usize, message: String },

    /// A monetary token cannot be parsed after normalization.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A transaction row's serial-number token is not a positive integer.
    #[error("invalid serial number: {0}")]
    InvalidSerialNumber(String),

    /// Unknown output format specified.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Structural-mismatch constructor used by the per-role extractors.
    pub(crate) fn structure(line: usize, message: impl Into<String>) -> Self {
        Error::Structure {
            line,
            message: message.into(),
        }
    }
}
