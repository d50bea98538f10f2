//! Error types for the loyalty points calculator.

use thiserror::Error;

/// Result type alias for loyalty operations
pub type Result<T> = std::result::Result<T, LoyaltyError>;

/// Errors that can occur while loading transactions or producing a report.
#[derive(Error, Debug)]
pub enum LoyaltyError {
    /// Failed to open, read or write a file or stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing or writing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Purchase amount is negative, non-numeric or out of range
    #[error("Invalid purchase amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: &'static str },

    /// Customer id or month that cannot be read
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Transaction record that could not be turned into a transaction
    #[error("Invalid transaction at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}
