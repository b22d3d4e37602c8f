//! Error types for the age calculator library

use std::path::PathBuf;
use thiserror::Error;

use crate::form::Field;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the age calculator library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference date parsing error
    #[error("Invalid date expression: {0}")]
    InvalidDateExpression(String),

    /// Field text did not start with an integer
    #[error("{0} is not a number")]
    UnparseableField(Field),

    /// Field value outside the accepted range (strict submission only)
    #[error("{field} must be between {min} and {max}, got {value}")]
    FieldOutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Log file could not be created
    #[error("Failed to create log file {}: {}", .path.display(), .source)]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// General error
    #[error("{0}")]
    General(String),
}
