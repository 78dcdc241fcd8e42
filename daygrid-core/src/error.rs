//! Error types for the daygrid engine.

use thiserror::Error;

/// Errors that can occur while preparing engine inputs.
///
/// The layout algorithms themselves never fail: malformed events pass
/// through as degenerate data and empty inputs produce empty outputs.
#[derive(Error, Debug)]
pub enum DayGridError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for daygrid operations.
pub type DayGridResult<T> = Result<T, DayGridError>;
