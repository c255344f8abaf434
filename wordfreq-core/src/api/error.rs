//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, encoding, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<crate::domain::ParseWordOrderError> for Error {
    fn from(err: crate::domain::ParseWordOrderError) -> Self {
        Error::Configuration(err.to_string())
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
