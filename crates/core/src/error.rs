//! Error type shared by every fallible vector operation.
//!
//! Numeric edge cases (division by zero, normalizing a zero-length vector) are
//! never errors; they propagate `Infinity`/`NaN`. Only ill-typed or malformed
//! arguments are rejected.

use thiserror::Error;

/// Errors raised by vector construction and the dynamic operand layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value was supplied where a number or a vector was required and it
    /// was neither.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create an `InvalidArgument` error with the given description.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
