//! Error types for the Mezzanine core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core operations.
///
/// The valuation core is total within its documented input constraints;
/// errors are reserved for structurally malformed input (unparseable dates,
/// impossible calendar values), never for ordinary numeric degeneracy.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Structurally invalid input.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what is invalid.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
