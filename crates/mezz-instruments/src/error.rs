//! Error types for the instrument data model.

use thiserror::Error;

/// A specialized Result type for instrument operations.
pub type InstrumentResult<T> = Result<T, InstrumentError>;

/// The error type for instrument construction.
#[derive(Error, Debug, Clone)]
pub enum InstrumentError {
    /// A security specification is structurally invalid.
    #[error("Invalid security specification: {reason}")]
    InvalidSpec {
        /// Description of what is invalid.
        reason: String,
    },
}

impl InstrumentError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }
}
