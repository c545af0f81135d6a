//! Error types for curve construction.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// The error type for curve construction.
///
/// Out-of-range lookups are not errors: every curve extrapolates flat at
/// both ends. Errors are reserved for structurally invalid curve data.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Curve has no data points.
    #[error("Curve has no points")]
    EmptyCurve,

    /// Curve data is structurally invalid.
    #[error("Invalid curve data: {reason}")]
    InvalidData {
        /// Description of the failure.
        reason: String,
    },
}

impl CurveError {
    /// Creates an invalid data error.
    #[must_use]
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }
}
