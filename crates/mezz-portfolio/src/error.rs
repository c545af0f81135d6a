//! Error types for deal aggregation.

use thiserror::Error;

/// A specialized Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// The error type for deal aggregation.
///
/// Per-security pricing failures are not errors at this level: they are
/// isolated into `DealResult::failures`. This type covers deals that
/// cannot be aggregated at all: non-finite or non-positive deal-level
/// market fields that would fail every security identically.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// The deal itself is structurally unusable.
    #[error("Invalid deal: {reason}")]
    InvalidDeal {
        /// Description of what is invalid.
        reason: String,
    },
}

impl PortfolioError {
    /// Creates an invalid deal error.
    #[must_use]
    pub fn invalid_deal(reason: impl Into<String>) -> Self {
        Self::InvalidDeal {
            reason: reason.into(),
        }
    }
}
