//! Error types for the pricing engine.

use mezz_instruments::InstrumentError;
use thiserror::Error;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// The error type for pricing operations.
///
/// The engine is total within documented input constraints: degenerate
/// schedules, missing rate arrays, and out-of-range tenors are handled by
/// fallback. Errors only arise for structurally unusable term sheets,
/// rejected by `Security::check` at the boundary, and the portfolio layer
/// isolates them per security.
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// The security's term sheet failed the boundary check.
    #[error(transparent)]
    InvalidInstrument(#[from] InstrumentError),
}
