//! # Mezzanine Curves
//!
//! The curve pipeline feeding the lattice engine:
//!
//! - **Par curves**: tenor-keyed yield points with piecewise-linear
//!   interpolation and flat extrapolation ([`ParCurve`])
//! - **Zero bootstrap**: par yields to annually compounded zero rates and
//!   discount factors ([`ZeroCurve`])
//! - **Stepwise forwards**: per-step discrete forward rates implied by
//!   ratios of bracketing discount factors ([`stepwise_forwards`])
//!
//! The pipeline is deliberately thin: its outputs are consumed node by node
//! inside the backward induction of the engine crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod interpolation;
pub mod par;
pub mod stepwise;
pub mod zero;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::par::{ParCurve, STANDARD_TENORS};
    pub use crate::stepwise::{stepwise_forwards, CurveSource};
    pub use crate::zero::ZeroCurve;
}

pub use error::{CurveError, CurveResult};
pub use par::{ParCurve, STANDARD_TENORS};
pub use stepwise::{stepwise_forwards, CurveSource};
pub use zero::ZeroCurve;
