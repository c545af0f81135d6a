//! # Mezzanine Core
//!
//! Core types for the Mezzanine hybrid securities valuation library.
//!
//! This crate provides the foundational building blocks used throughout
//! Mezzanine:
//!
//! - **Types**: the civil [`Date`] type used for all schedule arithmetic
//! - **Day Count Conventions**: ACT/365F year fractions for the lattice
//! - **Errors**: the shared [`CoreError`] type
//!
//! All downstream quantities (rates, prices, year fractions) are plain `f64`
//! values: rates are decimals (`0.035` = 3.5%), monetary amounts are KRW by
//! convention.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::Date;
