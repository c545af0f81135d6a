//! # Mezzanine
//!
//! Valuation of Korean-market mezzanine securities (RCPS, CB, CPS, and
//! ESO) on a common binomial lattice, with a host/derivative split and
//! deal-level aggregation.
//!
//! This facade crate re-exports the public API of the member crates:
//!
//! - [`mezz_core`]: dates, day counts, shared errors
//! - [`mezz_curves`]: par curves, zero bootstrap, stepwise forwards
//! - [`mezz_instruments`]: the `Security` / `Deal` data model
//! - [`mezz_engine`]: the lattice pricing engines
//! - [`mezz_portfolio`]: deal aggregation
//!
//! ## Quick start
//!
//! ```rust
//! use mezzanine::prelude::*;
//!
//! let deal = Deal {
//!     deal_name: "Series B".to_string(),
//!     valuation_date: Date::parse("2025-06-30").unwrap(),
//!     share_price_current: 20_000.0,
//!     underlying_num_shares: 1_000_000.0,
//!     volatility: 0.35,
//!     risk_free_rate: 0.035,
//!     credit_spread: 0.02,
//!     risk_free_curve: None,
//!     corporate_curve: None,
//!     securities: vec![],
//! };
//!
//! let result = value_deal(&deal, &EngineConfig::default()).unwrap();
//! assert_eq!(result.deal_name, "Series B");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use mezz_core;
pub use mezz_curves;
pub use mezz_engine;
pub use mezz_instruments;
pub use mezz_portfolio;

/// Prelude re-exporting the whole public surface.
pub mod prelude {
    pub use mezz_core::prelude::*;
    pub use mezz_curves::prelude::*;
    pub use mezz_engine::prelude::*;
    pub use mezz_instruments::prelude::*;
    pub use mezz_portfolio::prelude::*;
}
