//! # Mezzanine Engine
//!
//! Binomial lattice pricing for hybrid equity-linked securities.
//!
//! Every security is priced on a Cox–Ross–Rubinstein share-price tree with
//! a weekly time grid and stepwise (time-varying) risk-free and
//! credit-spread discounting:
//!
//! - **TF engine** ([`tf`]): RCPS / CB / CPS with voluntary conversion,
//!   issuer call, holder put, anti-dilution refixing, and the RCPS
//!   participating-preferred terminal payoff. Two parallel value legs are
//!   carried through the induction: a debt leg discounted on the risky
//!   curve and an equity leg discounted risk-free.
//! - **ESO engine** ([`eso`]): employee stock options with a vesting gate,
//!   an early-exercise share-price multiple, and per-step employee
//!   attrition.
//! - **Host DCF** ([`host`]): the straight-instrument value used to impute
//!   the embedded derivative by subtraction.
//!
//! The entry point is [`price_security`], which dispatches on the
//! security variant and returns a [`PricingResult`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod eso;
pub mod grid;
pub mod host;
pub mod lattice;
pub mod rates;
pub mod refixing;
pub mod result;
pub mod tf;

mod pricer;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::grid::TimeGrid;
    pub use crate::price_security;
    pub use crate::result::{NodeFlag, NodeLog, PricingMeta, PricingResult};
}

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use grid::TimeGrid;
pub use pricer::price_security;
pub use result::{NodeFlag, NodeLog, PricingMeta, PricingResult};
