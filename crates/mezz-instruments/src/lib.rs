//! # Mezzanine Instruments
//!
//! The security and deal data model for the Mezzanine valuation library.
//!
//! A [`Deal`] is the read-only input to a valuation: global market fields
//! plus an ordered list of securities. Each [`Security`] is a tagged
//! variant over the four supported hybrid instruments:
//!
//! - **RCPS**: redeemable convertible preferred stock
//! - **CB**: convertible bond
//! - **CPS**: convertible preferred stock
//! - **ESO**: employee stock option
//!
//! RCPS/CB/CPS share [`ConvertibleTerms`]; ESO carries [`EsoTerms`]. Both
//! embed the common [`MarketTerms`] record (spot, volatility, dates, rates,
//! optional curves).
//!
//! Boundary validation is two-layered: `Security::check` rejects term
//! sheets that cannot be priced at all with an [`InstrumentError`], while
//! `Security::validate` produces non-blocking [`ValidationWarning`]s; a
//! warned security still prices, with documented fallbacks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{InstrumentError, InstrumentResult};
    pub use crate::types::{
        AntiDilution, ConvertibleTerms, Deal, DealSecurity, EsoTerms, MarketTerms, OptionWindow,
        Participation, Position, ResetEvent, Security,
    };
    pub use crate::validation::ValidationWarning;
}

pub use error::{InstrumentError, InstrumentResult};
pub use types::{
    AntiDilution, ConvertibleTerms, Deal, DealSecurity, EsoTerms, MarketTerms, OptionWindow,
    Participation, Position, ResetEvent, Security,
};
pub use validation::ValidationWarning;
