//! Instrument domain types.

mod convertible;
mod deal;
mod eso;
mod market;
mod security;

pub use convertible::{AntiDilution, ConvertibleTerms, OptionWindow, Participation, ResetEvent};
pub use deal::{Deal, DealSecurity};
pub use eso::EsoTerms;
pub use market::MarketTerms;
pub use security::{Position, Security};
