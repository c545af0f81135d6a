//! Terms for employee stock options.

use mezz_core::Date;
use serde::{Deserialize, Serialize};

use super::market::MarketTerms;

fn default_exercise_multiple() -> f64 {
    1000.0
}

/// Full term sheet of an employee stock option grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsoTerms {
    /// Common market fields.
    pub market: MarketTerms,

    /// Number of options in the grant.
    pub option_count: f64,

    /// Exercise (strike) price per option.
    pub strike: f64,

    /// End of the vesting period. Treated as the maturity date if absent.
    #[serde(default)]
    pub vesting_end: Option<Date>,

    /// Annual employee-exit intensity (attrition), applied per step as a
    /// survival multiplier `exp(−λ·dt)`.
    #[serde(default)]
    pub exit_rate: f64,

    /// Early-exercise share-price multiple `m`: vested early exercise is
    /// permitted only where `S ≥ m × strike` (a suboptimal-behaviour
    /// proxy).
    ///
    /// The default of `1000.0` is effectively infinite and disables early
    /// exercise unless explicitly configured. Kept as the source
    /// behaviour.
    #[serde(default = "default_exercise_multiple")]
    pub early_exercise_multiple: f64,
}

impl EsoTerms {
    /// Effective vesting end: the explicit date, or maturity when absent.
    #[must_use]
    pub fn effective_vesting_end(&self) -> Date {
        self.vesting_end.unwrap_or(self.market.maturity_date)
    }
}
