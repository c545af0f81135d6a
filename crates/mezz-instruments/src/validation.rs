//! Boundary validation for security input.
//!
//! Two layers, both applied at the boundary:
//!
//! - [`Security::check`] rejects term sheets the engine cannot price at
//!   all (non-finite spot, a per-share instrument without shares, a
//!   non-positive conversion price or strike) with an
//!   [`InstrumentError`].
//! - [`Security::validate`] reports non-blocking [`ValidationWarning`]s:
//!   every warned condition still prices, with a documented fallback.
//!   Warnings exist so the calling application can surface silent
//!   approximations (notably the shares-outstanding fallback for
//!   weighted-average anti-dilution) to the user who omitted the input.

use serde::{Deserialize, Serialize};

use crate::error::{InstrumentError, InstrumentResult};
use crate::types::{AntiDilution, ConvertibleTerms, Security};
use mezz_core::Date;

/// A non-blocking finding about a security's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationWarning {
    /// Maturity is on or before the valuation date; the engine returns an
    /// all-zero result with meta only.
    DegenerateSchedule {
        /// Valuation date.
        valuation_date: Date,
        /// Maturity date.
        maturity_date: Date,
    },

    /// Volatility is zero or negative; the lattice floors it at a small
    /// epsilon.
    NonPositiveVolatility {
        /// The offending volatility.
        volatility: f64,
    },

    /// A weighted-average reset event omits `shares_outstanding_before`;
    /// the engine substitutes a fallback constant (an approximation the
    /// caller should confirm).
    WaSharesOutstandingMissing {
        /// Date of the offending reset event.
        event_date: Date,
    },

    /// A conversion-ratio override is set but the anti-dilution policy is
    /// not `NONE`, so the override is ignored.
    ConversionRatioOverrideIgnored,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateSchedule {
                valuation_date,
                maturity_date,
            } => write!(
                f,
                "maturity {maturity_date} is not after valuation {valuation_date}; result will be zero"
            ),
            Self::NonPositiveVolatility { volatility } => {
                write!(f, "volatility {volatility} is not positive")
            }
            Self::WaSharesOutstandingMissing { event_date } => write!(
                f,
                "reset event {event_date} omits shares_outstanding_before; weighted-average refixing will use the fallback constant"
            ),
            Self::ConversionRatioOverrideIgnored => write!(
                f,
                "conversion_ratio_override is ignored because anti_dilution is not NONE"
            ),
        }
    }
}

impl Security {
    /// Rejects term sheets that cannot be priced at all.
    ///
    /// Everything this accepts prices without panicking; degenerate but
    /// usable input (maturity before valuation, zero volatility, missing
    /// rate arrays) passes here and is handled by documented fallbacks.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidSpec`] for a non-finite or
    /// non-positive spot, a non-finite volatility, a per-share instrument
    /// without shares, or a non-positive conversion price, issue price,
    /// or strike.
    pub fn check(&self) -> InstrumentResult<()> {
        let market = self.market();
        if !market.spot.is_finite() || market.spot <= 0.0 {
            return Err(InstrumentError::invalid_spec(format!(
                "spot {} is not a positive finite number",
                market.spot
            )));
        }
        if !market.volatility.is_finite() {
            return Err(InstrumentError::invalid_spec("volatility is not finite"));
        }

        match self {
            Self::Rcps(terms) | Self::Cps(terms) => {
                if terms.share_count <= 0.0 {
                    return Err(InstrumentError::invalid_spec(
                        "per-share instrument requires a positive share_count",
                    ));
                }
                check_convertible(terms)
            }
            Self::Cb(terms) => check_convertible(terms),
            Self::Eso(terms) => {
                if terms.strike <= 0.0 || !terms.strike.is_finite() {
                    return Err(InstrumentError::invalid_spec("strike must be positive"));
                }
                if terms.option_count < 0.0 {
                    return Err(InstrumentError::invalid_spec(
                        "option_count must not be negative",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Inspects the security's input and returns all boundary warnings.
    ///
    /// An empty vector means the input is clean. Warnings never prevent
    /// pricing.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let market = self.market();

        if market.maturity_date <= market.valuation_date {
            warnings.push(ValidationWarning::DegenerateSchedule {
                valuation_date: market.valuation_date,
                maturity_date: market.maturity_date,
            });
        }

        if market.volatility <= 0.0 {
            warnings.push(ValidationWarning::NonPositiveVolatility {
                volatility: market.volatility,
            });
        }

        if let Some(terms) = self.convertible() {
            if terms.anti_dilution == AntiDilution::WaDownOnly {
                for event in &terms.reset_events {
                    if event.shares_outstanding_before.is_none() {
                        warnings.push(ValidationWarning::WaSharesOutstandingMissing {
                            event_date: event.date,
                        });
                    }
                }
            }

            if terms.conversion_ratio_override.is_some()
                && terms.anti_dilution != AntiDilution::None
            {
                warnings.push(ValidationWarning::ConversionRatioOverrideIgnored);
            }
        }

        warnings
    }
}

fn check_convertible(terms: &ConvertibleTerms) -> InstrumentResult<()> {
    if terms.initial_conversion_price <= 0.0 || !terms.initial_conversion_price.is_finite() {
        return Err(InstrumentError::invalid_spec(
            "initial_conversion_price must be positive",
        ));
    }
    if terms.total_issue_price <= 0.0 {
        return Err(InstrumentError::invalid_spec(
            "total_issue_price must be positive",
        ));
    }
    Ok(())
}
