//! Market terms shared by every security.

use mezz_core::Date;
use mezz_curves::ParCurve;
use serde::{Deserialize, Serialize};

/// Market fields common to every security variant.
///
/// Rates are decimals (`0.035` = 3.5%). The flat `risk_free_rate` and
/// `credit_spread` are fallbacks: they populate constant per-step arrays
/// when neither user-supplied stepwise arrays nor par curves are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketTerms {
    /// Underlying share spot price.
    pub spot: f64,

    /// Annual volatility of the underlying.
    pub volatility: f64,

    /// Valuation date (step 0 of the time grid).
    pub valuation_date: Date,

    /// Maturity date (final, pinned step of the time grid).
    pub maturity_date: Date,

    /// Flat fallback risk-free rate.
    pub risk_free_rate: f64,

    /// Flat fallback credit spread.
    pub credit_spread: f64,

    /// Optional user-supplied per-step risk-free rates.
    ///
    /// Used verbatim (truncated to the step count) when at least as long
    /// as the grid; otherwise ignored.
    #[serde(default)]
    pub stepwise_rates: Option<Vec<f64>>,

    /// Optional user-supplied per-step credit spreads.
    #[serde(default)]
    pub stepwise_spreads: Option<Vec<f64>>,

    /// Optional risk-free par-yield curve.
    #[serde(default)]
    pub risk_free_curve: Option<ParCurve>,

    /// Optional corporate par-yield curve (spread = corporate − risk-free).
    #[serde(default)]
    pub corporate_curve: Option<ParCurve>,
}

impl MarketTerms {
    /// Creates market terms with flat fallback rates and no curves.
    #[must_use]
    pub fn flat(
        spot: f64,
        volatility: f64,
        valuation_date: Date,
        maturity_date: Date,
        risk_free_rate: f64,
        credit_spread: f64,
    ) -> Self {
        Self {
            spot,
            volatility,
            valuation_date,
            maturity_date,
            risk_free_rate,
            credit_spread,
            stepwise_rates: None,
            stepwise_spreads: None,
            risk_free_curve: None,
            corporate_curve: None,
        }
    }
}
