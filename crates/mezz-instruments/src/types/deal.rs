//! The deal value object.

use mezz_core::Date;
use mezz_curves::ParCurve;
use serde::{Deserialize, Serialize};

use super::security::{Position, Security};

/// One security inside a deal, with its reporting side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealSecurity {
    /// Caller-assigned identifier, echoed in results and failure reports.
    pub id: String,

    /// Reporting side for this security.
    #[serde(default)]
    pub position: Position,

    /// The security term sheet.
    pub security: Security,
}

/// A deal: global market fields plus an ordered list of securities.
///
/// The deal is read-only input. Deal-level market fields are injected into
/// each security before pricing (see [`Deal::hydrated_securities`]); the
/// per-security type-specific fields are untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    /// Display name of the deal.
    pub deal_name: String,

    /// Valuation date for every security in the deal.
    pub valuation_date: Date,

    /// Current underlying share price.
    pub share_price_current: f64,

    /// Total underlying shares outstanding (denominator of the deal
    /// price-per-share).
    pub underlying_num_shares: f64,

    /// Annual volatility applied to every security.
    pub volatility: f64,

    /// Flat fallback risk-free rate.
    pub risk_free_rate: f64,

    /// Flat fallback credit spread.
    pub credit_spread: f64,

    /// Optional deal-level risk-free par curve.
    #[serde(default)]
    pub risk_free_curve: Option<ParCurve>,

    /// Optional deal-level corporate par curve.
    #[serde(default)]
    pub corporate_curve: Option<ParCurve>,

    /// The securities of the deal, in reporting order.
    pub securities: Vec<DealSecurity>,
}

impl Deal {
    /// Returns the deal's securities with deal-level market fields
    /// injected into each one.
    ///
    /// Injected fields: spot, volatility, valuation date, flat fallback
    /// rates, and the par curves (when the deal carries them). Maturity
    /// dates, stepwise overrides, and all type-specific terms stay with
    /// the security.
    #[must_use]
    pub fn hydrated_securities(&self) -> Vec<DealSecurity> {
        self.securities
            .iter()
            .map(|ds| {
                let mut ds = ds.clone();
                let market = ds.security.market_mut();
                market.spot = self.share_price_current;
                market.volatility = self.volatility;
                market.valuation_date = self.valuation_date;
                market.risk_free_rate = self.risk_free_rate;
                market.credit_spread = self.credit_spread;
                if self.risk_free_curve.is_some() {
                    market.risk_free_curve = self.risk_free_curve.clone();
                }
                if self.corporate_curve.is_some() {
                    market.corporate_curve = self.corporate_curve.clone();
                }
                ds
            })
            .collect()
    }
}
