//! Deal valuation and aggregation.

use mezz_engine::{price_security, EngineConfig, PricingResult};
use mezz_instruments::Deal;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PortfolioError, PortfolioResult};

/// One priced security inside a deal result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityValuation {
    /// Caller-assigned security identifier.
    pub id: String,

    /// The full pricing result.
    pub result: PricingResult,
}

/// The aggregate valuation of a deal.
///
/// The partitions sum per-security non-negative portions independently of
/// the signed total, so `total_asset − total_liability = total_value`
/// holds while both partitions stay non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealResult {
    /// Deal display name, echoed from the input.
    pub deal_name: String,

    /// Per-security valuations, in deal order (failed securities omitted).
    pub securities: Vec<SecurityValuation>,

    /// Sum of signed totals.
    pub total_value: f64,

    /// Sum of signed host components.
    pub total_host: f64,

    /// Sum of signed derivative components.
    pub total_deriv: f64,

    /// Sum of non-negative per-security asset portions.
    pub total_asset: f64,

    /// Sum of non-negative per-security liability portions.
    pub total_liability: f64,

    /// Sum of non-negative per-security derivative asset portions.
    pub total_deriv_asset: f64,

    /// Sum of non-negative per-security derivative liability portions.
    pub total_deriv_liab: f64,

    /// `total_value / underlying_num_shares`, when the denominator is
    /// positive.
    pub price_per_share: Option<f64>,

    /// Securities that failed to price: `(id, reason)`. Failed securities
    /// contribute nothing to the totals.
    pub failures: Vec<(String, String)>,
}

/// Values a whole deal.
///
/// Deal-level market fields are injected into each security, securities
/// price independently in parallel, and per-security failures are
/// isolated into [`DealResult::failures`] rather than failing the deal.
///
/// # Errors
///
/// Returns [`PortfolioError::InvalidDeal`] when the deal-level market
/// fields are structurally unusable (non-finite or non-positive share
/// price, non-finite volatility, negative or non-finite share count);
/// hydration would propagate such fields into every security, so the
/// deal is rejected before fan-out.
pub fn value_deal(deal: &Deal, config: &EngineConfig) -> PortfolioResult<DealResult> {
    check_deal(deal)?;

    info!(
        deal_name = %deal.deal_name,
        securities = deal.securities.len(),
        "valuing deal"
    );

    let priced: Vec<_> = deal
        .hydrated_securities()
        .par_iter()
        .map(|ds| {
            let outcome = price_security(&ds.security, ds.position, config);
            (ds.id.clone(), outcome)
        })
        .collect();

    let mut securities = Vec::new();
    let mut failures = Vec::new();
    for (id, outcome) in priced {
        match outcome {
            Ok(result) => securities.push(SecurityValuation { id, result }),
            Err(err) => {
                warn!(security_id = %id, error = %err, "security pricing failed");
                failures.push((id, err.to_string()));
            }
        }
    }

    let total_value: f64 = securities.iter().map(|s| s.result.fair_value_total).sum();
    let total_host: f64 = securities.iter().map(|s| s.result.fair_value_host).sum();
    let total_deriv: f64 = securities.iter().map(|s| s.result.fair_value_deriv).sum();
    let total_asset: f64 = securities.iter().map(|s| s.result.asset()).sum();
    let total_liability: f64 = securities.iter().map(|s| s.result.liability()).sum();
    let total_deriv_asset: f64 = securities
        .iter()
        .map(|s| s.result.fair_value_deriv_asset)
        .sum();
    let total_deriv_liab: f64 = securities
        .iter()
        .map(|s| s.result.fair_value_deriv_liab)
        .sum();

    let price_per_share = (deal.underlying_num_shares > 0.0)
        .then(|| total_value / deal.underlying_num_shares);

    info!(
        deal_name = %deal.deal_name,
        total_value,
        failed = failures.len(),
        "deal valued"
    );

    Ok(DealResult {
        deal_name: deal.deal_name.clone(),
        securities,
        total_value,
        total_host,
        total_deriv,
        total_asset,
        total_liability,
        total_deriv_asset,
        total_deriv_liab,
        price_per_share,
        failures,
    })
}

fn check_deal(deal: &Deal) -> PortfolioResult<()> {
    if !deal.share_price_current.is_finite() || deal.share_price_current <= 0.0 {
        return Err(PortfolioError::invalid_deal(format!(
            "share_price_current {} is not a positive finite number",
            deal.share_price_current
        )));
    }
    if !deal.volatility.is_finite() {
        return Err(PortfolioError::invalid_deal("volatility is not finite"));
    }
    if !deal.underlying_num_shares.is_finite() || deal.underlying_num_shares < 0.0 {
        return Err(PortfolioError::invalid_deal(format!(
            "underlying_num_shares {} must be a non-negative finite number",
            deal.underlying_num_shares
        )));
    }
    Ok(())
}
