//! Per-step rate resolution.

use mezz_curves::{stepwise_forwards, CurveSource, ParCurve, ZeroCurve};
use mezz_instruments::MarketTerms;

/// The per-step rate arrays consumed by the backward induction.
#[derive(Debug, Clone)]
pub struct StepwiseRates {
    /// Risk-free rate per step, length `N`.
    pub risk_free: Vec<f64>,

    /// Credit spread per step, length `N`.
    pub credit_spread: Vec<f64>,

    /// Where the arrays came from.
    pub source: CurveSource,
}

impl StepwiseRates {
    /// Resolves the stepwise arrays for a grid of `n` steps of size `dt`.
    ///
    /// Resolution order:
    ///
    /// 1. user-supplied stepwise rate arrays of length ≥ `n`, used
    ///    verbatim (truncated to `n`);
    /// 2. par curves, bootstrapped to zeros and reduced to per-step
    ///    forwards; the spread leg comes from the pointwise
    ///    `corporate − risk-free` curve when both are present, else the
    ///    flat scalar;
    /// 3. constant arrays from the flat scalar fallbacks.
    #[must_use]
    pub fn resolve(market: &MarketTerms, n: usize, dt: f64) -> Self {
        if let Some(user_rates) = market
            .stepwise_rates
            .as_ref()
            .filter(|rates| rates.len() >= n)
        {
            let risk_free = user_rates[..n].to_vec();
            let credit_spread = match market
                .stepwise_spreads
                .as_ref()
                .filter(|spreads| spreads.len() >= n)
            {
                Some(user_spreads) => user_spreads[..n].to_vec(),
                None => vec![market.credit_spread; n],
            };
            return Self {
                risk_free,
                credit_spread,
                source: CurveSource::UserStepwise,
            };
        }

        if let Some(rf_par) = &market.risk_free_curve {
            if let Some(rates) = Self::from_curves(rf_par, market.corporate_curve.as_ref(), market, n, dt)
            {
                return rates;
            }
        }

        Self {
            risk_free: vec![market.risk_free_rate; n],
            credit_spread: vec![market.credit_spread; n],
            source: CurveSource::FlatFallback,
        }
    }

    fn from_curves(
        rf_par: &ParCurve,
        corp_par: Option<&ParCurve>,
        market: &MarketTerms,
        n: usize,
        dt: f64,
    ) -> Option<Self> {
        let rf_zero = ZeroCurve::bootstrap(rf_par).ok()?;
        let risk_free = stepwise_forwards(&rf_zero, n, dt);

        let credit_spread = match corp_par {
            Some(corp) => {
                let spread_par = ParCurve::credit_spread(corp, rf_par).ok()?;
                let spread_zero = ZeroCurve::bootstrap(&spread_par).ok()?;
                stepwise_forwards(&spread_zero, n, dt)
            }
            None => vec![market.credit_spread; n],
        };

        Some(Self {
            risk_free,
            credit_spread,
            source: CurveSource::BootstrappedCurve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mezz_core::Date;

    fn market() -> MarketTerms {
        MarketTerms::flat(
            10_000.0,
            0.35,
            Date::from_ymd(2025, 6, 30).unwrap(),
            Date::from_ymd(2028, 6, 30).unwrap(),
            0.035,
            0.02,
        )
    }

    #[test]
    fn test_flat_fallback() {
        let rates = StepwiseRates::resolve(&market(), 10, 7.0 / 365.0);

        assert_eq!(rates.source, CurveSource::FlatFallback);
        assert_eq!(rates.risk_free.len(), 10);
        assert!(rates.risk_free.iter().all(|&r| (r - 0.035).abs() < 1e-12));
        assert!(rates
            .credit_spread
            .iter()
            .all(|&s| (s - 0.02).abs() < 1e-12));
    }

    #[test]
    fn test_user_arrays_win_and_truncate() {
        let mut m = market();
        m.stepwise_rates = Some(vec![0.04; 20]);
        m.stepwise_spreads = Some(vec![0.01; 20]);

        let rates = StepwiseRates::resolve(&m, 10, 7.0 / 365.0);

        assert_eq!(rates.source, CurveSource::UserStepwise);
        assert_eq!(rates.risk_free.len(), 10);
        assert_relative_eq!(rates.risk_free[9], 0.04, epsilon = 1e-12);
        assert_relative_eq!(rates.credit_spread[0], 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_short_user_arrays_are_ignored() {
        let mut m = market();
        m.stepwise_rates = Some(vec![0.04; 5]);

        let rates = StepwiseRates::resolve(&m, 10, 7.0 / 365.0);
        assert_eq!(rates.source, CurveSource::FlatFallback);
    }

    #[test]
    fn test_curve_resolution() {
        let mut m = market();
        m.risk_free_curve = Some(ParCurve::new(vec![1.0, 5.0], vec![0.03, 0.03]).unwrap());
        m.corporate_curve = Some(ParCurve::new(vec![1.0, 5.0], vec![0.05, 0.05]).unwrap());

        let dt = 7.0 / 365.0;
        let rates = StepwiseRates::resolve(&m, 52, dt);

        assert_eq!(rates.source, CurveSource::BootstrappedCurve);
        // Flat 3% annually compounded curve: per-step simple forward.
        let expected_rf = ((1.03_f64).powf(dt) - 1.0) / dt;
        assert_relative_eq!(rates.risk_free[10], expected_rf, epsilon = 1e-10);
        // Flat 2% spread curve.
        let expected_cs = ((1.02_f64).powf(dt) - 1.0) / dt;
        assert_relative_eq!(rates.credit_spread[10], expected_cs, epsilon = 1e-10);
    }

    #[test]
    fn test_rf_curve_without_corp_uses_flat_spread() {
        let mut m = market();
        m.risk_free_curve = Some(ParCurve::new(vec![1.0, 5.0], vec![0.03, 0.04]).unwrap());

        let rates = StepwiseRates::resolve(&m, 20, 7.0 / 365.0);
        assert_eq!(rates.source, CurveSource::BootstrappedCurve);
        assert!(rates.credit_spread.iter().all(|&s| (s - 0.02).abs() < 1e-12));
    }
}
