//! Stepwise forward rate extraction.

use serde::{Deserialize, Serialize};

use crate::zero::ZeroCurve;

/// Where the per-step rate arrays used by a pricing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurveSource {
    /// User-supplied stepwise arrays, used verbatim (truncated to N).
    UserStepwise,

    /// Arrays extracted from bootstrapped par curves.
    BootstrappedCurve,

    /// Constant arrays from the flat scalar fallback rates.
    FlatFallback,
}

impl std::fmt::Display for CurveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UserStepwise => "USER_STEPWISE",
            Self::BootstrappedCurve => "BOOTSTRAPPED_CURVE",
            Self::FlatFallback => "FLAT_FALLBACK",
        };
        write!(f, "{name}")
    }
}

/// Extracts per-step forward rates from a zero curve.
///
/// For each step `t ∈ [0, n)` with `τ₁ = t·dt` and `τ₂ = (t+1)·dt`, the
/// simple forward over the step is
///
/// `f = (DF(τ₁) / DF(τ₂) − 1) / dt`
///
/// Returns an array of length `n`.
#[must_use]
pub fn stepwise_forwards(curve: &ZeroCurve, n: usize, dt: f64) -> Vec<f64> {
    (0..n)
        .map(|t| {
            let df1 = curve.discount_factor(t as f64 * dt);
            let df2 = curve.discount_factor((t + 1) as f64 * dt);
            (df1 / df2 - 1.0) / dt
        })
        .collect()
}
