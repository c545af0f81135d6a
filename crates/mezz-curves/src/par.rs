//! Par-yield curves on a tenor grid.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::interp_linear_flat;

/// The standard tenor grid (in years) on which market yields are quoted
/// and credit spreads are derived.
pub const STANDARD_TENORS: [f64; 12] = [
    0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 7.0, 10.0,
];

/// A par-yield curve: ordered `(tenor, yield)` points.
///
/// Lookups interpolate linearly in yield between bracketing points and
/// extrapolate flat beyond both ends.
///
/// # Example
///
/// ```rust
/// use mezz_curves::ParCurve;
///
/// let curve = ParCurve::new(
///     vec![0.25, 1.0, 3.0],
///     vec![0.030, 0.033, 0.037],
/// ).unwrap();
///
/// let y = curve.yield_at(2.0);
/// assert!(y > 0.033 && y < 0.037);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParCurve {
    tenors: Vec<f64>,
    yields: Vec<f64>,
}

impl ParCurve {
    /// Creates a par curve from tenor and yield arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is empty, the arrays have different
    /// lengths, or the tenors are not strictly increasing and positive.
    pub fn new(tenors: Vec<f64>, yields: Vec<f64>) -> CurveResult<Self> {
        if tenors.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        if tenors.len() != yields.len() {
            return Err(CurveError::invalid_data(format!(
                "tenors and yields must have same length: {} vs {}",
                tenors.len(),
                yields.len()
            )));
        }
        if tenors[0] <= 0.0 {
            return Err(CurveError::invalid_data("tenors must be positive"));
        }
        for i in 1..tenors.len() {
            if tenors[i] <= tenors[i - 1] {
                return Err(CurveError::invalid_data(
                    "tenors must be strictly increasing",
                ));
            }
        }

        Ok(Self { tenors, yields })
    }

    /// Creates a par curve on the standard tenor grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `yields` does not have one entry per standard
    /// tenor.
    pub fn on_standard_tenors(yields: Vec<f64>) -> CurveResult<Self> {
        Self::new(STANDARD_TENORS.to_vec(), yields)
    }

    /// Returns the curve tenors.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Returns the curve yields.
    #[must_use]
    pub fn yields(&self) -> &[f64] {
        &self.yields
    }

    /// Returns the interpolated yield at a tenor.
    ///
    /// Linear in yield between bracketing points, flat beyond both ends.
    #[must_use]
    pub fn yield_at(&self, tenor: f64) -> f64 {
        interp_linear_flat(&self.tenors, &self.yields, tenor)
    }

    /// Derives a credit-spread curve from a corporate and a risk-free
    /// par curve.
    ///
    /// The spread is `corp_yield − rf_yield`, evaluated pointwise on the
    /// standard tenor grid.
    ///
    /// # Errors
    ///
    /// Propagates construction failure (cannot occur for the standard
    /// grid, which is non-empty and strictly increasing).
    pub fn credit_spread(corp: &ParCurve, rf: &ParCurve) -> CurveResult<Self> {
        let spreads = STANDARD_TENORS
            .iter()
            .map(|&t| corp.yield_at(t) - rf.yield_at(t))
            .collect();
        Self::on_standard_tenors(spreads)
    }
}
