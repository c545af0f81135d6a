//! Cox–Ross–Rubinstein lattice parameters.

/// Volatility floor preventing a collapsed tree (`u == d`) when the input
/// volatility is zero or negative. A warned fallback, not an error.
const MIN_SIGMA: f64 = 1e-8;

/// CRR tree parameters: equal multiplicative jumps `u = exp(σ√dt)`,
/// `d = 1/u`.
///
/// The share price at node `(t, i)` (after `i` up-moves) is
/// `S0 · uⁱ · d^(t−i)`. The per-step risk-neutral up-probability depends
/// on that step's risk-free rate and is computed per step via
/// [`CrrParams::up_probability`].
#[derive(Debug, Clone, Copy)]
pub struct CrrParams {
    /// Up multiplier.
    pub u: f64,

    /// Down multiplier (`1/u`).
    pub d: f64,

    /// Uniform time step in years.
    pub dt: f64,
}

impl CrrParams {
    /// Derives CRR parameters from an annual volatility and step size.
    #[must_use]
    pub fn new(sigma: f64, dt: f64) -> Self {
        let sigma = sigma.max(MIN_SIGMA);
        let u = (sigma * dt.sqrt()).exp();
        Self { u, d: 1.0 / u, dt }
    }

    /// Risk-neutral up-probability for a step with risk-free rate `r`:
    /// `q = (exp(r·dt) − d) / (u − d)`.
    ///
    /// The drift is risk-neutral under the risk-free leg only; credit
    /// spread enters discounting, never the measure.
    #[must_use]
    pub fn up_probability(&self, r: f64) -> f64 {
        ((r * self.dt).exp() - self.d) / (self.u - self.d)
    }

    /// Share price at node `(t, i)`: `s0 · uⁱ · d^(t−i)`.
    #[must_use]
    pub fn node_price(&self, s0: f64, t: usize, i: usize) -> f64 {
        s0 * self.u.powi(i as i32) * self.d.powi((t - i) as i32)
    }
}
