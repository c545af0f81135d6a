//! Host (straight-instrument) discounted cash flow.

use crate::rates::StepwiseRates;

/// Values the straight debt/preferred component per unit.
///
/// The risky discount factor accumulates step by step,
/// `Π_t exp(−(r_t + cs_t)·dt)`; the host is the periodic unit cash at
/// every accumulated factor plus the redemption amount at the terminal
/// factor. It depends only on the cash flows and the risky curve; the
/// spot lattice never enters.
#[must_use]
pub fn host_unit_value(
    redemption_unit: f64,
    cash_unit: f64,
    rates: &StepwiseRates,
    n: usize,
    dt: f64,
) -> f64 {
    let mut acc = 1.0;
    let mut value = 0.0;
    for t in 0..n {
        acc *= (-(rates.risk_free[t] + rates.credit_spread[t]) * dt).exp();
        value += cash_unit * acc;
    }
    value + redemption_unit * acc
}
