//! Backward induction for employee stock options.

use mezz_instruments::{EsoTerms, Position};
use tracing::debug;

use crate::config::EngineConfig;
use crate::grid::TimeGrid;
use crate::lattice::CrrParams;
use crate::rates::StepwiseRates;
use crate::result::{NodeFlag, NodeLog, PricingMeta, PricingResult};

/// Prices an employee stock option grant and reports it for `position`.
///
/// A single equity leg is induced backwards on the CRR tree:
///
/// - nodes before the end of vesting cannot exercise;
/// - vested nodes may exercise early only where the share price reaches
///   the early-exercise multiple of the strike (a suboptimal-behaviour
///   proxy) and intrinsic beats continuation;
/// - every node value is decayed by the per-step employee survival
///   multiplier `exp(−λ·dt)` after the decision.
///
/// The grant carries no host component: the whole value sits in the
/// derivative column.
pub(crate) fn price_eso(
    terms: &EsoTerms,
    position: Position,
    config: &EngineConfig,
) -> PricingResult {
    let market = &terms.market;

    let grid = TimeGrid::weekly(market.valuation_date, market.maturity_date);
    let n = grid.n_steps();
    let dt = grid.dt();
    let crr = CrrParams::new(market.volatility, dt);
    let rates = StepwiseRates::resolve(market, n, dt);

    let meta = PricingMeta {
        dt,
        u: crr.u,
        d: crr.d,
        n_steps: n,
        valuation_date: market.valuation_date,
        maturity_date: market.maturity_date,
        curve_source: rates.source,
        eff_cp_final: None,
    };

    if grid.is_degenerate() {
        return PricingResult::assemble(
            "ESO",
            position,
            0.0,
            0.0,
            0.0,
            0.0,
            terms.option_count,
            true,
            Vec::new(),
            meta,
        );
    }

    let strike = terms.strike;
    let vesting_end = terms.effective_vesting_end();
    let exercise_threshold = terms.early_exercise_multiple * strike;
    let survival = (-terms.exit_rate * dt).exp();

    let depth = config.node_log_depth.min(n);
    let mut logs: Vec<NodeLog> = Vec::new();

    let mut value = vec![0.0; n + 1];
    for i in 0..=n {
        let s = crr.node_price(market.spot, n, i);
        let intrinsic = (s - strike).max(0.0);
        value[i] = intrinsic;

        if n <= depth {
            logs.push(NodeLog {
                step: n,
                node: i,
                share_price: s,
                debt: 0.0,
                equity: intrinsic,
                flag: if intrinsic > 0.0 {
                    NodeFlag::MaturityExercise
                } else {
                    NodeFlag::MaturityLapse
                },
                conversion_price: None,
            });
        }
    }

    for t in (0..n).rev() {
        let r = rates.risk_free[t];
        let q = crr.up_probability(r);
        let df = (-r * dt).exp();
        let vested = grid.date_at(t) >= vesting_end;

        for i in 0..=t {
            let continuation = df * (q * value[i + 1] + (1.0 - q) * value[i]);
            let s = crr.node_price(market.spot, t, i);

            let (decided, flag) = if vested {
                let intrinsic = (s - strike).max(0.0);
                if s >= exercise_threshold && intrinsic > continuation {
                    (intrinsic, NodeFlag::ExerciseSubopt)
                } else {
                    (continuation, NodeFlag::Hold)
                }
            } else {
                (continuation, NodeFlag::Unvested)
            };

            // Attrition applies to every node value after the decision.
            let decayed = decided * survival;
            value[i] = decayed;

            if t <= depth {
                logs.push(NodeLog {
                    step: t,
                    node: i,
                    share_price: s,
                    debt: 0.0,
                    equity: decayed,
                    flag,
                    conversion_price: None,
                });
            }
        }
    }

    logs.sort_by_key(|log| (log.step, log.node));

    let per_option = value[0];

    debug!(n_steps = n, per_option, "ESO priced");

    PricingResult::assemble(
        "ESO",
        position,
        per_option,
        0.0,
        0.0,
        per_option,
        terms.option_count,
        true,
        logs,
        meta,
    )
}
