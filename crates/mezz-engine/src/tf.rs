//! Backward induction for convertible instruments (RCPS, CB, CPS).
//!
//! Two value legs are carried in parallel through the tree: a debt leg
//! `D` discounted on the risky curve (and accruing the periodic unit
//! cash) and an equity leg `E` discounted risk-free. Once a node is
//! flagged converted (`D = 0, E > 0`), its continuation into the parents
//! is carried entirely in the equity leg.

use mezz_instruments::{ConvertibleTerms, Participation, Position};
use tracing::debug;

use crate::config::EngineConfig;
use crate::grid::TimeGrid;
use crate::host::host_unit_value;
use crate::lattice::CrrParams;
use crate::rates::StepwiseRates;
use crate::refixing::RefixingSchedule;
use crate::result::{NodeFlag, NodeLog, PricingMeta, PricingResult};

/// Prices a convertible instrument and reports it for `position`.
pub(crate) fn price_convertible(
    security_type: &'static str,
    terms: &ConvertibleTerms,
    position: Position,
    config: &EngineConfig,
) -> PricingResult {
    let per_share = security_type != "CB";
    let market = &terms.market;

    let grid = TimeGrid::weekly(market.valuation_date, market.maturity_date);
    let n = grid.n_steps();
    let dt = grid.dt();
    let crr = CrrParams::new(market.volatility, dt);
    let rates = StepwiseRates::resolve(market, n, dt);
    let refixing = RefixingSchedule::build(terms, per_share, &grid, config);

    let meta = PricingMeta {
        dt,
        u: crr.u,
        d: crr.d,
        n_steps: n,
        valuation_date: market.valuation_date,
        maturity_date: market.maturity_date,
        curve_source: rates.source,
        eff_cp_final: Some(refixing.final_conversion_price()),
    };

    if grid.is_degenerate() {
        return PricingResult::assemble(
            security_type,
            position,
            0.0,
            0.0,
            0.0,
            0.0,
            terms.unit_count(per_share),
            per_share,
            Vec::new(),
            meta,
        );
    }

    let f_unit = terms.unit_face(per_share);
    let r_unit = f_unit * (1.0 + terms.repayment_premium_rate);
    let c_unit = if per_share {
        f_unit * (terms.coupon_rate + terms.dividend_rate) * dt
    } else {
        f_unit * terms.coupon_rate * dt
    };
    let participating = security_type == "RCPS"
        && terms.participation == Participation::Participating;

    let depth = config.node_log_depth.min(n);
    let mut logs: Vec<NodeLog> = Vec::new();

    // Terminal layer: redeem, convert, or take the participating
    // double-dip (capped as a multiple of face when a cap is set).
    let mut debt = vec![0.0; n + 1];
    let mut equity = vec![0.0; n + 1];
    let hold = r_unit + c_unit;
    for i in 0..=n {
        let s = crr.node_price(market.spot, n, i);
        let conv_base = s * refixing.ratio(n);

        let (conv, double_dipped) = if participating {
            let mut double_dip = r_unit + c_unit + conv_base;
            if let Some(cap) = terms.participation_cap {
                double_dip = double_dip.min(f_unit * cap);
            }
            // Voluntary escape from the cap: plain conversion if it pays more.
            (double_dip.max(conv_base), double_dip > conv_base)
        } else {
            (conv_base, false)
        };

        let flag = if conv > hold {
            debt[i] = 0.0;
            equity[i] = conv;
            if double_dipped {
                NodeFlag::MatParticipate
            } else {
                NodeFlag::MatConvert
            }
        } else {
            debt[i] = hold;
            equity[i] = 0.0;
            NodeFlag::MatRedeem
        };

        if n <= depth {
            logs.push(NodeLog {
                step: n,
                node: i,
                share_price: s,
                debt: debt[i],
                equity: equity[i],
                flag,
                conversion_price: Some(refixing.conversion_price(n)),
            });
        }
    }

    // Backward sweep. The decision cascade per node is strictly ordered:
    // voluntary conversion improves the holder's value first, the issuer
    // then minimises against that already-optimised holder, and the put
    // is the holder's final floor.
    for t in (0..n).rev() {
        let r = rates.risk_free[t];
        let cs = rates.credit_spread[t];
        let q = crr.up_probability(r);
        let df_rf = (-r * dt).exp();
        let df_risky = (-(r + cs) * dt).exp();
        let date = grid.date_at(t);
        let ratio = refixing.ratio(t);

        for i in 0..=t {
            let exp_debt = q * debt[i + 1] + (1.0 - q) * debt[i];
            let exp_equity = q * equity[i + 1] + (1.0 - q) * equity[i];
            let d_cont = df_risky * exp_debt + c_unit;
            let e_cont = df_rf * exp_equity;

            let mut d_val = d_cont;
            let mut e_val = e_cont;
            let mut v_hold = d_cont + e_cont;
            let mut flag = NodeFlag::Hold;

            let s = crr.node_price(market.spot, t, i);
            let conv = s * ratio;

            // 1. Voluntary conversion. Participation is a liquidation
            // benefit realised at the redemption horizon; early converters
            // forfeit it, so only the base conversion value applies here.
            if conv > v_hold {
                d_val = 0.0;
                e_val = conv;
                v_hold = conv;
                flag = NodeFlag::Convert;
            }

            // 2. Issuer call: the called holder receives the better of
            // cash and conversion; the issuer calls when that is cheaper
            // than letting the holder continue.
            if let Some(call) = &terms.call {
                if call.contains(date) {
                    let holder_payoff = call.price.max(conv);
                    if holder_payoff < v_hold {
                        if conv > call.price {
                            d_val = 0.0;
                            e_val = conv;
                            flag = NodeFlag::CalledForceConv;
                        } else {
                            d_val = call.price;
                            e_val = 0.0;
                            flag = NodeFlag::Called;
                        }
                        v_hold = holder_payoff;
                    }
                }
            }

            // 3. Holder put.
            if let Some(put) = &terms.put {
                if put.contains(date) && put.price > v_hold {
                    d_val = put.price;
                    e_val = 0.0;
                    flag = NodeFlag::Put;
                }
            }

            debt[i] = d_val;
            equity[i] = e_val;

            if t <= depth {
                logs.push(NodeLog {
                    step: t,
                    node: i,
                    share_price: s,
                    debt: d_val,
                    equity: e_val,
                    flag,
                    conversion_price: Some(refixing.conversion_price(t)),
                });
            }
        }
    }

    logs.sort_by_key(|log| (log.step, log.node));

    let host_unit = host_unit_value(r_unit, c_unit, &rates, n, dt);
    let hybrid_unit = debt[0] + equity[0];

    debug!(
        security_type,
        n_steps = n,
        hybrid_unit,
        host_unit,
        "convertible priced"
    );

    PricingResult::assemble(
        security_type,
        position,
        hybrid_unit,
        host_unit,
        debt[0],
        equity[0],
        terms.unit_count(per_share),
        per_share,
        logs,
        meta,
    )
}
