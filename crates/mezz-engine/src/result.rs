//! Pricing output types.

use mezz_core::Date;
use mezz_curves::CurveSource;
use mezz_instruments::Position;
use serde::{Deserialize, Serialize};

/// The decision recorded at a lattice node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeFlag {
    /// Continuation was optimal.
    Hold,

    /// Holder converted voluntarily.
    Convert,

    /// Issuer called; holder took the cash call price.
    Called,

    /// Issuer called; conversion beat the call price, forcing conversion.
    CalledForceConv,

    /// Holder exercised the put.
    Put,

    /// Redeemed at maturity.
    MatRedeem,

    /// Converted at maturity.
    MatConvert,

    /// Took the participating double-dip at maturity.
    MatParticipate,

    /// ESO: exercised at maturity.
    MaturityExercise,

    /// ESO: lapsed worthless at maturity.
    MaturityLapse,

    /// ESO: exercised early under the share-price-multiple proxy.
    ExerciseSubopt,

    /// ESO: node lies before the end of vesting.
    Unvested,
}

/// A sampled lattice node, for diagnostics.
///
/// Logs cover every `(t, i)` with `t ≤ min(N, depth)`; they are a
/// debugging aid, not a stable interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeLog {
    /// Time step.
    pub step: usize,

    /// Node index within the step (number of up-moves).
    pub node: usize,

    /// Share price at the node.
    pub share_price: f64,

    /// Debt-leg value carried at the node.
    pub debt: f64,

    /// Equity-leg value carried at the node.
    pub equity: f64,

    /// Decision recorded at the node.
    pub flag: NodeFlag,

    /// Effective conversion price at the step (convertibles only).
    pub conversion_price: Option<f64>,
}

/// Diagnostic metadata for one pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingMeta {
    /// Uniform lattice step in years.
    pub dt: f64,

    /// CRR up multiplier.
    pub u: f64,

    /// CRR down multiplier.
    pub d: f64,

    /// Number of lattice steps `N`.
    pub n_steps: usize,

    /// Valuation date.
    pub valuation_date: Date,

    /// Maturity date.
    pub maturity_date: Date,

    /// Where the stepwise rate arrays came from.
    pub curve_source: CurveSource,

    /// Conversion price in force at maturity (convertibles only).
    pub eff_cp_final: Option<f64>,
}

/// The valuation of one security.
///
/// All `fair_value_*` fields and the two `tf_*` components are signed by
/// the reported [`Position`] (`ISSUER` negates the long value), so
/// `fair_value_total = fair_value_host + fair_value_deriv` and
/// `fair_value_total = tf_debt_component + tf_equity_component` hold with
/// either sign. The asset/liability split is non-negative by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    /// Instrument type tag (`"RCPS" | "CB" | "CPS" | "ESO"`).
    pub security_type: String,

    /// The reported side.
    pub position: Position,

    /// Signed fair value of the whole hybrid.
    pub fair_value_total: f64,

    /// Signed fair value per share (per option for ESO; `None` for CB).
    pub fair_value_per_share: Option<f64>,

    /// Signed value of the host (straight) component.
    pub fair_value_host: f64,

    /// Signed value of the embedded derivative (`total − host`).
    pub fair_value_deriv: f64,

    /// Non-negative derivative asset portion.
    pub fair_value_deriv_asset: f64,

    /// Non-negative derivative liability portion.
    pub fair_value_deriv_liab: f64,

    /// Signed debt-leg value at the root of the tree.
    pub tf_debt_component: f64,

    /// Signed equity-leg value at the root of the tree.
    pub tf_equity_component: f64,

    /// Sampled lattice nodes (diagnostic).
    pub node_logs: Vec<NodeLog>,

    /// Pricing diagnostics.
    pub meta: PricingMeta,
}

impl PricingResult {
    /// Assembles a result from long-position unit values.
    ///
    /// `hybrid_unit`, `host_unit`, `debt_unit`, and `equity_unit` are per
    /// unit (per share, per bond, or per option); `count` scales units to
    /// the total; `position` applies the sign once.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub(crate) fn assemble(
        security_type: &str,
        position: Position,
        hybrid_unit: f64,
        host_unit: f64,
        debt_unit: f64,
        equity_unit: f64,
        count: f64,
        per_share: bool,
        node_logs: Vec<NodeLog>,
        meta: PricingMeta,
    ) -> Self {
        let sign = position.sign();

        let total = sign * hybrid_unit * count;
        let host = sign * host_unit * count;
        let deriv = total - host;

        Self {
            security_type: security_type.to_string(),
            position,
            fair_value_total: total,
            fair_value_per_share: per_share.then_some(sign * hybrid_unit),
            fair_value_host: host,
            fair_value_deriv: deriv,
            fair_value_deriv_asset: deriv.max(0.0),
            fair_value_deriv_liab: (-deriv).max(0.0),
            tf_debt_component: sign * debt_unit * count,
            tf_equity_component: sign * equity_unit * count,
            node_logs,
            meta,
        }
    }

    /// Non-negative asset portion of the signed total.
    #[must_use]
    pub fn asset(&self) -> f64 {
        self.fair_value_total.max(0.0)
    }

    /// Non-negative liability portion of the signed total.
    #[must_use]
    pub fn liability(&self) -> f64 {
        (-self.fair_value_total).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn meta() -> PricingMeta {
        PricingMeta {
            dt: 7.0 / 365.0,
            u: 1.05,
            d: 1.0 / 1.05,
            n_steps: 157,
            valuation_date: Date::from_ymd(2025, 6, 30).unwrap(),
            maturity_date: Date::from_ymd(2028, 6, 30).unwrap(),
            curve_source: CurveSource::FlatFallback,
            eff_cp_final: Some(20_000.0),
        }
    }

    #[test]
    fn test_assemble_holder() {
        let result = PricingResult::assemble(
            "RCPS",
            Position::Holder,
            21_000.0,
            20_000.0,
            18_000.0,
            3_000.0,
            50_000.0,
            true,
            vec![],
            meta(),
        );

        assert_relative_eq!(result.fair_value_total, 1_050_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(result.fair_value_host, 1_000_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(result.fair_value_deriv, 50_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(result.fair_value_deriv_asset, 50_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(result.fair_value_deriv_liab, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.fair_value_per_share.unwrap(), 21_000.0, epsilon = 1e-9);
        assert_relative_eq!(
            result.fair_value_total,
            result.tf_debt_component + result.tf_equity_component,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_assemble_issuer_negates() {
        let holder = PricingResult::assemble(
            "CB", Position::Holder, 950_000_000.0, 940_000_000.0, 950_000_000.0, 0.0, 1.0,
            false, vec![], meta(),
        );
        let issuer = PricingResult::assemble(
            "CB", Position::Issuer, 950_000_000.0, 940_000_000.0, 950_000_000.0, 0.0, 1.0,
            false, vec![], meta(),
        );

        assert_relative_eq!(
            holder.fair_value_total,
            -issuer.fair_value_total,
            epsilon = 1e-6
        );
        assert!(holder.fair_value_per_share.is_none());
        // The issuer's derivative shows up on the liability side.
        assert_relative_eq!(issuer.fair_value_deriv_liab, 10_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(issuer.fair_value_deriv_asset, 0.0, epsilon = 1e-12);
        assert_relative_eq!(issuer.liability(), 950_000_000.0, epsilon = 1e-3);
        assert_relative_eq!(issuer.asset(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flag_serde_tags() {
        assert_eq!(
            serde_json::to_string(&NodeFlag::CalledForceConv).unwrap(),
            "\"CALLED_FORCE_CONV\""
        );
        assert_eq!(
            serde_json::to_string(&NodeFlag::MatParticipate).unwrap(),
            "\"MAT_PARTICIPATE\""
        );
        assert_eq!(
            serde_json::to_string(&NodeFlag::ExerciseSubopt).unwrap(),
            "\"EXERCISE_SUBOPT\""
        );
    }
}
