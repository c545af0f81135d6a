//! The tagged security union and position side.

use serde::{Deserialize, Serialize};

use super::convertible::ConvertibleTerms;
use super::eso::EsoTerms;
use super::market::MarketTerms;

/// Which side of the security the valuation is reported for.
///
/// The engine always values the long position; the side is a sign
/// (`+1 | −1`) applied exactly once at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    /// Long the security (sign `+1`).
    #[default]
    Holder,

    /// Short the security, i.e. the issuing company (sign `−1`).
    Issuer,
}

impl Position {
    /// The sign applied to the long-position value.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            Self::Holder => 1.0,
            Self::Issuer => -1.0,
        }
    }
}

/// A hybrid security, tagged by instrument type.
///
/// RCPS/CB/CPS share [`ConvertibleTerms`]; the engine branches on the
/// variant for the per-unit convention (CB is per bond, the preferreds are
/// per share) and for the RCPS participating terminal payoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Security {
    /// Redeemable convertible preferred stock.
    Rcps(ConvertibleTerms),

    /// Convertible bond.
    Cb(ConvertibleTerms),

    /// Convertible preferred stock.
    Cps(ConvertibleTerms),

    /// Employee stock option.
    Eso(EsoTerms),
}

impl Security {
    /// A short display name for the instrument type.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rcps(_) => "RCPS",
            Self::Cb(_) => "CB",
            Self::Cps(_) => "CPS",
            Self::Eso(_) => "ESO",
        }
    }

    /// The embedded market terms.
    #[must_use]
    pub fn market(&self) -> &MarketTerms {
        match self {
            Self::Rcps(t) | Self::Cb(t) | Self::Cps(t) => &t.market,
            Self::Eso(t) => &t.market,
        }
    }

    /// Mutable access to the embedded market terms.
    pub fn market_mut(&mut self) -> &mut MarketTerms {
        match self {
            Self::Rcps(t) | Self::Cb(t) | Self::Cps(t) => &mut t.market,
            Self::Eso(t) => &mut t.market,
        }
    }

    /// The convertible term sheet, if this is a convertible instrument.
    #[must_use]
    pub fn convertible(&self) -> Option<&ConvertibleTerms> {
        match self {
            Self::Rcps(t) | Self::Cb(t) | Self::Cps(t) => Some(t),
            Self::Eso(_) => None,
        }
    }

    /// True for instruments valued per share (RCPS, CPS); false for CB.
    ///
    /// ESO is valued per option; the distinction does not apply.
    #[must_use]
    pub fn is_per_share(&self) -> bool {
        matches!(self, Self::Rcps(_) | Self::Cps(_))
    }
}

#[cfg(test)]
mod tests {
    use super::super::convertible::{AntiDilution, Participation};
    use super::*;
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

    fn convertible() -> ConvertibleTerms {
        ConvertibleTerms {
            market: market(),
            total_issue_price: 1_000_000_000.0,
            share_count: 50_000.0,
            coupon_rate: 0.02,
            dividend_rate: 0.0,
            repayment_premium_rate: 0.05,
            initial_conversion_price: 20_000.0,
            conversion_ratio_override: None,
            anti_dilution: AntiDilution::default(),
            refixing_floor: None,
            reset_events: vec![],
            participation: Participation::default(),
            participation_cap: None,
            call: None,
            put: None,
        }
    }

    #[test]
    fn test_position_sign() {
        assert!((Position::Holder.sign() - 1.0).abs() < f64::EPSILON);
        assert!((Position::Issuer.sign() + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_per_share_convention() {
        assert!(Security::Rcps(convertible()).is_per_share());
        assert!(Security::Cps(convertible()).is_per_share());
        assert!(!Security::Cb(convertible()).is_per_share());
    }

    #[test]
    fn test_tagged_serde_roundtrip() {
        let sec = Security::Rcps(convertible());
        let json = serde_json::to_string(&sec).unwrap();
        assert!(json.contains("\"type\":\"RCPS\""));

        let back: Security = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), "RCPS");
    }

    #[test]
    fn test_unit_face_conventions() {
        let terms = convertible();
        // Per share: F_total / n
        assert!((terms.unit_face(true) - 20_000.0).abs() < 1e-9);
        // Per bond: F_total
        assert!((terms.unit_face(false) - 1_000_000_000.0).abs() < 1e-9);
    }
}
