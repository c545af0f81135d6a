//! Terms for convertible instruments (RCPS, CB, CPS).

use mezz_core::Date;
use serde::{Deserialize, Serialize};

use super::market::MarketTerms;

/// Anti-dilution policy applied by the refixing schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AntiDilution {
    /// No refixing; the conversion price never moves.
    #[default]
    None,

    /// Full ratchet: the conversion price drops to the new issue price.
    FullRatchet,

    /// Broad-based weighted average, downward only.
    WaDownOnly,
}

/// Participation feature of a preferred instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Participation {
    /// Holder takes either the preference or the conversion value.
    #[default]
    NonParticipating,

    /// Holder takes the preference plus pro-rata common proceeds at the
    /// redemption horizon, optionally capped as a multiple of face.
    Participating,
}

/// A dilutive issue event that may lower the effective conversion price.
///
/// Events are consumed in date order; each may only lower the current
/// price, and a configured floor clamps the result from below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetEvent {
    /// Calendar date of the dilutive issue.
    pub date: Date,

    /// Issue price of the new shares.
    pub new_price: f64,

    /// Number of new shares issued.
    pub new_shares: f64,

    /// Shares outstanding immediately before the issue.
    ///
    /// Required for the weighted-average formula; when absent, a fallback
    /// constant is used and a validation warning is raised.
    #[serde(default)]
    pub shares_outstanding_before: Option<f64>,
}

/// An American-style embedded option window with inclusive date bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionWindow {
    /// Exercise price per unit.
    pub price: f64,

    /// First date (inclusive) on which the option may be exercised.
    pub start: Date,

    /// Last date (inclusive) on which the option may be exercised.
    pub end: Date,
}

impl OptionWindow {
    /// Returns true if `date` lies inside the window (inclusive).
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Full term sheet of a convertible instrument (RCPS, CB, CPS).
///
/// CB is valued per bond with unit face `total_issue_price`; RCPS and CPS
/// are valued per share with unit face `total_issue_price / share_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertibleTerms {
    /// Common market fields.
    pub market: MarketTerms,

    /// Total issue price (`F_total`).
    pub total_issue_price: f64,

    /// Number of preferred shares issued (`n`). Ignored for CB.
    #[serde(default)]
    pub share_count: f64,

    /// Annual coupon (or preferred-dividend coupon) rate on face.
    pub coupon_rate: f64,

    /// Annual dividend rate on face. Zero for CB.
    #[serde(default)]
    pub dividend_rate: f64,

    /// Repayment premium rate: redemption pays `face × (1 + premium)`.
    #[serde(default)]
    pub repayment_premium_rate: f64,

    /// Initial conversion price (`CP₀`).
    pub initial_conversion_price: f64,

    /// Explicit conversion-ratio override.
    ///
    /// Wins over the face/price ratio only when the anti-dilution policy
    /// is [`AntiDilution::None`]; otherwise it is ignored (and a
    /// validation warning is raised).
    #[serde(default)]
    pub conversion_ratio_override: Option<f64>,

    /// Anti-dilution policy.
    #[serde(default)]
    pub anti_dilution: AntiDilution,

    /// Lower bound for the refixed conversion price.
    #[serde(default)]
    pub refixing_floor: Option<f64>,

    /// Dilutive issue events, in chronological order.
    #[serde(default)]
    pub reset_events: Vec<ResetEvent>,

    /// Participation feature (RCPS only takes effect).
    #[serde(default)]
    pub participation: Participation,

    /// Participation cap as a multiple of face. Absent means uncapped.
    #[serde(default)]
    pub participation_cap: Option<f64>,

    /// Issuer call window.
    #[serde(default)]
    pub call: Option<OptionWindow>,

    /// Holder put window.
    #[serde(default)]
    pub put: Option<OptionWindow>,
}

impl ConvertibleTerms {
    /// Unit face amount: per bond for CB, per share for RCPS/CPS.
    #[must_use]
    pub fn unit_face(&self, per_share: bool) -> f64 {
        if per_share && self.share_count > 0.0 {
            self.total_issue_price / self.share_count
        } else {
            self.total_issue_price
        }
    }

    /// Number of units the total position scales by.
    #[must_use]
    pub fn unit_count(&self, per_share: bool) -> f64 {
        if per_share {
            self.share_count
        } else {
            1.0
        }
    }
}
