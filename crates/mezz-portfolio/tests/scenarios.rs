//! End-to-end valuation scenarios on the weekly CRR lattice.

use approx::assert_relative_eq;

use mezz_core::Date;
use mezz_engine::{price_security, EngineConfig};
use mezz_instruments::{
    AntiDilution, ConvertibleTerms, Deal, DealSecurity, EsoTerms, MarketTerms, OptionWindow,
    Participation, Position, ResetEvent, Security,
};
use mezz_portfolio::value_deal;

const VALUATION: (i32, u32, u32) = (2025, 6, 30);
const MATURITY_3Y: (i32, u32, u32) = (2028, 6, 30);

fn date(ymd: (i32, u32, u32)) -> Date {
    Date::from_ymd(ymd.0, ymd.1, ymd.2).unwrap()
}

fn market(spot: f64, vol: f64) -> MarketTerms {
    MarketTerms::flat(spot, vol, date(VALUATION), date(MATURITY_3Y), 0.035, 0.02)
}

/// CB terms from the S1 straight-bond scenario.
fn s1_cb(spot: f64, vol: f64) -> ConvertibleTerms {
    ConvertibleTerms {
        market: market(spot, vol),
        total_issue_price: 1_000_000_000.0,
        share_count: 0.0,
        coupon_rate: 0.02,
        dividend_rate: 0.0,
        repayment_premium_rate: 0.05,
        initial_conversion_price: 20_000.0,
        conversion_ratio_override: None,
        anti_dilution: AntiDilution::None,
        refixing_floor: None,
        reset_events: vec![],
        participation: Participation::NonParticipating,
        participation_cap: None,
        call: None,
        put: None,
    }
}

/// Same economics as S1 but split into 50,000 preferred shares.
fn rcps(spot: f64, vol: f64) -> ConvertibleTerms {
    let mut terms = s1_cb(spot, vol);
    terms.share_count = 50_000.0;
    terms
}

fn last_year_window(price: f64) -> OptionWindow {
    OptionWindow {
        price,
        start: Date::from_ymd(2027, 6, 30).unwrap(),
        end: date(MATURITY_3Y),
    }
}

fn price(security: Security) -> mezz_engine::PricingResult {
    price_security(&security, Position::Holder, &EngineConfig::default()).unwrap()
}

// ─── S1: straight bond ───────────────────────────────────────────────────

#[test]
fn s1_straight_bond_collapses_to_host() {
    let result = price(Security::Cb(s1_cb(10.0, 0.35)));

    // Host is redemption plus coupons on the flat risky curve:
    // 1.05e9 · e^(−5.5% · 3y) plus ~2%/yr of coupons ≈ 0.945e9.
    assert!(result.fair_value_host > 0.93e9 && result.fair_value_host < 0.96e9);

    // Conversion at S0 = 10 against CP = 20,000 is worthless.
    assert!(
        result.fair_value_deriv.abs() < 0.01 * result.fair_value_host,
        "derivative {} vs host {}",
        result.fair_value_deriv,
        result.fair_value_host
    );
    assert_relative_eq!(
        result.fair_value_total,
        result.fair_value_host + result.fair_value_deriv,
        max_relative = 1e-6
    );
}

// ─── S2: deep-in-the-money RCPS ──────────────────────────────────────────

#[test]
fn s2_deep_itm_rcps_is_worth_conversion() {
    let result = price(Security::Rcps(rcps(60_000.0, 0.35)));

    // (F/n) · (S0/CP) · n = 3e9, plus volatility and floor premium.
    let conversion_value = 3.0e9;
    assert!(result.fair_value_total >= conversion_value * 0.999);
    assert!(result.fair_value_total <= conversion_value * 1.25);

    // The debt leg holds only coupons and the thin redemption tail.
    assert!(result.tf_debt_component < 0.05 * result.fair_value_total);
    assert!(result.tf_equity_component > 0.95 * result.fair_value_total);
}

// ─── S3: full-ratchet refixing ───────────────────────────────────────────

#[test]
fn s3_full_ratchet_refixing() {
    let event = ResetEvent {
        date: date(VALUATION).add_days(30),
        new_price: 15_000.0,
        new_shares: 10_000.0,
        shares_outstanding_before: Some(1_000_000.0),
    };

    let mut refixed = rcps(18_000.0, 0.35);
    refixed.anti_dilution = AntiDilution::FullRatchet;
    refixed.refixing_floor = Some(14_000.0);
    refixed.reset_events = vec![event.clone()];
    let refixed_result = price(Security::Rcps(refixed));

    // The event resets the conversion price to 15,000 (above the floor)
    // and it never moves again.
    assert_relative_eq!(
        refixed_result.meta.eff_cp_final.unwrap(),
        15_000.0,
        epsilon = 1e-9
    );
    for log in &refixed_result.node_logs {
        let cp = log.conversion_price.unwrap();
        if log.step <= 4 {
            assert_relative_eq!(cp, 20_000.0, epsilon = 1e-9);
        } else {
            assert_relative_eq!(cp, 15_000.0, epsilon = 1e-9);
        }
    }

    let mut unprotected = rcps(18_000.0, 0.35);
    unprotected.reset_events = vec![event];
    let unprotected_result = price(Security::Rcps(unprotected));

    assert!(
        refixed_result.fair_value_deriv > unprotected_result.fair_value_deriv,
        "anti-dilution protection must be strictly worth something"
    );
}

// ─── S4: issuer call in the money ────────────────────────────────────────

#[test]
fn s4_issuer_call_caps_the_upside() {
    let s2_result = price(Security::Rcps(rcps(60_000.0, 0.35)));

    let mut called = rcps(60_000.0, 0.35);
    // 1.2 × per-share face of 20,000.
    called.call = Some(last_year_window(24_000.0));
    let called_result = price(Security::Rcps(called));

    assert!(called_result.fair_value_total <= s2_result.fair_value_total);
    assert!(
        called_result.fair_value_total > 0.9 * s2_result.fair_value_total,
        "the call trims optionality, it does not confiscate conversion value"
    );
}

// ─── S5: holder put as a floor ───────────────────────────────────────────

#[test]
fn s5_holder_put_raises_the_floor() {
    let base = price(Security::Rcps(rcps(10.0, 0.35)));

    let mut puttable = rcps(10.0, 0.35);
    // 1.1 × per-share face of 20,000.
    puttable.put = Some(last_year_window(22_000.0));
    let puttable_result = price(Security::Rcps(puttable));

    assert!(puttable_result.fair_value_total > base.fair_value_total);
}

// ─── S6: ESO with vesting and attrition ──────────────────────────────────

fn s6_eso(exit_rate: f64, multiple: f64) -> EsoTerms {
    EsoTerms {
        market: MarketTerms::flat(
            20_000.0,
            0.35,
            date(VALUATION),
            Date::from_ymd(2030, 6, 30).unwrap(),
            0.035,
            0.0,
        ),
        option_count: 10_000.0,
        strike: 20_000.0,
        vesting_end: Some(Date::from_ymd(2027, 6, 30).unwrap()),
        exit_rate,
        early_exercise_multiple: multiple,
    }
}

#[test]
fn s6_eso_vesting_and_attrition() {
    let base = price(Security::Eso(s6_eso(0.05, 2.0)));
    assert!(base.fair_value_total > 0.0);
    assert_relative_eq!(base.fair_value_host, 0.0, epsilon = 1e-12);

    // Doubling attrition strictly cheapens the grant.
    let churned = price(Security::Eso(s6_eso(0.10, 2.0)));
    assert!(churned.fair_value_total < base.fair_value_total);

    // Removing the exercise gate (m effectively infinite) cannot raise
    // the value: the gate only ever adds admissible exercise decisions.
    let ungated = price(Security::Eso(s6_eso(0.05, 1000.0)));
    assert!(ungated.fair_value_total <= base.fair_value_total + 1e-6);
}

// ─── Cross-cutting invariants ────────────────────────────────────────────

#[test]
fn put_at_redemption_value_never_decreases_the_hybrid() {
    for spot in [10.0, 15_000.0, 25_000.0, 60_000.0] {
        let base = price(Security::Rcps(rcps(spot, 0.35)));

        let mut floored = rcps(spot, 0.35);
        // Deeply in-the-money put: price equals the redemption amount.
        floored.put = Some(last_year_window(21_000.0));
        let floored_result = price(Security::Rcps(floored));

        assert!(
            floored_result.fair_value_total >= base.fair_value_total - 1e-6,
            "put floor lowered value at spot {spot}"
        );
    }
}

#[test]
fn far_otm_call_never_increases_the_hybrid() {
    for spot in [10.0, 15_000.0, 25_000.0, 60_000.0] {
        let base = price(Security::Rcps(rcps(spot, 0.35)));

        let mut callable = rcps(spot, 0.35);
        callable.call = Some(last_year_window(1.0e12));
        let callable_result = price(Security::Rcps(callable));

        assert!(
            callable_result.fair_value_total <= base.fair_value_total + 1e-6,
            "dead call raised value at spot {spot}"
        );
    }
}

#[test]
fn vanishing_volatility_converges_to_host() {
    let result = price(Security::Cb(s1_cb(10.0, 0.0001)));
    assert_relative_eq!(
        result.fair_value_total,
        result.fair_value_host,
        max_relative = 1e-4
    );
}

#[test]
fn cb_and_per_share_rcps_price_identically() {
    let cb = price(Security::Cb(s1_cb(15_000.0, 0.35)));
    let split = price(Security::Rcps(rcps(15_000.0, 0.35)));

    assert_relative_eq!(
        cb.fair_value_total,
        split.fair_value_total,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        cb.fair_value_deriv,
        split.fair_value_deriv,
        max_relative = 1e-4
    );
}

#[test]
fn deal_partitions_reconcile() {
    let deal = Deal {
        deal_name: "scenario book".to_string(),
        valuation_date: date(VALUATION),
        share_price_current: 20_000.0,
        underlying_num_shares: 1_000_000.0,
        volatility: 0.35,
        risk_free_rate: 0.035,
        credit_spread: 0.02,
        risk_free_curve: None,
        corporate_curve: None,
        securities: vec![
            DealSecurity {
                id: "CB-1".to_string(),
                position: Position::Holder,
                security: Security::Cb(s1_cb(20_000.0, 0.35)),
            },
            DealSecurity {
                id: "RCPS-1".to_string(),
                position: Position::Issuer,
                security: Security::Rcps(rcps(20_000.0, 0.35)),
            },
            DealSecurity {
                id: "ESO-1".to_string(),
                position: Position::Issuer,
                security: Security::Eso(s6_eso(0.05, 2.0)),
            },
        ],
    };

    let result = value_deal(&deal, &EngineConfig::default()).unwrap();

    assert!(result.failures.is_empty());
    assert_relative_eq!(
        result.total_asset - result.total_liability,
        result.total_value,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        result.total_deriv_asset - result.total_deriv_liab,
        result.total_deriv,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        result.total_value,
        result.total_host + result.total_deriv,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        result.price_per_share.unwrap(),
        result.total_value / 1_000_000.0,
        max_relative = 1e-12
    );
}
