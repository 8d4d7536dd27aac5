//! Property-based tests for pricing invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - Discount factors invert back to their rate
//! - A zero horizon never discounts
//! - Higher rates never raise a discount factor
//! - Price equals the sum of the breakdown
//! - A one-rate curve prices like a flat yield
//! - A zero-coupon bond prices exactly like a discounted face value
//! - Solved yields reprice the bond

use bondlab_bonds::prelude::*;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn rate() -> impl Strategy<Value = f64> {
    -0.05..0.25_f64
}

fn coupon() -> impl Strategy<Value = f64> {
    0.0..0.15_f64
}

fn half_years() -> impl Strategy<Value = f64> {
    (1u32..=60).prop_map(|n| f64::from(n) / 2.0)
}

fn curve(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0..0.12_f64, 1..=len)
}

// =============================================================================
// DISCOUNT ENGINE
// =============================================================================

proptest! {
    #[test]
    fn discount_factor_inverts(r in rate(), t in 0.5..30.0_f64) {
        let df = discount_factor(r, t).unwrap();
        let back = spot_rate_from_discount(df, t).unwrap();
        prop_assert!((back - r).abs() < 1e-9, "r = {r}, t = {t}, back = {back}");
    }

    #[test]
    fn zero_horizon_is_one(r in -1.9..5.0_f64) {
        prop_assert_eq!(discount_factor(r, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn discount_factor_decreases_in_rate(r in rate(), bump in 1e-4..0.1_f64, t in 0.5..30.0_f64) {
        let low = discount_factor(r, t).unwrap();
        let high = discount_factor(r + bump, t).unwrap();
        prop_assert!(high < low);
    }
}

// =============================================================================
// PRICING
// =============================================================================

proptest! {
    #[test]
    fn price_is_sum_of_present_values(
        c in coupon(),
        t in half_years(),
        rates in curve(80),
    ) {
        let result = price_bond_with_spot_rates(c, t, &rates, 100.0).unwrap();
        let mut total = 0.0;
        for row in &result.breakdown {
            total += row.present_value;
        }
        prop_assert_eq!(result.price, total);
        prop_assert_eq!(result.breakdown.len() as f64, t * 2.0);
    }

    #[test]
    fn one_rate_curve_matches_flat_yield(c in coupon(), t in half_years(), y in 0.0..0.2_f64) {
        let on_curve = price_bond_with_spot_rates(c, t, &[y], 100.0).unwrap();
        let flat = price_bond_at_yield(c, t, y, 100.0).unwrap();
        prop_assert!(
            (on_curve.price - flat.price).abs() < 1e-9,
            "curve {} vs flat {}", on_curve.price, flat.price
        );
    }

    #[test]
    fn zero_coupon_bond_matches_zero_price(t in half_years(), r in rate()) {
        let bond = price_bond_with_spot_rates(0.0, t, &[r], 100.0).unwrap();
        prop_assert_eq!(bond.price, zero_coupon_price(r, t, 100.0).unwrap());
    }

    #[test]
    fn price_scales_with_face(c in coupon(), t in half_years(), rates in curve(10)) {
        let hundred = price_bond_with_spot_rates(c, t, &rates, 100.0).unwrap();
        let thousand = price_bond_with_spot_rates(c, t, &rates, 1000.0).unwrap();
        prop_assert!((thousand.price - 10.0 * hundred.price).abs() < 1e-8);
    }
}

// =============================================================================
// YIELD SOLVER
// =============================================================================

proptest! {
    #[test]
    fn yield_round_trip(c in coupon(), t in half_years(), y in 0.0..0.2_f64) {
        let price = price_bond_at_yield(c, t, y, 100.0).unwrap().price;
        let solved = calculate_ytm(price, c, t, 100.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
            .unwrap();

        prop_assert!(solved.is_converged(), "status {}", solved.status);
        prop_assert!(
            (solved.yield_value - y).abs() < 1e-4,
            "expected {y}, solved {}", solved.yield_value
        );
    }

    #[test]
    fn class_follows_coupon_vs_yield(c in 0.01..0.15_f64, t in half_years(), gap in 0.005..0.05_f64) {
        let below = price_bond_at_yield(c, t, c - gap.min(c), 100.0).unwrap().price;
        let above = price_bond_at_yield(c, t, c + gap, 100.0).unwrap().price;
        prop_assert!(below > above);
        prop_assert_eq!(classify_bond_default(above, 100.0), BondClass::Discount);
    }
}
