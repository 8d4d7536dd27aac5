//! Fixed-coupon, semi-annual bond description.

use serde::Serialize;
use std::fmt;

use bondlab_core::discount::{validate_face_value, PERIODS_PER_YEAR};
use bondlab_core::{BondClass, CashFlow};

use crate::cashflows::{build_cash_flows, period_count, validate_coupon_rate};
use crate::classify::classify_bond;
use crate::curve::SpotCurve;
use crate::error::BondResult;
use crate::pricing::{price_cash_flows_at_yield, price_cash_flows_on_curve, PricingResult};
use crate::yields::{YieldResult, YieldSolver};

/// A validated bond: coupon rate, maturity and face value.
///
/// The maturity is stored as the rounded number of semi-annual periods, so
/// every method sees the same schedule.
///
/// # Example
///
/// ```rust
/// use bondlab_bonds::bond::BondSpec;
/// use bondlab_bonds::curve::SpotCurve;
///
/// let bond = BondSpec::new(0.04, 2.0, 100.0).unwrap();
/// let curve = SpotCurve::new(vec![0.05, 0.051, 0.052, 0.0505]).unwrap();
///
/// let priced = bond.price_with_curve(&curve).unwrap();
/// assert!((priced.price - 98.0216).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondSpec {
    coupon_rate: f64,
    maturity_years: f64,
    periods: u32,
    face_value: f64,
}

impl BondSpec {
    /// Validates and creates a bond.
    ///
    /// `coupon_rate` must be finite and non-negative, `face_value` positive,
    /// and `maturity_years` must round to at least one semi-annual period.
    pub fn new(coupon_rate: f64, maturity_years: f64, face_value: f64) -> BondResult<Self> {
        validate_coupon_rate(coupon_rate)?;
        validate_face_value(face_value)?;
        let periods = period_count(maturity_years)?;

        Ok(Self {
            coupon_rate,
            maturity_years,
            periods,
            face_value,
        })
    }

    /// Annual coupon rate as a decimal.
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Maturity as given, before rounding to whole periods.
    pub fn maturity_years(&self) -> f64 {
        self.maturity_years
    }

    /// Number of semi-annual payments.
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// Face value repaid at maturity.
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Coupon paid each half-year.
    pub fn coupon_payment(&self) -> f64 {
        (self.coupon_rate / f64::from(PERIODS_PER_YEAR)) * self.face_value
    }

    /// The payment schedule.
    pub fn cash_flows(&self) -> Vec<CashFlow> {
        build_cash_flows(self.coupon_rate, self.periods, self.face_value)
    }

    /// Prices the bond off a spot curve, extending the curve as needed.
    pub fn price_with_curve(&self, curve: &SpotCurve) -> BondResult<PricingResult> {
        price_cash_flows_on_curve(&self.cash_flows(), curve)
    }

    /// Prices the bond at a flat yield. `ytm` must be finite and above -2.
    pub fn price_at_yield(&self, ytm: f64) -> BondResult<PricingResult> {
        price_cash_flows_at_yield(&self.cash_flows(), ytm)
    }

    /// Solves for the yield that reproduces `price`.
    pub fn yield_to_maturity(&self, price: f64, solver: &YieldSolver) -> BondResult<YieldResult> {
        solver.solve(self, price)
    }

    /// Premium, par or discount relative to face value.
    pub fn classify(&self, price: f64, tolerance: f64) -> BondClass {
        classify_bond(price, self.face_value, tolerance)
    }
}

impl fmt::Display for BondSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}% {}y bond (face {})",
            self.coupon_rate * 100.0,
            self.maturity_years,
            self.face_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BondError;
    use approx::assert_relative_eq;

    #[test]
    fn test_accessors() {
        let bond = BondSpec::new(0.045, 10.0, 1000.0).unwrap();
        assert_eq!(bond.periods(), 20);
        assert_relative_eq!(bond.coupon_payment(), 22.5);
        assert_eq!(bond.cash_flows().len(), 20);
        assert_eq!(bond.to_string(), "4.500% 10y bond (face 1000)");
    }

    #[test]
    fn test_rounded_maturity_keeps_input() {
        let bond = BondSpec::new(0.04, 1.3, 100.0).unwrap();
        assert_eq!(bond.maturity_years(), 1.3);
        assert_eq!(bond.periods(), 3);
        assert_eq!(bond.cash_flows().last().map(|cf| cf.years), Some(1.5));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            BondSpec::new(-0.01, 2.0, 100.0),
            Err(BondError::InvalidCouponRate { .. })
        ));
        assert!(BondSpec::new(0.04, 0.0, 100.0).is_err());
        assert!(BondSpec::new(0.04, 2.0, -100.0).is_err());
    }

    #[test]
    fn test_price_at_coupon_yield_is_par() {
        let bond = BondSpec::new(0.05, 5.0, 100.0).unwrap();
        let priced = bond.price_at_yield(0.05).unwrap();
        assert_relative_eq!(priced.price, 100.0, epsilon = 1e-10);
        assert_eq!(bond.classify(priced.price, 0.01), BondClass::Par);
    }
}
