//! Spot-rate pricing versus yield-to-maturity.
//!
//! Bonds priced off the same spot curve generally carry different yields:
//! the yield is a cash-flow-weighted average of the spot rates, and the
//! weights depend on the coupon.

use serde::Serialize;

use bondlab_core::BondClass;

use crate::bond::BondSpec;
use crate::curve::SpotCurve;
use crate::error::BondResult;
use crate::yields::{YieldResult, YieldSolver};

/// One bond priced on a curve and its implied yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveComparison {
    /// Annual coupon rate.
    pub coupon_rate: f64,
    /// Price off the spot curve.
    pub price: f64,
    /// Yield that reproduces `price`.
    pub ytm: YieldResult,
    /// Premium, par or discount at the caller's par tolerance.
    pub class: BondClass,
}

/// Prices each coupon bond on `curve`, solves its yield and classifies the
/// price against face within `par_tolerance`.
///
/// # Example
///
/// ```rust
/// use bondlab_bonds::classify::PAR_TOLERANCE;
/// use bondlab_bonds::comparison::compare_on_curve;
/// use bondlab_bonds::curve::SpotCurve;
/// use bondlab_bonds::yields::YieldSolver;
///
/// let curve = SpotCurve::new(vec![0.05, 0.051, 0.052, 0.0505]).unwrap();
/// let solver = YieldSolver::new();
/// let rows = compare_on_curve(&[0.08, 0.04], 2.0, &curve, 100.0, &solver, PAR_TOLERANCE).unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert!(rows[0].ytm.yield_value != rows[1].ytm.yield_value);
/// ```
pub fn compare_on_curve(
    coupons: &[f64],
    maturity_years: f64,
    curve: &SpotCurve,
    face_value: f64,
    solver: &YieldSolver,
    par_tolerance: f64,
) -> BondResult<Vec<CurveComparison>> {
    coupons
        .iter()
        .map(|&coupon_rate| {
            let bond = BondSpec::new(coupon_rate, maturity_years, face_value)?;
            let price = bond.price_with_curve(curve)?.price;
            let ytm = bond.yield_to_maturity(price, solver)?;
            Ok(CurveComparison {
                coupon_rate,
                price,
                ytm,
                class: bond.classify(price, par_tolerance),
            })
        })
        .collect()
}
