//! Cash-flow generation for fixed-coupon, semi-annual bonds.
//!
//! A bond with annual coupon rate `c`, face value `F` and maturity `T` years
//! pays `round(2T)` flows. Every flow is the coupon `(c / 2) × F`; the last
//! one also returns the face value.

use bondlab_core::discount::{validate_face_value, PERIODS_PER_YEAR};
use bondlab_core::CashFlow;

use crate::error::{BondError, BondResult};

/// Upper limit on generated periods (a 1000-year bond).
pub const MAX_PERIODS: u32 = 2_000;

/// Number of semi-annual periods for a maturity in years.
///
/// Rounds `maturity_years × 2` to the nearest integer, halves rounding up.
/// Maturities that are not a multiple of half a year are accepted; the
/// adjustment is logged at debug level.
///
/// # Example
///
/// ```rust
/// use bondlab_bonds::cashflows::period_count;
///
/// assert_eq!(period_count(2.0).unwrap(), 4);
/// assert_eq!(period_count(1.3).unwrap(), 3);
/// assert!(period_count(0.2).is_err());
/// ```
pub fn period_count(maturity_years: f64) -> BondResult<u32> {
    if !maturity_years.is_finite() {
        return Err(BondError::invalid_maturity(
            maturity_years,
            "maturity must be finite",
        ));
    }
    if maturity_years <= 0.0 {
        return Err(BondError::invalid_maturity(
            maturity_years,
            "maturity must be positive",
        ));
    }

    let exact = maturity_years * f64::from(PERIODS_PER_YEAR);
    let rounded = exact.round();

    if rounded < 1.0 {
        return Err(BondError::invalid_maturity(
            maturity_years,
            "maturity rounds to zero semi-annual periods",
        ));
    }
    if rounded > f64::from(MAX_PERIODS) {
        return Err(BondError::invalid_maturity(
            maturity_years,
            format!("more than {MAX_PERIODS} semi-annual periods"),
        ));
    }
    if (rounded - exact).abs() > 1e-9 {
        log::debug!(
            "maturity {maturity_years}y is not a whole number of half-years, using {rounded} periods"
        );
    }

    Ok(rounded as u32)
}

/// Checks that a coupon rate is finite and not negative.
pub fn validate_coupon_rate(coupon_rate: f64) -> BondResult<()> {
    if coupon_rate.is_finite() && coupon_rate >= 0.0 {
        Ok(())
    } else {
        Err(BondError::InvalidCouponRate { value: coupon_rate })
    }
}

/// Generates the scheduled payments of a semi-annual coupon bond.
///
/// # Example
///
/// ```rust
/// use bondlab_bonds::cashflows::generate_cash_flows;
///
/// let flows = generate_cash_flows(0.04, 2.0, 100.0).unwrap();
/// let amounts: Vec<f64> = flows.iter().map(|cf| cf.amount).collect();
/// assert_eq!(amounts, vec![2.0, 2.0, 2.0, 102.0]);
/// ```
pub fn generate_cash_flows(
    coupon_rate: f64,
    maturity_years: f64,
    face_value: f64,
) -> BondResult<Vec<CashFlow>> {
    validate_coupon_rate(coupon_rate)?;
    validate_face_value(face_value)?;
    let periods = period_count(maturity_years)?;

    Ok(build_cash_flows(coupon_rate, periods, face_value))
}

/// Builds the schedule from already validated inputs.
pub(crate) fn build_cash_flows(coupon_rate: f64, periods: u32, face_value: f64) -> Vec<CashFlow> {
    let coupon = (coupon_rate / f64::from(PERIODS_PER_YEAR)) * face_value;

    (1..=periods)
        .map(|period| {
            let amount = if period == periods {
                coupon + face_value
            } else {
                coupon
            };
            CashFlow::new(period, amount)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondlab_core::BondlabError;

    #[test]
    fn test_two_year_four_percent() {
        let flows = generate_cash_flows(0.04, 2.0, 100.0).unwrap();

        assert_eq!(flows.len(), 4);
        for (i, cf) in flows.iter().enumerate() {
            assert_eq!(cf.period, i as u32 + 1);
            assert_eq!(cf.years, f64::from(cf.period) / 2.0);
        }
        assert_eq!(flows[0].amount, 2.0);
        assert_eq!(flows[3].amount, 102.0);
    }

    #[test]
    fn test_face_value_scales_amounts() {
        let flows = generate_cash_flows(0.05, 1.0, 1000.0).unwrap();
        assert_relative_eq!(flows[0].amount, 25.0);
        assert_relative_eq!(flows[1].amount, 1025.0);
    }

    #[test]
    fn test_zero_coupon_bond() {
        let flows = generate_cash_flows(0.0, 3.0, 100.0).unwrap();
        assert_eq!(flows.len(), 6);
        assert!(flows[..5].iter().all(|cf| cf.amount == 0.0));
        assert_eq!(flows[5].amount, 100.0);
    }

    #[test]
    fn test_half_year_bond_has_single_flow() {
        let flows = generate_cash_flows(0.06, 0.5, 100.0).unwrap();
        assert_eq!(flows, vec![CashFlow::new(1, 103.0)]);
    }

    #[test]
    fn test_period_count_rounding() {
        assert_eq!(period_count(0.25).unwrap(), 1);
        assert_eq!(period_count(1.24).unwrap(), 2);
        assert_eq!(period_count(1.25).unwrap(), 3);
        assert_eq!(period_count(30.0).unwrap(), 60);
    }

    #[test]
    fn test_invalid_maturity() {
        for years in [0.0, -1.0, 0.2, f64::NAN, f64::INFINITY, 5_000.0] {
            assert!(
                matches!(
                    generate_cash_flows(0.04, years, 100.0),
                    Err(BondError::InvalidMaturity { .. })
                ),
                "maturity {years} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_coupon_and_face() {
        assert!(matches!(
            generate_cash_flows(-0.01, 2.0, 100.0),
            Err(BondError::InvalidCouponRate { .. })
        ));
        assert!(matches!(
            generate_cash_flows(f64::NAN, 2.0, 100.0),
            Err(BondError::InvalidCouponRate { .. })
        ));
        assert!(matches!(
            generate_cash_flows(0.04, 2.0, 0.0),
            Err(BondError::Core(BondlabError::InvalidFaceValue { .. }))
        ));
    }
}
