//! Semi-annual discount engine.
//!
//! Converts an annualized rate and a horizon into a present-value multiplier,
//! and back:
//!
//! - `δ(r, t) = 1 / (1 + r/2)^(2t)`
//! - `r(δ, t) = 2 × [(1/δ)^(1/2t) - 1]`
//!
//! Compounding is fixed at two periods per year. The base `1 + r/2` must be
//! positive, so every rate must satisfy `r > -2`.

use crate::error::{BondlabError, BondlabResult};

/// Compounding periods per year (semi-annual convention).
pub const PERIODS_PER_YEAR: u32 = 2;

/// Face value used by the textbook examples.
pub const DEFAULT_FACE_VALUE: f64 = 100.0;

/// Lower limit of the rate domain (exclusive).
pub const MIN_RATE: f64 = -2.0;

const FREQ: f64 = PERIODS_PER_YEAR as f64;

/// Checks that `rate` is finite and strictly above [`MIN_RATE`].
pub fn validate_rate(rate: f64) -> BondlabResult<()> {
    if !rate.is_finite() {
        return Err(BondlabError::invalid_rate(rate, "rate must be finite"));
    }
    if rate <= MIN_RATE {
        return Err(BondlabError::invalid_rate(
            rate,
            "rate must exceed -2 under semi-annual compounding",
        ));
    }
    Ok(())
}

/// Checks that `face_value` is positive and finite.
pub fn validate_face_value(face_value: f64) -> BondlabResult<()> {
    if face_value.is_finite() && face_value > 0.0 {
        Ok(())
    } else {
        Err(BondlabError::InvalidFaceValue { value: face_value })
    }
}

fn validate_years(years: f64, allow_zero: bool) -> BondlabResult<()> {
    if !years.is_finite() {
        return Err(BondlabError::invalid_horizon(years, "horizon must be finite"));
    }
    if years < 0.0 || (!allow_zero && years == 0.0) {
        let reason = if allow_zero {
            "horizon must not be negative"
        } else {
            "horizon must be positive"
        };
        return Err(BondlabError::invalid_horizon(years, reason));
    }
    Ok(())
}

fn finite(value: f64, operation: &str) -> BondlabResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BondlabError::non_finite(operation))
    }
}

/// Discount factor for a cash flow `years` from now at annualized `rate`.
///
/// `discount_factor(rate, 0.0)` is exactly 1 for every valid rate.
///
/// # Example
///
/// ```rust
/// use bondlab_core::discount::discount_factor;
///
/// let df = discount_factor(0.05, 1.0).unwrap();
/// assert!((df - 1.0 / 1.025_f64.powi(2)).abs() < 1e-15);
/// ```
pub fn discount_factor(rate: f64, years: f64) -> BondlabResult<f64> {
    validate_rate(rate)?;
    validate_years(years, true)?;

    let periods = years * FREQ;
    finite(1.0 / (1.0 + rate / FREQ).powf(periods), "discount_factor")
}

/// Discount factor with the horizon given as a number of semi-annual periods.
///
/// Equal to `discount_factor(rate, periods / 2)`.
pub fn discount_factor_for_periods(rate: f64, periods: u32) -> BondlabResult<f64> {
    validate_rate(rate)?;

    finite(
        1.0 / (1.0 + rate / FREQ).powf(f64::from(periods)),
        "discount_factor_for_periods",
    )
}

/// Recovers the annualized spot rate implied by a discount factor.
///
/// Defined for `discount_factor > 0` and `years > 0`.
pub fn spot_rate_from_discount(discount_factor: f64, years: f64) -> BondlabResult<f64> {
    if !(discount_factor.is_finite() && discount_factor > 0.0) {
        return Err(BondlabError::InvalidDiscountFactor {
            value: discount_factor,
        });
    }
    validate_years(years, false)?;

    let periods = years * FREQ;
    finite(
        FREQ * ((1.0 / discount_factor).powf(1.0 / periods) - 1.0),
        "spot_rate_from_discount",
    )
}

/// Price of a zero-coupon bond paying `face_value` in `years`.
pub fn zero_coupon_price(rate: f64, years: f64, face_value: f64) -> BondlabResult<f64> {
    validate_face_value(face_value)?;
    let df = discount_factor(rate, years)?;
    finite(face_value * df, "zero_coupon_price")
}

/// Spot rate implied by a zero-coupon bond's price.
pub fn spot_rate_from_price(price: f64, years: f64, face_value: f64) -> BondlabResult<f64> {
    if !(price.is_finite() && price > 0.0) {
        return Err(BondlabError::InvalidPrice { value: price });
    }
    validate_face_value(face_value)?;
    spot_rate_from_discount(price / face_value, years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_known_values() {
        assert_relative_eq!(
            discount_factor(0.05, 0.5).unwrap(),
            1.0 / 1.025,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            discount_factor(0.04, 3.0).unwrap(),
            1.0 / 1.02_f64.powi(6),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_zero_maturity_is_one() {
        for rate in [-1.5, -0.01, 0.0, 0.05, 0.8, 5.0] {
            assert_eq!(discount_factor(rate, 0.0).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_zero_rate_is_one() {
        assert_eq!(discount_factor(0.0, 10.0).unwrap(), 1.0);
    }

    #[test]
    fn test_monotone_in_rate_and_years() {
        let low = discount_factor(0.03, 5.0).unwrap();
        let high = discount_factor(0.06, 5.0).unwrap();
        assert!(high < low);

        let short = discount_factor(0.05, 1.0).unwrap();
        let long = discount_factor(0.05, 2.0).unwrap();
        assert!(long < short);
    }

    #[test]
    fn test_negative_rate_discounts_above_one() {
        assert!(discount_factor(-0.01, 2.0).unwrap() > 1.0);
    }

    #[test]
    fn test_rate_domain_rejected() {
        assert!(matches!(
            discount_factor(-2.0, 1.0),
            Err(BondlabError::InvalidRate { .. })
        ));
        assert!(matches!(
            discount_factor(-3.0, 1.0),
            Err(BondlabError::InvalidRate { .. })
        ));
        assert!(discount_factor(f64::NAN, 1.0).is_err());
        assert!(discount_factor(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_horizon_rejected() {
        assert!(matches!(
            discount_factor(0.05, -0.5),
            Err(BondlabError::InvalidHorizon { .. })
        ));
        assert!(discount_factor(0.05, f64::NAN).is_err());
    }

    #[test]
    fn test_overflow_is_reported() {
        // Base is 5e-7; a long horizon overflows the reciprocal.
        assert!(matches!(
            discount_factor(-1.999999, 500.0),
            Err(BondlabError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_periods_variant_matches_years() {
        for periods in 0..=20 {
            let by_periods = discount_factor_for_periods(0.0525, periods).unwrap();
            let by_years = discount_factor(0.0525, f64::from(periods) / 2.0).unwrap();
            assert_eq!(by_periods, by_years);
        }
    }

    #[test]
    fn test_inverse() {
        let df = discount_factor(0.051, 1.0).unwrap();
        assert_relative_eq!(spot_rate_from_discount(df, 1.0).unwrap(), 0.051, epsilon = 1e-12);
    }

    #[test]
    fn test_spot_rate_from_discount_domain() {
        assert!(matches!(
            spot_rate_from_discount(0.0, 1.0),
            Err(BondlabError::InvalidDiscountFactor { .. })
        ));
        assert!(spot_rate_from_discount(-0.5, 1.0).is_err());
        assert!(matches!(
            spot_rate_from_discount(0.95, 0.0),
            Err(BondlabError::InvalidHorizon { .. })
        ));
    }

    #[test]
    fn test_zero_coupon_price() {
        let price = zero_coupon_price(0.05, 2.0, DEFAULT_FACE_VALUE).unwrap();
        assert_relative_eq!(price, 100.0 / 1.025_f64.powi(4), epsilon = 1e-12);
        assert_relative_eq!(price, 90.595_064_48, epsilon = 1e-8);

        let thousand = zero_coupon_price(0.05, 2.0, 1000.0).unwrap();
        assert_relative_eq!(thousand, price * 10.0, epsilon = 1e-10);

        assert!(matches!(
            zero_coupon_price(0.05, 2.0, 0.0),
            Err(BondlabError::InvalidFaceValue { .. })
        ));
    }

    #[test]
    fn test_spot_rate_from_price() {
        let price = zero_coupon_price(0.0475, 1.5, DEFAULT_FACE_VALUE).unwrap();
        let rate = spot_rate_from_price(price, 1.5, DEFAULT_FACE_VALUE).unwrap();
        assert_relative_eq!(rate, 0.0475, epsilon = 1e-12);

        // Priced at par means a zero rate.
        assert_relative_eq!(spot_rate_from_price(100.0, 3.0, 100.0).unwrap(), 0.0);

        assert!(matches!(
            spot_rate_from_price(-1.0, 1.0, 100.0),
            Err(BondlabError::InvalidPrice { .. })
        ));
    }
}
