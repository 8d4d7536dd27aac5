//! Spot-rate curve indexed by semi-annual period.
//!
//! Rate `i` (0-based) is the annualized spot rate for a cash flow paid at the
//! end of period `i + 1`, i.e. `(i + 1) / 2` years out. Beyond the last
//! quoted period the curve is flat: the last rate is reused.

use serde::{Deserialize, Serialize};

use bondlab_core::discount::{discount_factor, validate_rate};
use bondlab_core::CashFlow;

use crate::error::{BondError, BondResult};

/// A non-empty spot curve with one rate per semi-annual period.
///
/// # Example
///
/// ```rust
/// use bondlab_bonds::curve::SpotCurve;
///
/// let curve = SpotCurve::new(vec![0.05, 0.051]).unwrap();
/// let extended = curve.extended_to(4).unwrap();
/// assert_eq!(extended.rates(), &[0.05, 0.051, 0.051, 0.051]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SpotCurve {
    rates: Vec<f64>,
}

impl SpotCurve {
    /// Creates a curve, rejecting an empty sequence and any rate that is not
    /// finite or not above -2.
    pub fn new(rates: Vec<f64>) -> BondResult<Self> {
        if rates.is_empty() {
            return Err(BondError::EmptyCurve);
        }
        for (i, &rate) in rates.iter().enumerate() {
            if validate_rate(rate).is_err() {
                return Err(BondError::InvalidSpotRate {
                    period: i + 1,
                    value: rate,
                });
            }
        }
        Ok(Self { rates })
    }

    /// Creates a curve from a slice of rates.
    pub fn from_slice(rates: &[f64]) -> BondResult<Self> {
        Self::new(rates.to_vec())
    }

    /// A curve with the same rate for every period.
    pub fn flat(rate: f64, periods: usize) -> BondResult<Self> {
        if periods == 0 {
            return Err(BondError::InvalidCurveLength { requested: periods });
        }
        Self::new(vec![rate; periods])
    }

    /// The quoted rates.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Number of quoted periods.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// The rate for the last quoted period.
    pub fn last_rate(&self) -> f64 {
        // never empty after construction
        self.rates[self.rates.len() - 1]
    }

    /// Spot rate for a 1-indexed period, repeating the last rate past the end.
    pub fn rate_for_period(&self, period: u32) -> f64 {
        let index = (period as usize).saturating_sub(1);
        self.rates.get(index).copied().unwrap_or_else(|| self.last_rate())
    }

    /// Returns a curve exactly `periods` long.
    ///
    /// Longer curves are truncated; shorter ones repeat their last rate.
    pub fn extended_to(&self, periods: usize) -> BondResult<Self> {
        if periods == 0 {
            return Err(BondError::InvalidCurveLength { requested: periods });
        }

        let mut rates = self.rates.clone();
        if periods > rates.len() {
            log::trace!(
                "extending spot curve from {} to {periods} periods at {}",
                rates.len(),
                self.last_rate()
            );
            rates.resize(periods, self.last_rate());
        } else {
            rates.truncate(periods);
        }
        Ok(Self { rates })
    }

    /// Discount factor for each quoted period.
    pub fn discount_factors(&self) -> BondResult<Vec<f64>> {
        self.rates
            .iter()
            .enumerate()
            .map(|(i, &rate)| {
                let years = CashFlow::years_for_period(i as u32 + 1);
                Ok(discount_factor(rate, years)?)
            })
            .collect()
    }
}

impl TryFrom<Vec<f64>> for SpotCurve {
    type Error = BondError;

    fn try_from(rates: Vec<f64>) -> BondResult<Self> {
        Self::new(rates)
    }
}

impl From<SpotCurve> for Vec<f64> {
    fn from(curve: SpotCurve) -> Self {
        curve.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_curve_rejected() {
        assert_eq!(SpotCurve::new(vec![]), Err(BondError::EmptyCurve));
    }

    #[test]
    fn test_invalid_rate_reports_period() {
        let err = SpotCurve::new(vec![0.05, -2.5]).unwrap_err();
        assert_eq!(
            err,
            BondError::InvalidSpotRate {
                period: 2,
                value: -2.5
            }
        );
        assert!(SpotCurve::new(vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_extension_repeats_last_rate() {
        let curve = SpotCurve::new(vec![0.05]).unwrap();
        let extended = curve.extended_to(4).unwrap();
        assert_eq!(extended.rates(), &[0.05; 4]);
    }

    #[test]
    fn test_extension_truncates() {
        let curve = SpotCurve::new(vec![0.01, 0.02, 0.03]).unwrap();
        assert_eq!(curve.extended_to(2).unwrap().rates(), &[0.01, 0.02]);
        assert_eq!(curve.extended_to(3).unwrap(), curve);
        assert!(matches!(
            curve.extended_to(0),
            Err(BondError::InvalidCurveLength { requested: 0 })
        ));
    }

    #[test]
    fn test_rate_for_period() {
        let curve = SpotCurve::new(vec![0.05, 0.051, 0.052]).unwrap();
        assert_eq!(curve.rate_for_period(1), 0.05);
        assert_eq!(curve.rate_for_period(3), 0.052);
        assert_eq!(curve.rate_for_period(10), 0.052);
    }

    #[test]
    fn test_discount_factors() {
        let curve = SpotCurve::flat(0.05, 2).unwrap();
        let dfs = curve.discount_factors().unwrap();
        assert_relative_eq!(dfs[0], 1.0 / 1.025, epsilon = 1e-15);
        assert_relative_eq!(dfs[1], 1.0 / 1.025_f64.powi(2), epsilon = 1e-15);
    }

    #[test]
    fn test_serde_validates() {
        let curve: SpotCurve = serde_json::from_str("[0.05, 0.051]").unwrap();
        assert_eq!(curve.len(), 2);
        assert!(serde_json::from_str::<SpotCurve>("[]").is_err());
        assert_eq!(serde_json::to_string(&curve).unwrap(), "[0.05,0.051]");
    }
}
