//! Cash flow type for bond analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::discount::PERIODS_PER_YEAR;

/// A single scheduled payment of a semi-annual bond.
///
/// Periods are 1-indexed half-years; `years` is always `period / 2`.
///
/// # Example
///
/// ```rust
/// use bondlab_core::types::CashFlow;
///
/// let cf = CashFlow::new(3, 2.0);
/// assert_eq!(cf.years, 1.5);
/// assert_eq!(cf.amount, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Semi-annual period index, starting at 1.
    pub period: u32,
    /// Time to payment in years.
    pub years: f64,
    /// Payment amount (coupon, plus face value on the final period).
    #[serde(rename = "cash_flow")]
    pub amount: f64,
}

impl CashFlow {
    /// Creates a cash flow paid at the end of `period`.
    #[must_use]
    pub fn new(period: u32, amount: f64) -> Self {
        Self {
            period,
            years: Self::years_for_period(period),
            amount,
        }
    }

    /// Years corresponding to a semi-annual period index.
    #[must_use]
    pub fn years_for_period(period: u32) -> f64 {
        f64::from(period) / f64::from(PERIODS_PER_YEAR)
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "period {} ({}y): {:.4}",
            self.period, self.years, self.amount
        )
    }
}
