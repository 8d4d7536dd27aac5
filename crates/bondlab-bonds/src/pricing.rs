//! Present-value pricing of bond cash flows.
//!
//! Two discounting schemes are supported:
//!
//! - **Spot curve**: each flow is discounted at its own maturity-matched rate,
//!   `PV = Σ CF_i × δ(s_i, t_i)`
//! - **Flat yield**: every flow is discounted at one rate,
//!   `PV = Σ CF_i / (1 + y/2)^i`
//!
//! Both return a [`PricingResult`] with one [`PricingRow`] per flow. The
//! total is accumulated row by row, so it always equals the sum of the
//! breakdown's present values taken in period order.

use serde::{Deserialize, Serialize};

use bondlab_core::discount::{discount_factor, discount_factor_for_periods, PERIODS_PER_YEAR};
use bondlab_core::{BondlabError, CashFlow};

use crate::bond::BondSpec;
use crate::curve::SpotCurve;
use crate::error::BondResult;

/// Present-value detail for one cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    /// Semi-annual period index, starting at 1.
    pub period: u32,
    /// Time to payment in years.
    pub years: f64,
    /// Payment amount.
    pub cash_flow: f64,
    /// Spot rate used for this flow; `None` under flat-yield pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_rate: Option<f64>,
    /// Discount factor applied.
    pub discount_factor: f64,
    /// `cash_flow × discount_factor`.
    pub present_value: f64,
}

/// Price with its per-flow breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Sum of the breakdown's present values.
    pub price: f64,
    /// One row per cash flow, in period order.
    pub breakdown: Vec<PricingRow>,
}

impl PricingResult {
    /// Totals rows in the order given.
    fn from_rows(breakdown: Vec<PricingRow>) -> BondResult<Self> {
        let mut price = 0.0;
        for row in &breakdown {
            price += row.present_value;
        }
        if !price.is_finite() {
            return Err(BondlabError::non_finite("price").into());
        }
        Ok(Self { price, breakdown })
    }

    /// Undiscounted sum of the cash flows.
    pub fn total_cash_flow(&self) -> f64 {
        self.breakdown.iter().map(|row| row.cash_flow).sum()
    }
}

/// Discounts cash flows against a spot curve, extending the curve with its
/// last rate to cover every period.
pub fn price_cash_flows_on_curve(
    cash_flows: &[CashFlow],
    curve: &SpotCurve,
) -> BondResult<PricingResult> {
    let curve = curve.extended_to(cash_flows.len().max(1))?;

    let rows = cash_flows
        .iter()
        .zip(curve.rates())
        .map(|(cf, &rate)| {
            let df = discount_factor(rate, cf.years)?;
            Ok(PricingRow {
                period: cf.period,
                years: cf.years,
                cash_flow: cf.amount,
                spot_rate: Some(rate),
                discount_factor: df,
                present_value: cf.amount * df,
            })
        })
        .collect::<BondResult<Vec<_>>>()?;

    PricingResult::from_rows(rows)
}

/// Discounts cash flows at a single annualized yield.
pub fn price_cash_flows_at_yield(
    cash_flows: &[CashFlow],
    yield_rate: f64,
) -> BondResult<PricingResult> {
    let rows = cash_flows
        .iter()
        .map(|cf| {
            let df = discount_factor_for_periods(yield_rate, cf.period)?;
            Ok(PricingRow {
                period: cf.period,
                years: cf.years,
                cash_flow: cf.amount,
                spot_rate: None,
                discount_factor: df,
                present_value: cf.amount * df,
            })
        })
        .collect::<BondResult<Vec<_>>>()?;

    PricingResult::from_rows(rows)
}

/// Prices a coupon bond off a spot curve.
///
/// A curve shorter than the bond is extended with its last rate; a longer
/// one is truncated.
///
/// # Example
///
/// ```rust
/// use bondlab_bonds::pricing::price_bond_with_spot_rates;
///
/// let result = price_bond_with_spot_rates(0.04, 2.0, &[0.05, 0.051, 0.052, 0.0505], 100.0)
///     .unwrap();
/// assert!((result.price - 98.0216).abs() < 1e-3);
/// assert_eq!(result.breakdown.len(), 4);
/// ```
pub fn price_bond_with_spot_rates(
    coupon_rate: f64,
    maturity_years: f64,
    spot_rates: &[f64],
    face_value: f64,
) -> BondResult<PricingResult> {
    let bond = BondSpec::new(coupon_rate, maturity_years, face_value)?;
    let curve = SpotCurve::from_slice(spot_rates)?;
    bond.price_with_curve(&curve)
}

/// Prices a coupon bond at a flat yield.
pub fn price_bond_at_yield(
    coupon_rate: f64,
    maturity_years: f64,
    ytm: f64,
    face_value: f64,
) -> BondResult<PricingResult> {
    BondSpec::new(coupon_rate, maturity_years, face_value)?.price_at_yield(ytm)
}

/// `Σ CF_i / (1 + y/2)^i`, unchecked.
///
/// Used inside the yield solver, where `y` is already held inside its bounds.
pub fn present_value_at_yield(cash_flows: &[CashFlow], yield_rate: f64) -> f64 {
    let base = 1.0 + yield_rate / f64::from(PERIODS_PER_YEAR);
    cash_flows
        .iter()
        .map(|cf| cf.amount / base.powf(f64::from(cf.period)))
        .sum()
}

/// `dPV/dy = Σ -(i/2) × CF_i / (1 + y/2)^(i+1)`, unchecked.
pub fn present_value_derivative(cash_flows: &[CashFlow], yield_rate: f64) -> f64 {
    let freq = f64::from(PERIODS_PER_YEAR);
    let base = 1.0 + yield_rate / freq;
    cash_flows
        .iter()
        .map(|cf| {
            let n = f64::from(cf.period);
            -(n / freq) * cf.amount / base.powf(n + 1.0)
        })
        .sum()
}
