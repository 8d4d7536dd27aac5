//! CLI command implementations.
//!
//! Rates are entered as percentages (5.0 for 5%) and converted to decimal
//! fractions before they reach the library.

pub mod cashflows;
pub mod compare;
pub mod config;
pub mod curve;
pub mod discount;
pub mod presets;
pub mod price;
pub mod ytm;

// Re-export submodules for convenience
pub use cashflows::CashflowsArgs;
pub use compare::CompareArgs;
pub use config::ConfigArgs;
pub use curve::CurveArgs;
pub use discount::DiscountArgs;
pub use price::PriceArgs;
pub use ytm::YtmArgs;

use serde::Serialize;
use tabled::Tabled;

use bondlab_bonds::prelude::{format_percent, PricingRow};

use crate::error::{CliError, CliResult};

/// Converts a percentage argument to a decimal rate after a range check.
pub fn percent_to_rate(name: &'static str, value: f64, min: f64, max: f64) -> CliResult<f64> {
    if !(min..=max).contains(&value) {
        return Err(CliError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value / 100.0)
}

/// Validates a coupon rate (0% to 100%) and returns it as a decimal.
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    percent_to_rate("coupon", coupon, 0.0, 100.0)
}

/// Validates a list of spot rates (-100% to 100%) and returns them as decimals.
pub fn validate_spot_rates(spot: &[f64]) -> CliResult<Vec<f64>> {
    spot.iter()
        .map(|&rate| percent_to_rate("spot rate", rate, -100.0, 100.0))
        .collect()
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !(price.is_finite() && price > 0.0) {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

/// Unwraps an argument that is required when no preset is given.
pub fn require<T>(value: Option<T>, name: &str) -> CliResult<T> {
    value.ok_or_else(|| CliError::MissingArgument(format!("--{name} (or --preset)")))
}

/// Display row for a pricing breakdown.
#[derive(Debug, Serialize, Tabled)]
pub struct BreakdownRow {
    #[tabled(rename = "Period")]
    pub period: u32,
    #[tabled(rename = "Years")]
    pub years: f64,
    #[tabled(rename = "Cash Flow")]
    pub cash_flow: String,
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "Discount Factor")]
    pub discount_factor: String,
    #[tabled(rename = "PV")]
    pub present_value: String,
}

impl BreakdownRow {
    /// Formats a library row; `flat_yield` fills the rate column when the row
    /// carries no spot rate.
    pub fn from_row(row: &PricingRow, flat_yield: Option<f64>, decimals: usize) -> Self {
        let rate = row.spot_rate.or(flat_yield);
        Self {
            period: row.period,
            years: row.years,
            cash_flow: format!("{:.prec$}", row.cash_flow, prec = decimals),
            rate: rate.map_or_else(String::new, |r| format_percent(r, decimals + 1)),
            discount_factor: format!("{:.6}", row.discount_factor),
            present_value: format!("{:.prec$}", row.present_value, prec = decimals + 2),
        }
    }
}
