//! Discount command implementation.
//!
//! Shows the semi-annual discount factor for a rate and horizon, the price of
//! a zero-coupon bond at that rate, and the rate recovered from the factor.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondlab_bonds::{discount_factor, spot_rate_from_discount, zero_coupon_price};

use crate::cli::OutputFormat;
use crate::commands::percent_to_rate;
use crate::output::{print_header, print_json, print_output, KeyValue};
use crate::settings::Settings;

/// Arguments for the discount command.
#[derive(Args, Debug)]
pub struct DiscountArgs {
    /// Annual spot rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Years until payment
    #[arg(short, long)]
    pub years: f64,

    /// Face value for the zero-coupon price (default from config)
    #[arg(long)]
    pub face: Option<f64>,
}

#[derive(Debug, Serialize)]
struct DiscountOutput {
    rate: f64,
    years: f64,
    periods: f64,
    discount_factor: f64,
    zero_coupon_price: f64,
    recovered_rate: Option<f64>,
}

/// Execute the discount command.
pub fn execute(args: DiscountArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let rate = percent_to_rate("rate", args.rate, -100.0, 100.0)?;
    let face = args.face.unwrap_or(settings.config.face_value);
    let decimals = settings.config.display_decimals;

    let df = discount_factor(rate, args.years)?;
    let output = DiscountOutput {
        rate,
        years: args.years,
        periods: args.years * 2.0,
        discount_factor: df,
        zero_coupon_price: zero_coupon_price(rate, args.years, face)?,
        recovered_rate: if args.years > 0.0 {
            Some(spot_rate_from_discount(df, args.years)?)
        } else {
            None
        },
    };

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            let mut results = vec![
                KeyValue::from_percent("Rate", output.rate, decimals + 1),
                KeyValue::new("Years", output.years.to_string()),
                KeyValue::new("Periods", output.periods.to_string()),
                KeyValue::from_f64("Discount Factor", output.discount_factor, 8),
                KeyValue::from_currency("Zero-Coupon Price", output.zero_coupon_price, decimals + 2),
            ];
            if let Some(recovered) = output.recovered_rate {
                results.push(KeyValue::from_percent("Recovered Rate", recovered, decimals + 4));
            }
            if format == OutputFormat::Table {
                print_header("Discount Factor");
            }
            print_output(&results, format)?;
        }
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Minimal => println!("{:.10}", output.discount_factor),
    }

    Ok(())
}
