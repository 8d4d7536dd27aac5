//! Price command implementation.
//!
//! Prices a coupon bond off a spot-rate curve, either from explicit inputs
//! or from a lecture preset.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondlab_bonds::presets::spot_pricing_preset;
use bondlab_bonds::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{require, validate_coupon, validate_spot_rates, BreakdownRow};
use crate::output::{print_csv, print_header, print_json, print_output, KeyValue};
use crate::settings::Settings;

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Annual coupon rate (as percentage, e.g., 4.0 for 4%)
    #[arg(short, long, required_unless_present = "preset")]
    pub coupon: Option<f64>,

    /// Maturity in years
    #[arg(short, long, required_unless_present = "preset")]
    pub maturity: Option<f64>,

    /// Spot rates per half-year period, comma separated (as percentages).
    /// The last rate is reused for any remaining periods.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        required_unless_present = "preset"
    )]
    pub spot: Vec<f64>,

    /// Use a lecture preset (e.g. slide20)
    #[arg(short, long, conflicts_with_all = ["coupon", "maturity", "spot"])]
    pub preset: Option<String>,

    /// Face value (default from config)
    #[arg(long)]
    pub face: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PriceOutput<'a> {
    bond: &'a BondSpec,
    spot_rates: &'a [f64],
    price: f64,
    class: BondClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_price: Option<f64>,
    breakdown: &'a [PricingRow],
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let face = args.face.unwrap_or(settings.config.face_value);
    let decimals = settings.config.display_decimals;

    let (bond, curve, expected_price) = if let Some(key) = &args.preset {
        let preset = spot_pricing_preset(key)?;
        // Quoted prices are per 100 face
        let expected = preset.expected_price.map(|p| p * face / DEFAULT_FACE_VALUE);
        (preset.bond(face)?, preset.curve()?, expected)
    } else {
        let coupon = validate_coupon(require(args.coupon, "coupon")?)?;
        let maturity = require(args.maturity, "maturity")?;
        let bond = BondSpec::new(coupon, maturity, face)?;
        let curve = SpotCurve::new(validate_spot_rates(&args.spot)?)?;
        (bond, curve, None)
    };

    if curve.len() < bond.periods() as usize {
        tracing::info!(
            "curve has {} rates for {} periods, reusing {} for the rest",
            curve.len(),
            bond.periods(),
            format_percent(curve.last_rate(), 3)
        );
    }

    let result = bond.price_with_curve(&curve)?;
    let class = classify_bond(result.price, face, settings.config.par_tolerance);

    match format {
        OutputFormat::Table => {
            print_header(&format!("Spot-Curve Pricing: {bond}"));
            let rows: Vec<BreakdownRow> = result
                .breakdown
                .iter()
                .map(|row| BreakdownRow::from_row(row, None, decimals))
                .collect();
            print_output(&rows, format)?;

            let mut summary = vec![
                KeyValue::from_currency("Price", result.price, decimals + 2),
                KeyValue::new("Classification", class.to_string()),
            ];
            if let Some(expected) = expected_price {
                summary.push(KeyValue::from_currency("Lecture Price", expected, 4));
            }
            print_output(&summary, format)?;
        }
        OutputFormat::Json => print_json(&PriceOutput {
            bond: &bond,
            spot_rates: curve.rates(),
            price: result.price,
            class,
            expected_price,
            breakdown: &result.breakdown,
        })?,
        OutputFormat::Csv => print_csv(&result.breakdown)?,
        OutputFormat::Minimal => println!("{:.6}", result.price),
    }

    Ok(())
}
