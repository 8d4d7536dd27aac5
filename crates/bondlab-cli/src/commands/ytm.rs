//! YTM command implementation.
//!
//! Solves yield-to-maturity from a price and shows the flat-yield breakdown
//! at the solved yield.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondlab_bonds::presets::yield_preset;
use bondlab_bonds::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{require, validate_coupon, validate_price, BreakdownRow};
use crate::output::{print_csv, print_header, print_json, print_output, print_warning, KeyValue};
use crate::settings::Settings;

/// Arguments for the ytm command.
#[derive(Args, Debug)]
pub struct YtmArgs {
    /// Market price
    #[arg(short, long, required_unless_present = "preset")]
    pub price: Option<f64>,

    /// Annual coupon rate (as percentage, e.g., 2.75 for 2.75%)
    #[arg(short, long, required_unless_present = "preset")]
    pub coupon: Option<f64>,

    /// Maturity in years
    #[arg(short, long, required_unless_present = "preset")]
    pub maturity: Option<f64>,

    /// Use a lecture preset (slide25, slide23a, slide23b)
    #[arg(long, conflicts_with_all = ["price", "coupon", "maturity", "face"])]
    pub preset: Option<String>,

    /// Face value (default from config)
    #[arg(long)]
    pub face: Option<f64>,

    /// Convergence tolerance on price (default from config)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum Newton iterations (default from config)
    #[arg(long)]
    pub max_iterations: Option<u32>,
}

#[derive(Debug, Serialize)]
struct YtmOutput<'a> {
    bond: &'a BondSpec,
    price: f64,
    ytm: &'a YieldResult,
    class: BondClass,
    breakdown: &'a [PricingRow],
}

/// Execute the ytm command.
pub fn execute(
    args: YtmArgs,
    format: OutputFormat,
    quiet: bool,
    settings: &Settings,
) -> Result<()> {
    let decimals = settings.config.display_decimals;

    let (bond, price) = if let Some(key) = &args.preset {
        let preset = yield_preset(key)?;
        (preset.bond()?, preset.price)
    } else {
        let price = validate_price(require(args.price, "price")?)?;
        let coupon = validate_coupon(require(args.coupon, "coupon")?)?;
        let maturity = require(args.maturity, "maturity")?;
        let face = args.face.unwrap_or(settings.config.face_value);
        (BondSpec::new(coupon, maturity, face)?, price)
    };

    let mut solver = settings.config.yield_solver();
    if let Some(tolerance) = args.tolerance {
        solver = solver.with_tolerance(tolerance);
    }
    if let Some(max_iterations) = args.max_iterations {
        solver = solver.with_max_iterations(max_iterations);
    }

    let ytm = bond.yield_to_maturity(price, &solver)?;
    let repriced = bond.price_at_yield(ytm.yield_value)?;
    let class = bond.classify(price, settings.config.par_tolerance);

    if !ytm.is_converged() && !quiet {
        print_warning(&format!(
            "solver {} after {} iterations; showing last estimate",
            ytm.status, ytm.iterations
        ));
    }

    match format {
        OutputFormat::Table => {
            print_header(&format!("Yield to Maturity: {bond}"));
            print_output(
                &[
                    KeyValue::from_currency("Price (Input)", price, decimals + 1),
                    KeyValue::from_percent("Yield to Maturity", ytm.yield_value, decimals + 2),
                    KeyValue::new("Status", ytm.status.to_string()),
                    KeyValue::new("Iterations", ytm.iterations.to_string()),
                    KeyValue::new("Residual", format!("{:.3e}", ytm.residual)),
                    KeyValue::new("Classification", class.to_string()),
                ],
                format,
            )?;

            print_header("Cash Flows at Solved Yield");
            let rows: Vec<BreakdownRow> = repriced
                .breakdown
                .iter()
                .map(|row| BreakdownRow::from_row(row, Some(ytm.yield_value), decimals))
                .collect();
            print_output(&rows, format)?;
            print_output(
                &[KeyValue::from_currency("Repriced", repriced.price, decimals + 2)],
                format,
            )?;
        }
        OutputFormat::Json => print_json(&YtmOutput {
            bond: &bond,
            price,
            ytm: &ytm,
            class,
            breakdown: &repriced.breakdown,
        })?,
        OutputFormat::Csv => print_csv(&[ytm])?,
        OutputFormat::Minimal => println!("{}", format_percent(ytm.yield_value, 4)),
    }

    Ok(())
}
