//! Compare command implementation.
//!
//! Prices several coupon bonds on one spot curve and solves each one's
//! yield. Defaults reproduce the lecture comparison: 8% and 4% two-year
//! bonds on the Slide 20 curve.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondlab_bonds::presets::{SLIDE_20, SPOT_VS_YIELD_COUPONS, SPOT_VS_YIELD_MATURITY};
use bondlab_bonds::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{validate_coupon, validate_spot_rates};
use crate::output::{print_csv, print_header, print_json, print_output};
use crate::settings::Settings;

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Coupon rates to compare, comma separated (as percentages)
    #[arg(short, long, value_delimiter = ',')]
    pub coupons: Vec<f64>,

    /// Maturity in years
    #[arg(short, long)]
    pub maturity: Option<f64>,

    /// Spot rates per half-year period, comma separated (as percentages)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub spot: Vec<f64>,

    /// Face value (default from config)
    #[arg(long)]
    pub face: Option<f64>,
}

#[derive(Debug, Serialize, Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Coupon")]
    coupon: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "YTM")]
    ytm: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Debug, Serialize)]
struct ComparisonRecord {
    coupon_rate: f64,
    price: f64,
    ytm: f64,
    class: BondClass,
    status: SolverStatus,
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let face = args.face.unwrap_or(settings.config.face_value);
    let decimals = settings.config.display_decimals;

    let coupons = if args.coupons.is_empty() {
        SPOT_VS_YIELD_COUPONS.to_vec()
    } else {
        args.coupons
            .iter()
            .map(|&c| validate_coupon(c))
            .collect::<Result<Vec<_>, _>>()?
    };
    let maturity = args.maturity.unwrap_or(SPOT_VS_YIELD_MATURITY);
    let curve = if args.spot.is_empty() {
        SLIDE_20.curve()?
    } else {
        SpotCurve::new(validate_spot_rates(&args.spot)?)?
    };

    let results = compare_on_curve(
        &coupons,
        maturity,
        &curve,
        face,
        &settings.config.yield_solver(),
        settings.config.par_tolerance,
    )?;

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "Spot vs Yield: {maturity}y bonds on [{}]",
                curve
                    .rates()
                    .iter()
                    .map(|r| format_percent(*r, decimals))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
            let rows: Vec<ComparisonRow> = results
                .iter()
                .map(|r| ComparisonRow {
                    coupon: format_percent(r.coupon_rate, decimals),
                    price: format_currency(r.price, decimals + 2),
                    ytm: format_percent(r.ytm.yield_value, decimals + 2),
                    class: r.class.to_string(),
                    status: r.ytm.status.to_string(),
                })
                .collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Csv => {
            let rows: Vec<ComparisonRecord> = results
                .iter()
                .map(|r| ComparisonRecord {
                    coupon_rate: r.coupon_rate,
                    price: r.price,
                    ytm: r.ytm.yield_value,
                    class: r.class,
                    status: r.ytm.status,
                })
                .collect();
            print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            for r in &results {
                println!("{}", format_percent(r.ytm.yield_value, 4));
            }
        }
    }

    Ok(())
}
