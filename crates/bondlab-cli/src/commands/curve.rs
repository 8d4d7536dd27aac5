//! Curve command implementation.
//!
//! Shows spot rates and discount factors along one of the textbook curve
//! shapes.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondlab_bonds::presets::{CurvePoint, CurveShape};
use bondlab_bonds::prelude::format_percent;

use crate::cli::OutputFormat;
use crate::output::{print_csv, print_header, print_json, print_output};
use crate::settings::Settings;

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Curve shape: normal, inverted, flat or humped
    #[arg(short, long, default_value = "normal", value_parser = parse_shape)]
    pub shape: CurveShape,
}

fn parse_shape(s: &str) -> Result<CurveShape, String> {
    s.parse::<CurveShape>().map_err(|_| {
        let known: Vec<&str> = CurveShape::ALL.iter().map(|shape| shape.key()).collect();
        format!("unknown shape '{s}', expected one of: {}", known.join(", "))
    })
}

#[derive(Debug, Serialize, Tabled)]
struct PointRow {
    #[tabled(rename = "Years")]
    years: f64,
    #[tabled(rename = "Spot Rate")]
    rate: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
}

#[derive(Debug, Serialize)]
struct CurveOutput<'a> {
    shape: CurveShape,
    description: &'static str,
    points: &'a [CurvePoint],
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let shape = args.shape;
    let points = shape.points()?;
    let decimals = settings.config.display_decimals;

    match format {
        OutputFormat::Table => {
            print_header(&format!("{} curve: {}", shape, shape.description()));
            let rows: Vec<PointRow> = points
                .iter()
                .map(|p| PointRow {
                    years: p.years,
                    rate: format_percent(p.rate, decimals),
                    discount_factor: format!("{:.6}", p.discount_factor),
                })
                .collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Json => print_json(&CurveOutput {
            shape,
            description: shape.description(),
            points: &points,
        })?,
        OutputFormat::Csv => print_csv(&points)?,
        OutputFormat::Minimal => {
            for p in &points {
                println!("{} {:.6}", p.years, p.discount_factor);
            }
        }
    }

    Ok(())
}
