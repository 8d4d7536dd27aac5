//! Cashflows command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondlab_bonds::cashflows::generate_cash_flows;

use crate::cli::OutputFormat;
use crate::commands::validate_coupon;
use crate::output::{print_csv, print_header, print_json, print_output, KeyValue};
use crate::settings::Settings;

/// Arguments for the cashflows command.
#[derive(Args, Debug)]
pub struct CashflowsArgs {
    /// Annual coupon rate (as percentage, e.g., 4.0 for 4%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Maturity in years (rounded to the nearest half-year)
    #[arg(short, long)]
    pub maturity: f64,

    /// Face value (default from config)
    #[arg(long)]
    pub face: Option<f64>,
}

#[derive(Debug, Serialize, Tabled)]
struct CashflowRow {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Years")]
    years: f64,
    #[tabled(rename = "Cash Flow")]
    cash_flow: String,
}

/// Execute the cashflows command.
pub fn execute(args: CashflowsArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let coupon = validate_coupon(args.coupon)?;
    let face = args.face.unwrap_or(settings.config.face_value);
    let decimals = settings.config.display_decimals;

    let flows = generate_cash_flows(coupon, args.maturity, face)?;
    let total: f64 = flows.iter().map(|cf| cf.amount).sum();

    match format {
        OutputFormat::Table => {
            print_header("Cash Flows");
            let rows: Vec<CashflowRow> = flows
                .iter()
                .map(|cf| CashflowRow {
                    period: cf.period,
                    years: cf.years,
                    cash_flow: format!("{:.prec$}", cf.amount, prec = decimals),
                })
                .collect();
            print_output(&rows, format)?;
            print_output(
                &[
                    KeyValue::new("Payments", flows.len().to_string()),
                    KeyValue::from_currency("Total", total, decimals),
                ],
                format,
            )?;
        }
        OutputFormat::Json => print_json(&flows)?,
        OutputFormat::Csv => print_csv(&flows)?,
        OutputFormat::Minimal => {
            for cf in &flows {
                println!("{}", cf.amount);
            }
        }
    }

    Ok(())
}
