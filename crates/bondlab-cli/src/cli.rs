//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{
    CashflowsArgs, CompareArgs, ConfigArgs, CurveArgs, DiscountArgs, PriceArgs, YtmArgs,
};

/// Bondlab - Semi-annual bond math from the lecture notes
#[derive(Parser)]
#[command(name = "bondlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML). Defaults to <config dir>/bondlab/config.toml
    #[arg(long, global = true, env = "BONDLAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Discount factor for a rate and horizon, and the rate recovered from it
    Discount(DiscountArgs),

    /// List the cash flows of a coupon bond
    Cashflows(CashflowsArgs),

    /// Price a bond off a spot-rate curve
    Price(PriceArgs),

    /// Solve yield-to-maturity from a price
    Ytm(YtmArgs),

    /// Price several coupons on one curve and compare their yields
    Compare(CompareArgs),

    /// Discount factors along a textbook curve shape
    Curve(CurveArgs),

    /// List the lecture presets
    Presets,

    /// Show configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
