//! Bondlab CLI - Semi-annual bond math from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Discount factor for 5% over two years
//! bondlab discount --rate 5 --years 2
//!
//! # Price a two-year 4% bond off a spot curve
//! bondlab price --coupon 4 --maturity 2 --spot 5,5.1,5.05,5.2
//!
//! # Solve yield-to-maturity from a price
//! bondlab ytm --price 98.3 --coupon 3 --maturity 5
//!
//! # Replay a lecture example
//! bondlab ytm --preset slide25 --format json
//! ```
//!
//! Log verbosity follows `RUST_LOG` when set, otherwise `--verbose`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // `config init` may target a file that does not exist yet
    let settings = match (&cli.command, cli.config.as_deref()) {
        (Commands::Config(_), Some(path)) if !path.exists() => Settings::defaults(),
        (_, explicit) => Settings::load(explicit)?,
    };
    let format = cli.format;

    match cli.command {
        Commands::Discount(args) => commands::discount::execute(args, format, &settings)?,
        Commands::Cashflows(args) => commands::cashflows::execute(args, format, &settings)?,
        Commands::Price(args) => commands::price::execute(args, format, &settings)?,
        Commands::Ytm(args) => commands::ytm::execute(args, format, cli.quiet, &settings)?,
        Commands::Compare(args) => commands::compare::execute(args, format, &settings)?,
        Commands::Curve(args) => commands::curve::execute(args, format, &settings)?,
        Commands::Presets => commands::presets::execute(format)?,
        Commands::Config(args) => {
            commands::config::execute(args, format, &settings, cli.config.as_deref())?
        }
    }

    Ok(())
}
