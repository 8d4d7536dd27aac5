//! Config command implementation.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_info, print_json, print_output, print_success, KeyValue};
use crate::settings::{default_path, Settings};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub fn execute(
    args: ConfigArgs,
    format: OutputFormat,
    settings: &Settings,
    config_path: Option<&Path>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(format, settings),
        ConfigCommand::Path => {
            let path = target_path(config_path)?;
            if path.exists() {
                print_info(&format!("{}", path.display()));
            } else {
                print_info(&format!("{} (not created)", path.display()));
            }
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = target_path(config_path)?;
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            Settings::write(&path, &Default::default())
                .with_context(|| format!("failed to write {}", path.display()))?;
            print_success(&format!("wrote {}", path.display()));
            Ok(())
        }
    }
}

fn target_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_path().context("could not determine a configuration directory"),
    }
}

fn show(format: OutputFormat, settings: &Settings) -> Result<()> {
    let config = &settings.config;

    if format == OutputFormat::Json {
        return print_json(config);
    }

    let source = settings
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());

    let rows = [
        KeyValue::new("Source", source),
        KeyValue::from_f64("Face Value", config.face_value, 2),
        KeyValue::from_f64("Par Tolerance", config.par_tolerance, 4),
        KeyValue::new("Display Decimals", config.display_decimals.to_string()),
        KeyValue::new("Solver Tolerance", format!("{:e}", config.solver.tolerance)),
        KeyValue::new(
            "Solver Max Iterations",
            config.solver.max_iterations.to_string(),
        ),
        KeyValue::from_percent("Solver Lower Bound", config.solver.lower_bound, 1),
        KeyValue::from_percent("Solver Upper Bound", config.solver.upper_bound, 1),
    ];

    if format == OutputFormat::Table {
        print_header("Configuration");
    }
    print_output(&rows, format)
}
