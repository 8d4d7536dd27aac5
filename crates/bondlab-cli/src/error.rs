//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Percentage argument outside its accepted range.
    #[error("Invalid {name}: {value}%. Must be between {min}% and {max}%.")]
    OutOfRange {
        /// Argument name.
        name: &'static str,
        /// Value as entered.
        value: f64,
        /// Lowest accepted value.
        min: f64,
        /// Highest accepted value.
        max: f64,
    },

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] bondlab_bonds::BondError),

    /// Configuration file could not be parsed.
    #[error("Configuration error in {}: {reason}", path.display())]
    Config {
        /// File that failed.
        path: PathBuf,
        /// Parser or validation message.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
