//! Configuration file loading.
//!
//! The file is a TOML rendering of [`BondMathConfig`]; missing keys take
//! their defaults.
//!
//! ```toml
//! face_value = 1000.0
//! display_decimals = 4
//!
//! [solver]
//! tolerance = 1e-10
//! max_iterations = 50
//! ```

use std::path::{Path, PathBuf};

use bondlab_bonds::config::BondMathConfig;

use crate::error::{CliError, CliResult};

/// Effective configuration and where it came from.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Library defaults after applying the file.
    pub config: BondMathConfig,
    /// File the values were read from, if any.
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Loads from `explicit` if given (it must exist), otherwise from the
    /// default location when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Ok(Self {
                config: Self::from_file(path)?,
                source: Some(path.to_path_buf()),
            });
        }

        match default_path() {
            Some(path) if path.exists() => Ok(Self {
                config: Self::from_file(&path)?,
                source: Some(path),
            }),
            _ => {
                tracing::debug!("no configuration file, using defaults");
                Ok(Self::defaults())
            }
        }
    }

    /// Built-in defaults with no backing file.
    pub fn defaults() -> Self {
        Self {
            config: BondMathConfig::default(),
            source: None,
        }
    }

    /// Reads and validates a configuration file.
    pub fn from_file(path: &Path) -> CliResult<BondMathConfig> {
        let content = std::fs::read_to_string(path)?;
        let config: BondMathConfig = toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate().map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Writes `config` to `path` as TOML, creating parent directories.
    pub fn write(path: &Path, config: &BondMathConfig) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(config)?)?;
        Ok(())
    }
}

/// `<config dir>/bondlab/config.toml`, falling back to the home directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("bondlab").join("config.toml"))
}
