//! Layered configuration for GraphPath.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. A TOML file, when the caller passes one
//! 3. Environment variables prefixed with `GRAPHPATH_`, nested keys split on
//!    `__` (e.g. `GRAPHPATH_DISPLAY__PRECISION=2`)
//!
//! # Example
//!
//! ```toml
//! log_level = "info"
//!
//! [display]
//! precision = 2
//! infinity_symbol = "inf"
//! format = "json"
//! color = false
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name of the per-user configuration under `<config dir>/graphpath/`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHPATH_";

/// Largest accepted number of decimals when printing weights.
pub const MAX_PRECISION: usize = 10;

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "unknown output format '{other}' (expected table or json)"
            ))),
        }
    }
}

/// Display settings for matrices and paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimals printed for weights and distances.
    pub precision: usize,
    /// Symbol printed for infinite (absent) weights.
    pub infinity_symbol: String,
    /// Output format.
    pub format: OutputFormat,
    /// Colored terminal output.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: 1,
            infinity_symbol: "∞".to_string(),
            format: OutputFormat::Table,
            color: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphPathConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Display settings.
    pub display: DisplayConfig,
}

impl Default for GraphPathConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl GraphPathConfig {
    /// Loads configuration from defaults, an optional TOML file and the
    /// environment.
    ///
    /// Without a path only defaults and the environment apply. A missing
    /// file is not an error; the file layer is simply empty.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(Self::figment(path))
    }

    /// Builds the provider stack without extracting it.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts and validates a configuration from a figment.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(content)),
        )
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.display.precision > MAX_PRECISION {
            return Err(Error::Config(format!(
                "display.precision must be at most {MAX_PRECISION}, got {}",
                self.display.precision
            )));
        }
        if self.display.infinity_symbol.is_empty() {
            return Err(Error::Config(
                "display.infinity_symbol cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
