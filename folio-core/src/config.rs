//! Configuration management for Folio
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (FOLIO_*)
//! 3. Config file (~/.config/folio/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::money::BillingPeriod;
use crate::{Error, Result};

/// How prices are presented
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Symbol printed before amounts
    pub currency_symbol: String,

    /// Billing period shown when none is requested
    pub period: BillingPeriod,

    /// Show founding member prices next to published ones
    pub founding_member: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            period: BillingPeriod::Monthly,
            founding_member: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Display configuration
    pub display: DisplayConfig,
}

/// Values given on the command line; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub currency_symbol: Option<String>,
    pub period: Option<BillingPeriod>,
    pub founding_member: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/folio/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - FOLIO_CURRENCY_SYMBOL: Symbol printed before amounts
    /// - FOLIO_PERIOD: `monthly` or `annual`
    /// - FOLIO_FOUNDING: `1`/`true` to show founding member prices
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(symbol) = var("FOLIO_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(period) = var("FOLIO_PERIOD") {
            match period.parse() {
                Ok(period) => self.display.period = period,
                Err(e) => warn!(error = %e, "Ignoring FOLIO_PERIOD"),
            }
        }

        if let Some(founding) = var("FOLIO_FOUNDING") {
            match parse_flag(&founding) {
                Some(flag) => self.display.founding_member = flag,
                None => warn!(value = %founding, "Ignoring FOLIO_FOUNDING"),
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, overrides: CliOverrides) -> Self {
        if let Some(symbol) = overrides.currency_symbol {
            self.display.currency_symbol = symbol;
        }

        if let Some(period) = overrides.period {
            self.display.period = period;
        }

        if let Some(founding) = overrides.founding_member {
            self.display.founding_member = founding;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(overrides: CliOverrides) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(overrides))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
