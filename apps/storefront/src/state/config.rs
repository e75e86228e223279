//! # Store Configuration
//!
//! Display and startup settings for the cart, loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_CURRENCY_SYMBOL=€                                       │
//! │     STOREFRONT_CURRENCY_DECIMALS=2                                     │
//! │     STOREFRONT_DRAWER_OPEN=true                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $STOREFRONT_CONFIG, or                                             │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.storefront/… (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "$", 2 decimals, drawer closed                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! currency_symbol = "$"
//! currency_decimals = 2
//! drawer_open_on_start = false
//! ```
//!
//! Read-only after initialization, so no lock is needed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";

/// Largest number of minor-unit digits we know how to display.
const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Cart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Currency symbol prefixed to formatted totals.
    pub currency_symbol: String,

    /// Number of minor-unit digits (2 for cents).
    pub currency_decimals: u8,

    /// Whether the cart drawer starts open.
    pub drawer_open_on_start: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            drawer_open_on_start: false,
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$STOREFRONT_CONFIG`, or the platform
    ///    config dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// `load` with an injectable environment lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, env: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(env);
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(StoreError::Config("currency_symbol must not be empty".into()));
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(StoreError::Config(format!(
                "currency_decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.currency_decimals
            )));
        }

        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = env("STOREFRONT_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency_symbol = symbol;
        }

        if let Some(decimals) = env("STOREFRONT_CURRENCY_DECIMALS") {
            match decimals.parse::<u8>() {
                Ok(d) => self.currency_decimals = d,
                Err(_) => warn!(value = %decimals, "Ignoring non-numeric STOREFRONT_CURRENCY_DECIMALS"),
            }
        }

        if let Some(open) = env("STOREFRONT_DRAWER_OPEN") {
            match open.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.drawer_open_on_start = true,
                "0" | "false" | "no" => self.drawer_open_on_start = false,
                _ => warn!(value = %open, "Unknown STOREFRONT_DRAWER_OPEN value"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Formats an amount in minor units as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_lib::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, minor_units: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = minor_units / divisor;
        let frac = (minor_units % divisor).abs();

        format!(
            "{}{}{}",
            if minor_units < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
