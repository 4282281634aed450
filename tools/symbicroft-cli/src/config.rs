//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use symbicroft_commerce::cart::{CartConfig, CART_KEY};
use symbicroft_commerce::Currency;

/// File names searched for when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["symbicroft.toml", ".symbicroft.toml", "symbicroft.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Checkout payload settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Cart store settings derived from this config.
    pub fn cart(&self) -> CartConfig {
        CartConfig {
            key: self.storage.key.clone(),
        }
    }

    /// Configured checkout currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.checkout.currency)
            .with_context(|| format!("Unsupported currency: {}", self.checkout.currency))
    }
}

/// Storage location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file, relative to the working directory unless absolute.
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Key the cart is stored under.
    #[serde(default = "default_cart_key")]
    pub key: String,
}

fn default_storage_path() -> String {
    ".symbicroft/storage.json".to_string()
}

fn default_cart_key() -> String {
    CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_cart_key(),
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Currency code for payment orders.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Prefix for generated receipt references.
    #[serde(default = "default_receipt_prefix")]
    pub receipt_prefix: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_receipt_prefix() -> String {
    "rcpt".to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            receipt_prefix: default_receipt_prefix(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
