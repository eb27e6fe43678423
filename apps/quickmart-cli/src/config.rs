//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `QUICKMART_SHIPPING_FEE_CENTS` | `1000` | Flat fee per shippable cart entry |
//! | `QUICKMART_OUTPUT` | `text` | `text` or `json` |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use quickmart_core::{CheckoutPolicy, Money, DEFAULT_SHIPPING_FEE_CENTS};

const SHIPPING_FEE_VAR: &str = "QUICKMART_SHIPPING_FEE_CENTS";
const OUTPUT_VAR: &str = "QUICKMART_OUTPUT";

/// How the checkout outcome is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Shipment notice and receipt as tab-separated text.
    #[default]
    Text,
    /// The whole outcome as pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(OUTPUT_VAR.to_string())),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Flat shipping fee per shippable entry, in cents.
    pub shipping_fee_cents: i64,

    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let shipping_fee_cents = match lookup(SHIPPING_FEE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue(SHIPPING_FEE_VAR.to_string()))?,
            None => DEFAULT_SHIPPING_FEE_CENTS,
        };

        if shipping_fee_cents < 0 {
            return Err(ConfigError::InvalidValue(SHIPPING_FEE_VAR.to_string()));
        }

        let output = lookup(OUTPUT_VAR)
            .map(|raw| raw.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(CliConfig {
            shipping_fee_cents,
            output,
        })
    }

    /// Checkout policy derived from this configuration.
    pub fn policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            shipping_fee_per_entry: Money::from_cents(self.shipping_fee_cents),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
