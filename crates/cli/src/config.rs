//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TASTY_BITES_CART_PATH` - Cart slot file (default: `.tasty-bites/tasty-bites-cart.json`)
//! - `TASTY_BITES_CATALOG_PATH` - Catalog JSON file (default: bundled demo menu)
//! - `TASTY_BITES_DELIVERY_FEE` - Flat delivery fee (default: 2.99)
//! - `TASTY_BITES_SUBMIT_DELAY_MS` - Simulated checkout latency (default: 1500)
//! - `TASTY_BITES_DELIVERY_MINUTES` - Estimated delivery offset (default: 45)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;
use rust_decimal::Decimal;
use thiserror::Error;

use tasty_bites_cart::CheckoutOptions;

const DEFAULT_CART_PATH: &str = ".tasty-bites/tasty-bites-cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the cart slot lives
    pub cart_path: PathBuf,
    /// Catalog override; `None` uses the bundled menu
    pub catalog_path: Option<PathBuf>,
    /// Checkout settings
    pub checkout: CheckoutOptions,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let cart_path = lookup("TASTY_BITES_CART_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_CART_PATH), PathBuf::from);
        let catalog_path = lookup("TASTY_BITES_CATALOG_PATH").map(PathBuf::from);

        let defaults = CheckoutOptions::default();
        let delivery_fee = parse_or(&lookup, "TASTY_BITES_DELIVERY_FEE", defaults.delivery_fee)?;
        if delivery_fee.is_sign_negative() && !delivery_fee.is_zero() {
            return Err(ConfigError::InvalidEnvVar(
                "TASTY_BITES_DELIVERY_FEE".to_string(),
                "must not be negative".to_string(),
            ));
        }
        let delay_ms: u64 = parse_or(&lookup, "TASTY_BITES_SUBMIT_DELAY_MS", 1500)?;
        let delivery_minutes: u32 = parse_or(&lookup, "TASTY_BITES_DELIVERY_MINUTES", 45)?;

        Ok(Self {
            cart_path,
            catalog_path,
            checkout: CheckoutOptions {
                delivery_fee,
                submit_delay: Duration::from_millis(delay_ms),
                delivery_eta: TimeDelta::minutes(i64::from(delivery_minutes)),
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CliConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.cart_path, PathBuf::from(DEFAULT_CART_PATH));
        assert!(config.catalog_path.is_none());
        assert_eq!(config.checkout, CheckoutOptions::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TASTY_BITES_CART_PATH", "/tmp/cart.json"),
            ("TASTY_BITES_CATALOG_PATH", "menu.json"),
            ("TASTY_BITES_DELIVERY_FEE", "4.50"),
            ("TASTY_BITES_SUBMIT_DELAY_MS", "0"),
            ("TASTY_BITES_DELIVERY_MINUTES", "30"),
        ])
        .unwrap();

        assert_eq!(config.cart_path, PathBuf::from("/tmp/cart.json"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("menu.json")));
        assert_eq!(config.checkout.delivery_fee, Decimal::new(450, 2));
        assert_eq!(config.checkout.submit_delay, Duration::ZERO);
        assert_eq!(config.checkout.delivery_eta, TimeDelta::minutes(30));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("TASTY_BITES_DELIVERY_FEE", "free")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "TASTY_BITES_DELIVERY_FEE"
        ));
        assert!(config_from(&[("TASTY_BITES_DELIVERY_FEE", "-1")]).is_err());
        assert!(config_from(&[("TASTY_BITES_SUBMIT_DELAY_MS", "-5")]).is_err());
    }
}
