//! Session configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use storefront_commerce::catalog::DEFAULT_FETCH_LATENCY;
use storefront_commerce::checkout::{DEFAULT_PAYMENT_LATENCY, DEFAULT_SUCCESS_RATE};
use storefront_commerce::StoreError;

/// Configuration for one storefront session.
///
/// Every field has a default matching the simulated store's stock
/// timings, so an empty config file (or none at all) yields a working
/// session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Simulated catalog fetch latency in milliseconds.
    #[serde(default = "default_catalog_latency_ms")]
    pub catalog_latency_ms: u64,

    /// Simulated payment step latency in milliseconds.
    #[serde(default = "default_checkout_latency_ms")]
    pub checkout_latency_ms: u64,

    /// Payment success probability, within [0, 1].
    #[serde(default = "default_success_rate")]
    pub checkout_success_rate: f64,

    /// Seed for the catalog and checkout RNGs. When unset, both draw
    /// from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_catalog_latency_ms() -> u64 {
    DEFAULT_FETCH_LATENCY.as_millis() as u64
}

fn default_checkout_latency_ms() -> u64 {
    DEFAULT_PAYMENT_LATENCY.as_millis() as u64
}

fn default_success_rate() -> f64 {
    DEFAULT_SUCCESS_RATE
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_latency_ms: default_catalog_latency_ms(),
            checkout_latency_ms: default_checkout_latency_ms(),
            checkout_success_rate: default_success_rate(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, StoreError> {
        let config: SessionConfig =
            toml::from_str(text).map_err(|e| StoreError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            StoreError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), StoreError> {
        if !(0.0..=1.0).contains(&self.checkout_success_rate) {
            return Err(StoreError::InvalidConfig(format!(
                "checkout_success_rate must be within [0, 1], got {}",
                self.checkout_success_rate
            )));
        }
        Ok(())
    }

    /// Catalog fetch latency as a duration.
    pub fn catalog_latency(&self) -> Duration {
        Duration::from_millis(self.catalog_latency_ms)
    }

    /// Payment step latency as a duration.
    pub fn checkout_latency(&self) -> Duration {
        Duration::from_millis(self.checkout_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.catalog_latency_ms, 1000);
        assert_eq!(config.checkout_latency_ms, 1500);
        assert_eq!(config.checkout_success_rate, 0.9);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SessionConfig {
            catalog_latency_ms: 5,
            checkout_latency_ms: 10,
            checkout_success_rate: 1.0,
            seed: Some(42),
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SessionConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        let err = SessionConfig::from_toml_str("checkout_success_rate = 1.5").unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig(_)));

        let err = SessionConfig::from_toml_str("checkout_success_rate = -0.1").unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            SessionConfig::from_toml_str("seed = \"not a number\""),
            Err(StoreError::InvalidConfig(_))
        ));
    }
}
