use std::path::Path;
use serde::Deserialize;
use thiserror::Error;
use crate::domain::PricingRules;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "FRESHMART_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Tunables for the store. Every field has a default, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub channel_buffer: usize,
    pub demo_password: String,
    pub free_shipping_threshold: f64,
    pub flat_shipping: f64,
    pub tax_rate: f64,
    pub related_limit: usize,
    pub placeholder_image: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            demo_password: "12345".to_string(),
            free_shipping_threshold: 50.0,
            flat_shipping: 9.99,
            tax_rate: 0.08,
            related_limit: 4,
            placeholder_image: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=300&h=300&fit=crop".to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads the file named by `FRESHMART_CONFIG`, or the defaults when unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would otherwise fail at startup. Loading calls
    /// this; hand-built configs go through it in `StoreSystem::with_catalog`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid("channel_buffer must be at least 1".to_string()));
        }
        if self.demo_password.is_empty() {
            return Err(ConfigError::Invalid("demo_password must not be empty".to_string()));
        }
        let amounts = [
            ("free_shipping_threshold", self.free_shipping_threshold),
            ("flat_shipping", self.flat_shipping),
            ("tax_rate", self.tax_rate),
        ];
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be a non-negative number", name)));
            }
        }
        Ok(())
    }

    pub fn pricing(&self) -> PricingRules {
        PricingRules {
            free_shipping_threshold: self.free_shipping_threshold,
            flat_shipping: self.flat_shipping,
            tax_rate: self.tax_rate,
        }
    }
}
