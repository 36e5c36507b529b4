//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (LINKHUB_*)
//! 2. TOML config file (if LINKHUB_CONFIG_FILE set)
//! 3. Built-in defaults
//!
//! None of these settings change the canonical form; they only bound what
//! callers are willing to normalize.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::Error;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (LINKHUB_*)
/// 2. TOML config file (if LINKHUB_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Longest raw URL (in bytes) callers accept before normalizing.
    ///
    /// Set via LINKHUB_MAX_URL_LENGTH environment variable.
    #[serde(default = "default_max_url_length")]
    pub max_url_length: usize,

    /// Most URLs accepted by a single batch request.
    ///
    /// Set via LINKHUB_MAX_BATCH_SIZE environment variable.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Whether callers attach a detected content type to results.
    ///
    /// Set via LINKHUB_DETECT_CONTENT_TYPE environment variable.
    #[serde(default = "default_true")]
    pub detect_content_type: bool,
}

fn default_max_url_length() -> usize {
    2048
}

fn default_max_batch_size() -> usize {
    100
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_url_length: default_max_url_length(),
            max_batch_size: default_max_batch_size(),
            detect_content_type: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `LINKHUB_`
    /// 2. TOML file from `LINKHUB_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// The layered provider stack used by [`AppConfig::load`].
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("LINKHUB_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment.merge(
            Env::prefixed("LINKHUB_")
                .ignore(&["config_file"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }

    /// Extract and validate configuration from an arbitrary provider stack.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadFailed` on extraction failure and
    /// `ConfigError::Invalid` when validation rejects a value.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        tracing::debug!(
            max_url_length = config.max_url_length,
            max_batch_size = config.max_batch_size,
            detect_content_type = config.detect_content_type,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Reject raw URLs longer than `max_url_length` bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` naming both lengths.
    pub fn check_url_length(&self, raw: &str) -> Result<(), Error> {
        if raw.len() > self.max_url_length {
            return Err(Error::InvalidInput(format!(
                "url is {} bytes, longer than the {} byte limit",
                raw.len(),
                self.max_url_length
            )));
        }
        Ok(())
    }
}
