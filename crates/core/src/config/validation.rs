//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

const MIN_URL_LENGTH: usize = 16;
const MAX_URL_LENGTH: usize = 65_536;
const MAX_BATCH_SIZE: usize = 10_000;

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `max_url_length` is below 16 or exceeds 65536
    /// - `max_batch_size` is 0 or exceeds 10000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_url_length < MIN_URL_LENGTH {
            return Err(ConfigError::Invalid {
                field: "max_url_length".into(),
                reason: format!("must be at least {MIN_URL_LENGTH}"),
            });
        }
        if self.max_url_length > MAX_URL_LENGTH {
            return Err(ConfigError::Invalid {
                field: "max_url_length".into(),
                reason: format!("must not exceed {MAX_URL_LENGTH}"),
            });
        }

        if self.max_batch_size == 0 {
            return Err(ConfigError::Invalid { field: "max_batch_size".into(), reason: "must be greater than 0".into() });
        }
        if self.max_batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::Invalid {
                field: "max_batch_size".into(),
                reason: format!("must not exceed {MAX_BATCH_SIZE}"),
            });
        }

        if self.max_url_length > 8192 {
            tracing::warn!(
                max_url_length = self.max_url_length,
                "max_url_length is above 8192; many clients and proxies truncate longer URLs"
            );
        }

        Ok(())
    }
}
