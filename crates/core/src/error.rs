//! Unified error types for linkhub.

use rmcp::model::{ErrorCode, ErrorData as McpError};

use crate::config::ConfigError;
use crate::normalize::NormalizeError;

/// Unified error types for the linkhub tools.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., unknown content type).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// URL rejected by the normalizer.
    #[error("VALIDATION_ERROR: {0}")]
    InvalidUrl(#[from] NormalizeError),

    /// More URLs than a single batch allows.
    #[error("BATCH_TOO_LARGE: {len} urls exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },

    /// Configuration could not be loaded.
    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidUrl(e) => (-32602, e.message().to_string()),
            Error::BatchTooLarge { .. } => (-32602, err.to_string()),
            Error::Config(e) => (-32603, e.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
