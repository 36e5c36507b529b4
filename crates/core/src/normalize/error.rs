//! The single failure kind of the URL normalizer.

use serde::Serialize;

/// Message for empty, absent, or unparseable input.
pub const URL_REQUIRED: &str = "A valid URL is required";

/// Message for any scheme other than `http` or `https`.
pub const UNSUPPORTED_SCHEME: &str = "Only http and https URLs are supported";

/// Message for URLs carrying a userinfo component.
pub const EMBEDDED_CREDENTIALS: &str = "URLs with embedded credentials are not allowed";

/// A client validation failure raised while normalizing a URL.
///
/// Every rejection is permanent for its input; there is nothing to retry.
/// The [`Display`](std::fmt::Display) output is exactly [`NormalizeError::message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct NormalizeError {
    code: &'static str,
    message: String,
}

impl NormalizeError {
    /// Classification shared by every normalizer rejection.
    pub const CODE: &'static str = "VALIDATION_ERROR";

    /// HTTP status a caller should answer with.
    pub const STATUS: u16 = 400;

    fn new(message: &str) -> Self {
        Self { code: Self::CODE, message: message.to_owned() }
    }

    pub(crate) fn url_required() -> Self {
        Self::new(URL_REQUIRED)
    }

    pub(crate) fn unsupported_scheme() -> Self {
        Self::new(UNSUPPORTED_SCHEME)
    }

    pub(crate) fn embedded_credentials() -> Self {
        Self::new(EMBEDDED_CREDENTIALS)
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn status(&self) -> u16 {
        Self::STATUS
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = NormalizeError::unsupported_scheme();
        assert_eq!(err.to_string(), UNSUPPORTED_SCHEME);
        assert_eq!(err.message(), UNSUPPORTED_SCHEME);
    }

    #[test]
    fn test_every_cause_is_a_validation_error() {
        for err in [
            NormalizeError::url_required(),
            NormalizeError::unsupported_scheme(),
            NormalizeError::embedded_credentials(),
        ] {
            assert_eq!(err.code(), "VALIDATION_ERROR");
            assert_eq!(err.status(), 400);
        }
    }

    #[test]
    fn test_serializes_code_and_message() {
        let json = serde_json::to_value(NormalizeError::embedded_credentials()).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], EMBEDDED_CREDENTIALS);
    }
}
