//! url_hash_check tool implementation.
//!
//! Answers whether two URLs would be deduplicated as the same saved link.

use linkhub_core::{AppConfig, Error};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::url_normalize::{UrlNormalizeOutput, normalize_one};

/// Input parameters for url_hash_check tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UrlHashCheckParams {
    /// First URL.
    pub a: String,
    /// Second URL.
    pub b: String,
}

/// Output structure for url_hash_check tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UrlHashCheckOutput {
    /// True when both URLs normalize to the same url_hash.
    pub same_resource: bool,
    /// Normalized first URL.
    pub a: UrlNormalizeOutput,
    /// Normalized second URL.
    pub b: UrlNormalizeOutput,
}

/// Implementation of the url_hash_check tool.
pub fn hash_check_impl(config: &AppConfig, params: UrlHashCheckParams) -> Result<CallToolResult, McpError> {
    let a = normalize_one(config, Some(params.a.as_str()), None)?;
    let b = normalize_one(config, Some(params.b.as_str()), None)?;
    let same_resource = a.url_hash == b.url_hash;

    tracing::debug!(same_resource, a = %a.url_hash, b = %b.url_hash, "Compared URLs");

    let json = serde_json::to_string_pretty(&UrlHashCheckOutput { same_resource, a, b })
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(a: &str, b: &str) -> Result<UrlHashCheckOutput, McpError> {
        let result = hash_check_impl(&AppConfig::default(), UrlHashCheckParams { a: a.into(), b: b.into() })?;
        let text = result.content.first().and_then(|c| c.as_text()).map(|t| t.text.clone()).unwrap();
        Ok(serde_json::from_str(&text).unwrap())
    }

    #[test]
    fn test_same_resource() {
        let output = check("https://www.example.com/path?b=2&a=1", "https://example.com/path?a=1&b=2").unwrap();
        assert!(output.same_resource);
        assert_eq!(output.a.url_hash, output.b.url_hash);
    }

    #[test]
    fn test_different_scheme_is_different_resource() {
        let output = check("http://example.com/x", "https://example.com/x").unwrap();
        assert!(!output.same_resource);
    }

    #[test]
    fn test_rejected_input_fails() {
        let err = check("https://example.com", "file:///etc/passwd").unwrap_err();
        assert_eq!(err.message, "Only http and https URLs are supported");
    }
}
