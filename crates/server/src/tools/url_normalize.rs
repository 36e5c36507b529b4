//! url_normalize tool implementation.
//!
//! Canonicalizes a single URL and returns its dedup hash.
//! No network I/O is performed.

use linkhub_core::{AppConfig, ContentType, Error, detect_content_type, normalize_url_opt};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for url_normalize tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlNormalizeParams {
    /// The http(s) URL to normalize.
    #[serde(default)]
    pub url: Option<String>,

    /// Content type supplied by the user; overrides detection.
    /// One of: article, video, podcast, github_repo, reddit, linkedin, newsletter, tool, other.
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Output structure for url_normalize tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UrlNormalizeOutput {
    /// Canonical form of the URL.
    pub normalized_url: String,
    /// SHA-256 of `normalized_url` as 64 lowercase hex characters.
    pub url_hash: String,
    /// Detected or user-supplied content type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
}

/// Parse an optional content type name.
pub(crate) fn parse_content_type(name: Option<&str>) -> Result<Option<ContentType>, Error> {
    name.map(str::parse::<ContentType>)
        .transpose()
        .map_err(|e| Error::InvalidInput(e.to_string()))
}

/// Normalize one URL under the server's limits.
pub(crate) fn normalize_one(
    config: &AppConfig, raw: Option<&str>, user_provided: Option<ContentType>,
) -> Result<UrlNormalizeOutput, Error> {
    if let Some(raw) = raw {
        config.check_url_length(raw)?;
    }

    let (normalized_url, url_hash) = normalize_url_opt(raw)?.into_parts();

    let content_type = if config.detect_content_type {
        Some(detect_content_type(&normalized_url, user_provided))
    } else {
        user_provided
    };

    Ok(UrlNormalizeOutput { normalized_url, url_hash, content_type })
}

/// Implementation of the url_normalize tool.
pub fn normalize_impl(config: &AppConfig, params: UrlNormalizeParams) -> Result<CallToolResult, McpError> {
    let user_provided = parse_content_type(params.content_type.as_deref())?;

    let output = normalize_one(config, params.url.as_deref(), user_provided)
        .inspect_err(|e| tracing::debug!(error = %e, "Rejected URL"))?;

    tracing::debug!(url_hash = %output.url_hash, normalized_url = %output.normalized_url, "Normalized URL");

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
