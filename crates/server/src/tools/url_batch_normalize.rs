//! url_batch_normalize tool implementation.
//!
//! Normalizes many URLs in one call and reports which of them name the same
//! resource.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use linkhub_core::{AppConfig, Error};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::url_normalize::{UrlNormalizeOutput, normalize_one};

/// Input parameters for url_batch_normalize tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlBatchNormalizeParams {
    /// URLs to normalize.
    pub urls: Vec<String>,

    /// Fail fast: stop on first rejected URL (default: false).
    #[serde(default)]
    pub fail_fast: bool,
}

/// Batch item status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BatchItemStatus {
    /// Normalized successfully.
    Normalized,
    /// Rejected by validation.
    Rejected,
}

/// Individual batch result item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchItem {
    /// The original URL.
    pub url: String,
    /// Status of this item.
    pub status: BatchItemStatus,
    /// The normalized result (if status is Normalized).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<UrlNormalizeOutput>,
    /// Index of the earlier item with the same url_hash, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_of: Option<usize>,
    /// Error message (if status is Rejected).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch summary statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchSummary {
    /// Total number of URLs processed.
    pub total: u32,
    /// Number of URLs normalized.
    pub normalized: u32,
    /// Number of URLs rejected.
    pub rejected: u32,
    /// Number of distinct url_hash values among normalized URLs.
    pub unique: u32,
}

/// Output structure for url_batch_normalize tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UrlBatchNormalizeOutput {
    /// Individual results for each URL (in input order).
    pub results: Vec<BatchItem>,
    /// Summary statistics.
    pub summary: BatchSummary,
}

/// Normalize every URL in order, marking repeats of an earlier hash.
pub(crate) fn normalize_batch(config: &AppConfig, params: &UrlBatchNormalizeParams) -> UrlBatchNormalizeOutput {
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut results = Vec::with_capacity(params.urls.len());
    let mut summary = BatchSummary::default();

    for (index, url) in params.urls.iter().enumerate() {
        summary.total += 1;

        let item = match normalize_one(config, Some(url.as_str()), None) {
            Ok(output) => {
                summary.normalized += 1;
                let duplicate_of = match first_seen.entry(output.url_hash.clone()) {
                    Entry::Occupied(first) => Some(*first.get()),
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                        None
                    }
                };
                BatchItem {
                    url: url.clone(),
                    status: BatchItemStatus::Normalized,
                    result: Some(output),
                    duplicate_of,
                    error: None,
                }
            }
            Err(e) => {
                summary.rejected += 1;
                let message = match e {
                    Error::InvalidUrl(e) => e.message().to_string(),
                    other => other.to_string(),
                };
                BatchItem {
                    url: url.clone(),
                    status: BatchItemStatus::Rejected,
                    result: None,
                    duplicate_of: None,
                    error: Some(message),
                }
            }
        };

        let rejected = item.status == BatchItemStatus::Rejected;
        results.push(item);

        if params.fail_fast && rejected {
            break;
        }
    }

    summary.unique = u32::try_from(first_seen.len()).unwrap_or(u32::MAX);

    UrlBatchNormalizeOutput { results, summary }
}

/// Implementation of the url_batch_normalize tool.
pub fn batch_normalize_impl(
    config: &AppConfig, params: UrlBatchNormalizeParams,
) -> Result<CallToolResult, McpError> {
    if params.urls.is_empty() {
        return Err(Error::InvalidInput("urls cannot be empty".into()).into());
    }
    if params.urls.len() > config.max_batch_size {
        return Err(Error::BatchTooLarge { len: params.urls.len(), max: config.max_batch_size }.into());
    }

    let output = normalize_batch(config, &params);

    tracing::info!(
        total = output.summary.total,
        normalized = output.summary.normalized,
        rejected = output.summary.rejected,
        unique = output.summary.unique,
        "Batch normalized"
    );

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}
