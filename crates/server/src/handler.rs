//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{
    UrlBatchNormalizeParams, UrlHashCheckParams, UrlNormalizeParams, url_batch_normalize::batch_normalize_impl,
    url_hash_check::hash_check_impl, url_normalize::normalize_impl,
};

use linkhub_core::AppConfig;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for linkhub.
#[derive(Clone)]
pub struct LinkhubServer {
    config: AppConfig,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl LinkhubServer {
    /// Create a new server handler.
    pub fn new(config: AppConfig) -> Self {
        Self { config, tool_router: Self::tool_router() }
    }

    /// Normalize a URL into its canonical form and dedup hash.
    #[tool(
        description = "Normalize an http(s) URL into its canonical form. Returns normalized_url, a 64-char SHA-256 url_hash for duplicate detection, and the content type."
    )]
    async fn url_normalize(&self, params: Parameters<UrlNormalizeParams>) -> Result<CallToolResult, McpError> {
        normalize_impl(&self.config, params.0)
    }

    /// Normalize many URLs and flag duplicates.
    #[tool(
        description = "Normalize a list of URLs. Returns per-URL results in input order, marks URLs that duplicate an earlier one, and summarizes counts."
    )]
    async fn url_batch_normalize(
        &self, params: Parameters<UrlBatchNormalizeParams>,
    ) -> Result<CallToolResult, McpError> {
        batch_normalize_impl(&self.config, params.0)
    }

    /// Check whether two URLs name the same resource.
    #[tool(description = "Check whether two URLs normalize to the same canonical form and url_hash.")]
    async fn url_hash_check(&self, params: Parameters<UrlHashCheckParams>) -> Result<CallToolResult, McpError> {
        hash_check_impl(&self.config, params.0)
    }
}

impl ServerHandler for LinkhubServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "linkhub".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
