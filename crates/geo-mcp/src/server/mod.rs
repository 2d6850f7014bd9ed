//! MCP server implementation.
//!
//! Speaks JSON-RPC 2.0 over stdio (for Claude Desktop and other MCP hosts).

pub mod protocol;
pub mod stdio;

use std::sync::Arc;

use crate::client::Eutils;
use crate::tools::{self, McpTool, ToolContext};

use protocol::{JsonRpcRequest, JsonRpcResponse};

/// MCP server for GEO searches.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,

    /// Registered tools.
    tools: Vec<Box<dyn McpTool>>,
}

impl McpServer {
    /// Create a new MCP server.
    #[must_use]
    pub fn new(api: Arc<dyn Eutils>) -> Self {
        let ctx = ToolContext::new(api);
        let tools = tools::register_all_tools();

        Self { ctx, tools }
    }

    /// Run the server on stdin/stdout until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", self.tools.len());

        let reader = tokio::io::BufReader::new(tokio::io::stdin());
        stdio::serve(&self.tools, &self.ctx, reader, tokio::io::stdout()).await
    }

    /// Handle one request; `None` for notifications.
    pub async fn handle(&self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        stdio::handle_request(request, &self.tools, &self.ctx).await
    }

    /// Get tool context for execution.
    #[must_use]
    pub const fn context(&self) -> &ToolContext {
        &self.ctx
    }

    /// Registered tools.
    #[must_use]
    pub fn tools(&self) -> &[Box<dyn McpTool>] {
        &self.tools
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.tools.len()).finish()
    }
}
