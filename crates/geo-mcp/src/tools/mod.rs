//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates input parameters
//! 2. Runs the GEO search facade against the E-Utilities client
//! 3. Returns the raw summary JSON as text

mod geo;

pub use geo::*;

use std::sync::Arc;

use crate::client::Eutils;
use crate::error::ToolResult;

/// Tool execution context.
pub struct ToolContext {
    /// E-Utilities API.
    pub api: Arc<dyn Eutils>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(api: Arc<dyn Eutils>) -> Self {
        Self { api }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_geo_profiles").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(geo::SearchGeoProfilesTool), Box::new(geo::SearchGeoDatasetsTool)]
}
