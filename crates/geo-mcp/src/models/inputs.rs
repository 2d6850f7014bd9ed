//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::{ToolError, ToolResult};

/// Input for the GEO Profiles and GEO DataSets search tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoSearchInput {
    /// Entrez search term (e.g., "cancer", "BRCA1[gene] AND human[orgn]").
    pub term: String,

    /// Maximum number of records to summarize.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    api::DEFAULT_MAX_RESULTS
}

impl GeoSearchInput {
    /// Check the input before any request is made.
    pub fn validate(&self) -> ToolResult<()> {
        if self.term.trim().is_empty() {
            return Err(ToolError::validation("term", "cannot be empty"));
        }
        if self.max_results > api::MAX_RESULTS_LIMIT {
            return Err(ToolError::validation(
                "maxResults",
                format!("must be at most {}", api::MAX_RESULTS_LIMIT),
            ));
        }
        Ok(())
    }
}
