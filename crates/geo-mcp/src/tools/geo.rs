//! GEO search tools: search_geo_profiles, search_geo_datasets.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::config::api;
use crate::error::ToolResult;
use crate::geo::search_collection;
use crate::models::{Collection, GeoSearchInput};

fn search_schema(subject: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "term": {
                "type": "string",
                "description": format!("Entrez search term for {subject} (e.g., 'cancer', 'BRCA1[gene]')")
            },
            "maxResults": {
                "type": "integer",
                "default": api::DEFAULT_MAX_RESULTS,
                "minimum": 0,
                "maximum": api::MAX_RESULTS_LIMIT,
                "description": "Maximum number of records to summarize"
            }
        },
        "required": ["term"]
    })
}

async fn run_search(
    ctx: &ToolContext,
    collection: Collection,
    input: serde_json::Value,
) -> ToolResult<String> {
    let params: GeoSearchInput = serde_json::from_value(input)?;
    params.validate()?;

    let summary =
        search_collection(ctx.api.as_ref(), collection, &params.term, params.max_results).await?;

    Ok(serde_json::to_string_pretty(&summary)?)
}

/// GEO Profiles search tool.
pub struct SearchGeoProfilesTool;

#[async_trait::async_trait]
impl McpTool for SearchGeoProfilesTool {
    fn name(&self) -> &'static str {
        "search_geo_profiles"
    }

    fn description(&self) -> &'static str {
        "Search NCBI GEO Profiles (gene expression and molecular abundance profiles) \
         and return ESummary records for the matching profiles as JSON."
    }

    fn input_schema(&self) -> serde_json::Value {
        search_schema("GEO Profiles")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        run_search(ctx, Collection::GeoProfiles, input).await
    }
}

/// GEO DataSets search tool.
pub struct SearchGeoDatasetsTool;

#[async_trait::async_trait]
impl McpTool for SearchGeoDatasetsTool {
    fn name(&self) -> &'static str {
        "search_geo_datasets"
    }

    fn description(&self) -> &'static str {
        "Search NCBI GEO DataSets (curated datasets, series, platforms and samples) \
         and return ESummary records for the matching entries as JSON."
    }

    fn input_schema(&self) -> serde_json::Value {
        search_schema("GEO DataSets")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        run_search(ctx, Collection::DataSets, input).await
    }
}
