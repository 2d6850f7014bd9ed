//! Integration tests against the live NCBI E-Utilities service.
//!
//! Requires `NCBI_EMAIL` (and optionally `NCBI_API_KEY`).
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use geo_mcp::client::{Eutils, EutilsClient};
use geo_mcp::config::Config;
use geo_mcp::geo::{extract_id_list, search_datasets, search_profiles};

fn create_client() -> EutilsClient {
    let config = Config::new(std::env::var("NCBI_EMAIL").ok(), std::env::var("NCBI_API_KEY").ok());
    assert!(config.has_email(), "NCBI_EMAIL must be set for integration tests");
    EutilsClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_live_search_gds() {
    let client = create_client();
    let result = client.search("gds", "cancer", 5).await.expect("Search should succeed");

    let ids = extract_id_list(&result);
    assert!(!ids.is_empty(), "Should return some datasets");
    assert!(ids.len() <= 5);
}

#[tokio::test]
async fn test_live_search_profiles() {
    let client = create_client();
    let result = search_profiles(&client, "TP53", 3).await.expect("Search should succeed");

    assert!(result.get("result").is_some(), "ESummary JSON should have a result object");
}

#[tokio::test]
async fn test_live_search_datasets() {
    let client = create_client();
    let result = search_datasets(&client, "breast cancer", 3).await.expect("Search should succeed");

    assert!(result.get("result").is_some());
}
