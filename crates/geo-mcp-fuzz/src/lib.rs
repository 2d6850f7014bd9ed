//! Fuzzing library for geo-mcp.
//!
//! Targets cover ESearch id-list extraction and configuration parsing.
//!
//! # Usage
//!
//! ```bash
//! cd crates/geo-mcp-fuzz
//! cargo +nightly fuzz run fuzz_id_list -- -max_total_time=60
//! ```

pub use geo_mcp::config::parse_config;
pub use geo_mcp::geo::extract_id_list;
