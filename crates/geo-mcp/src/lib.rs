//! GEO MCP Server
//!
//! A client and Model Context Protocol (MCP) server for the NCBI Entrez
//! E-Utilities, covering the GEO Profiles (`geoprofiles`) and GEO DataSets
//! (`gds`) collections.
//!
//! A search resolves a free-text term to record identifiers with ESearch,
//! then fetches their summaries with ESummary and returns that JSON as is.
//!
//! # Example
//!
//! ```no_run
//! use geo_mcp::{EutilsClient, config, geo};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = config::load_config()?;
//!     let client = EutilsClient::new(config)?;
//!
//!     let profiles = geo::search_profiles(&client, "cancer", 20).await?;
//!     println!("{profiles:#}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod server;
pub mod tools;

pub use client::{Eutils, EutilsClient};
pub use config::{Config, get_effective_config, get_effective_config_with, load_config};
pub use error::{ClientError, ConfigError, ToolError};
pub use geo::{search_datasets, search_profiles};
