//! GEO MCP Server - Entry Point
//!
//! Runs the stdio MCP server, or a single GEO search printed to stdout.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use geo_mcp::config::{self, Config, DEFAULT_CONFIG_FILE, api, env};
use geo_mcp::error::INIT_HINT;
use geo_mcp::{EutilsClient, geo, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "geo-mcp")]
#[command(about = "MCP server for NCBI GEO Profiles and GEO DataSets")]
#[command(version)]
struct Cli {
    /// Configuration file (relative paths resolve against the executable's directory)
    #[arg(long, env = env::CONFIG_PATH, default_value = DEFAULT_CONFIG_FILE, global = true)]
    config: String,

    /// Contact email for NCBI E-Utilities (overrides the config file)
    #[arg(long, env = env::EMAIL, global = true)]
    email: Option<String>,

    /// NCBI API key (optional, raises the request quota)
    #[arg(long, env = env::API_KEY, global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve MCP over stdin/stdout (default)
    Serve,
    /// Search GEO Profiles and print the summaries
    Profiles(SearchArgs),
    /// Search GEO DataSets and print the summaries
    Datasets(SearchArgs),
}

#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Entrez search term
    term: String,

    /// Maximum number of records to summarize
    #[arg(long, default_value_t = api::DEFAULT_MAX_RESULTS)]
    max_results: u32,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries protocol traffic and results
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

/// Load the config file and apply command line overrides.
///
/// A broken or missing file is tolerated when the email comes from elsewhere;
/// otherwise the file error is returned so the user sees what went wrong.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = config::resolve_config_path(&cli.config, &config::install_dir());

    let config = match config::load_config_from(&path) {
        Ok(config) => config,
        Err(e) if cli.email.is_some() => {
            tracing::warn!(error = %e, "Ignoring config file, using command line credentials");
            Config::default()
        }
        Err(e) => return Err(anyhow::Error::new(e).context(INIT_HINT)),
    };

    Ok(config.with_overrides(cli.email.clone(), cli.api_key.clone()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = resolve_config(&cli)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        has_api_key = config.has_api_key(),
        "Starting GEO MCP"
    );

    let client = EutilsClient::new(config).context("failed to build HTTP client")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let server = McpServer::new(Arc::new(client));
            server.run_stdio().await?;
        }
        Command::Profiles(args) => {
            let profiles = geo::search_profiles(&client, &args.term, args.max_results).await?;
            println!("{}", serde_json::to_string_pretty(&profiles)?);
        }
        Command::Datasets(args) => {
            let datasets = geo::search_datasets(&client, &args.term, args.max_results).await?;
            println!("{}", serde_json::to_string_pretty(&datasets)?);
        }
    }

    Ok(())
}
