//! HighlandXR Directory MCP Server - Main Entry Point
//!
//! This is the main entry point for the directory MCP server application.
//! The actual implementation is in the `highlandxr_mcp` library.

use anyhow::Result;
use clap::Parser;
use highlandxr_mcp::{CatalogueSource, Config, DirectoryServerHandler};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// HighlandXR Directory MCP Server - XR events and businesses across the Highlands via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a directory JSON file (defaults to the bundled dataset)
    file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    init_tracing(&config.log_level);

    let source = match args.file {
        Some(path) => CatalogueSource::File(path),
        None => CatalogueSource::Bundled,
    };
    let handler = DirectoryServerHandler::new(&source, config.listing)?;
    serve_stdio(handler).await?;
    Ok(())
}

/// Log to stderr; stdout carries the MCP transport
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
