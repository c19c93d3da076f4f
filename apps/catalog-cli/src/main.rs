//! # Catalog CLI
//!
//! Command-line front end for the marketplace catalog store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           catalog (CLI)                                 │
//! │                                                                         │
//! │  env + flags ───► CatalogConfig ───► CatalogStore ───► SQLite file      │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                              table / JSON on stdout                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! catalog seed --seed 42
//! catalog category add "Ceramics"
//! catalog report top-categories --min 3
//! catalog --json report summary
//! ```

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use catalog_db::CatalogStore;

use crate::commands::Command;
use crate::config::CatalogConfig;

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Marketplace catalog store")]
struct Cli {
    /// Database file (overrides CATALOG_DATABASE_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut config = CatalogConfig::load()?;
    if let Some(db) = cli.db {
        config.database_path = db;
    }
    debug!(?config, "Configuration loaded");

    let store = CatalogStore::open(config.db_config()).await?;
    info!(path = %config.database_path.display(), "Catalog opened");

    let result = commands::execute(&store, cli.command, cli.json).await;
    store.close().await;
    result
}
