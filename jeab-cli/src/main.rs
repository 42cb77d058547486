//! jeab CLI - serve and inspect the JEAB article catalog
//!
//! - `serve`: run the HTTP API
//! - `migrate`: create the catalog schema and exit
//! - `stats`: print catalog statistics as JSON

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "jeab",
    author,
    version,
    about = "Catalog of JEAB articles annotated with principles, procedures, and math models"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),

    /// Create tables and indexes, then exit
    Migrate(commands::db::DbArgs),

    /// Print catalog statistics as JSON
    Stats(commands::db::DbArgs),
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Stats(args) => commands::run_stats(args).await?,
    }

    Ok(())
}
