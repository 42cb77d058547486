//! HTTP server command for the catalog API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use jeab_server::{run_server, ServerConfig};

use super::db::{open_with, DbArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides JEAB_BIND; default: 127.0.0.1:8000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.db.config()?;
    let bind_addr = args.bind.unwrap_or(config.bind_addr);

    tracing::info!(database = %config.database_url, "Starting jeab server on {}", bind_addr);

    let db = open_with(&config).await?;

    run_server(db, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
