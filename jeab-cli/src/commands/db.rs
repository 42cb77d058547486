//! Storage commands: schema creation and statistics

use anyhow::{Context, Result};
use clap::Args;

use jeab_server::config::resolve_database_url;
use jeab_server::{CatalogConfig, Database};

/// Storage target selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database URL (overrides DATABASE_URL; falls back to a local sqlite file)
    #[arg(long)]
    pub database_url: Option<String>,
}

impl DbArgs {
    /// Environment config with the flag applied on top.
    pub fn config(&self) -> Result<CatalogConfig> {
        let mut config = CatalogConfig::from_env().context("invalid environment configuration")?;
        if let Some(url) = self.database_url.as_deref() {
            config.database_url = resolve_database_url(Some(url))?;
        }
        Ok(config)
    }

    pub async fn open(&self) -> Result<Database> {
        open_with(&self.config()?).await
    }
}

/// Open the catalog described by an already-resolved config.
pub async fn open_with(config: &CatalogConfig) -> Result<Database> {
    Database::connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url))
}

/// Create the schema and exit
pub async fn run_migrate(args: DbArgs) -> Result<()> {
    let db = args.open().await?;
    db.pool().close().await;
    tracing::info!("catalog schema is up to date");
    Ok(())
}

/// Print statistics as pretty JSON
pub async fn run_stats(args: DbArgs) -> Result<()> {
    let db = args.open().await?;
    let stats = db.stats().collect().await.context("failed to collect statistics")?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_with_uses_the_given_config() {
        let config = CatalogConfig {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            ..CatalogConfig::default()
        };

        let db = open_with(&config).await.expect("open in-memory catalog");
        let stats = db.stats().collect().await.expect("collect stats");
        assert_eq!(stats.total_articles, 0);
    }
}
