//! Database layer - storage handle, schema, and repositories
//!
//! - One explicitly constructed [`Database`] owns the pool; nothing global
//! - Article reads resolve linked records with JOINs - no N+1 queries
//! - Constraints are left to SQLite; violations surface as [`DbError::Constraint`]

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

use sqlx::SqlitePool;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, memory_pool};
pub use repos::*;

/// Storage handle passed to every data-access call
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database at `url` and apply the schema.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = create_pool_with_options(url, max_connections).await?;
        Self::from_pool(pool).await
    }

    /// Fresh private in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self, DbError> {
        let pool = memory_pool().await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, applying the schema.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, DbError> {
        schema::run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn articles(&self) -> ArticleRepo<'_> {
        ArticleRepo::new(&self.pool)
    }

    pub fn principles(&self) -> PrincipleRepo<'_> {
        PrincipleRepo::new(&self.pool)
    }

    pub fn procedures(&self) -> ProcedureRepo<'_> {
        ProcedureRepo::new(&self.pool)
    }

    pub fn math_models(&self) -> MathModelRepo<'_> {
        MathModelRepo::new(&self.pool)
    }

    pub fn stats(&self) -> StatsRepo<'_> {
        StatsRepo::new(&self.pool)
    }
}
