//! Principle repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::db::DbError;
use crate::models::{Page, PrincipleCreate, PrincipleResponse};

const SELECT_PRINCIPLE: &str = "SELECT id, name, description, category, created_at FROM principles";

/// Principle repository
pub struct PrincipleRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PrincipleRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List principles in insertion order.
    pub async fn list(&self, page: Page) -> Result<Vec<PrincipleResponse>, DbError> {
        let rows = sqlx::query_as::<_, PrincipleResponse>(&format!(
            "{SELECT_PRINCIPLE} ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Option<PrincipleResponse>, DbError> {
        let row = sqlx::query_as::<_, PrincipleResponse>(&format!("{SELECT_PRINCIPLE} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row)
    }

    /// Insert a principle. A duplicate name fails with [`DbError::Constraint`].
    pub async fn create(&self, input: &PrincipleCreate) -> Result<PrincipleResponse, DbError> {
        let row = sqlx::query_as::<_, PrincipleResponse>(
            r#"
            INSERT INTO principles (name, description, category, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, category, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.category.as_deref())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = row.id, name = %row.name, "principle created");
        Ok(row)
    }

    /// Exact match on category, unpaginated.
    pub async fn by_category(&self, category: &str) -> Result<Vec<PrincipleResponse>, DbError> {
        tracing::debug!(category, "principles by category");

        let rows = sqlx::query_as::<_, PrincipleResponse>(&format!(
            "{SELECT_PRINCIPLE} WHERE category = ? ORDER BY id"
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
