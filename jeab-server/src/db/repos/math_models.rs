//! Math model repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::db::DbError;
use crate::models::{MathModelCreate, MathModelResponse, Page};

const SELECT_MATH_MODEL: &str =
    "SELECT id, name, type, latex_equation, description, parameters, created_at FROM math_models";

/// Math model repository
pub struct MathModelRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MathModelRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<MathModelResponse>, DbError> {
        let rows = sqlx::query_as::<_, MathModelResponse>(&format!(
            "{SELECT_MATH_MODEL} ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Option<MathModelResponse>, DbError> {
        let row = sqlx::query_as::<_, MathModelResponse>(&format!("{SELECT_MATH_MODEL} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row)
    }

    /// Insert a math model. Names are not unique.
    pub async fn create(&self, input: &MathModelCreate) -> Result<MathModelResponse, DbError> {
        let row = sqlx::query_as::<_, MathModelResponse>(
            r#"
            INSERT INTO math_models (name, type, latex_equation, description, parameters, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, type, latex_equation, description, parameters, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.model_type.as_deref())
        .bind(input.latex_equation.as_deref())
        .bind(input.description.as_deref())
        .bind(input.parameters.as_deref())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = row.id, name = %row.name, "math model created");
        Ok(row)
    }

    /// Exact match on model type, unpaginated.
    pub async fn by_type(&self, model_type: &str) -> Result<Vec<MathModelResponse>, DbError> {
        tracing::debug!(model_type, "math models by type");

        let rows = sqlx::query_as::<_, MathModelResponse>(&format!(
            "{SELECT_MATH_MODEL} WHERE type = ? ORDER BY id"
        ))
        .bind(model_type)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
