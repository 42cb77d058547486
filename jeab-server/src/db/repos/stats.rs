//! Catalog statistics
//!
//! All counts are read inside one transaction so totals and groupings
//! describe the same snapshot.

use std::collections::BTreeMap;

use sqlx::SqlitePool;

use crate::db::DbError;
use crate::models::{decade_label, StatsResponse};

/// Statistics repository
pub struct StatsRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StatsRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn collect(&self) -> Result<StatsResponse, DbError> {
        let mut tx = self.pool.begin().await?;

        let total_articles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&mut *tx)
            .await?;
        let total_principles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM principles")
            .fetch_one(&mut *tx)
            .await?;
        let total_procedures: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM procedures")
            .fetch_one(&mut *tx)
            .await?;
        let total_math_models: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM math_models")
            .fetch_one(&mut *tx)
            .await?;

        let by_year: Vec<(i32, i64)> =
            sqlx::query_as("SELECT year, COUNT(*) FROM articles GROUP BY year")
                .fetch_all(&mut *tx)
                .await?;

        let by_category: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT category, COUNT(*)
            FROM principles
            WHERE category IS NOT NULL AND category <> ''
            GROUP BY category
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(StatsResponse {
            total_articles,
            total_principles,
            total_procedures,
            total_math_models,
            articles_by_decade: bucket_by_decade(by_year),
            principles_by_category: by_category.into_iter().collect(),
        })
    }
}

/// Fold per-year counts into decade buckets.
fn bucket_by_decade(by_year: Vec<(i32, i64)>) -> BTreeMap<String, i64> {
    let mut decades = BTreeMap::new();
    for (year, count) in by_year {
        *decades.entry(decade_label(year)).or_insert(0) += count;
    }
    decades
}
