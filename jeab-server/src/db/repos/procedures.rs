//! Procedure repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::db::DbError;
use crate::models::{Page, ProcedureCreate, ProcedureResponse};

const SELECT_PROCEDURE: &str =
    "SELECT id, name, description, organism, apparatus, parameters, created_at FROM procedures";

/// Procedure repository
pub struct ProcedureRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProcedureRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<ProcedureResponse>, DbError> {
        let rows = sqlx::query_as::<_, ProcedureResponse>(&format!(
            "{SELECT_PROCEDURE} ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Option<ProcedureResponse>, DbError> {
        let row = sqlx::query_as::<_, ProcedureResponse>(&format!("{SELECT_PROCEDURE} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row)
    }

    /// Insert a procedure. `parameters` is stored verbatim.
    pub async fn create(&self, input: &ProcedureCreate) -> Result<ProcedureResponse, DbError> {
        let row = sqlx::query_as::<_, ProcedureResponse>(
            r#"
            INSERT INTO procedures (name, description, organism, apparatus, parameters, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, description, organism, apparatus, parameters, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.organism.as_deref())
        .bind(input.apparatus.as_deref())
        .bind(input.parameters.as_deref())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = row.id, name = %row.name, "procedure created");
        Ok(row)
    }

    /// Exact match on organism, unpaginated.
    pub async fn by_organism(&self, organism: &str) -> Result<Vec<ProcedureResponse>, DbError> {
        tracing::debug!(organism, "procedures by organism");

        let rows = sqlx::query_as::<_, ProcedureResponse>(&format!(
            "{SELECT_PROCEDURE} WHERE organism = ? ORDER BY id"
        ))
        .bind(organism)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn procedure(name: &str, organism: Option<&str>) -> ProcedureCreate {
        ProcedureCreate {
            name: name.to_string(),
            description: None,
            organism: organism.map(str::to_string),
            apparatus: None,
            parameters: None,
        }
    }

    #[tokio::test]
    async fn parameters_are_stored_verbatim() {
        let db = Database::in_memory().await.unwrap();
        let raw = r#"{"schedule": "VI 30-s", "sessions": 40,}"#;

        let created = db
            .procedures()
            .create(&ProcedureCreate {
                name: "Concurrent VI VI".into(),
                description: None,
                organism: Some("pigeon".into()),
                apparatus: Some("two-key chamber".into()),
                parameters: Some(raw.into()),
            })
            .await
            .unwrap();

        let fetched = db.procedures().get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.parameters.as_deref(), Some(raw));
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_name_is_constraint_violation() {
        let db = Database::in_memory().await.unwrap();
        db.procedures().create(&procedure("Multiple Schedule", None)).await.unwrap();

        let err = db
            .procedures()
            .create(&procedure("Multiple Schedule", Some("rat")))
            .await
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[tokio::test]
    async fn by_organism_is_exact() {
        let db = Database::in_memory().await.unwrap();
        let repo = db.procedures();

        repo.create(&procedure("Key Pecking", Some("pigeon"))).await.unwrap();
        repo.create(&procedure("Lever Pressing", Some("rat"))).await.unwrap();
        repo.create(&procedure("Observing", None)).await.unwrap();

        let found = repo.by_organism("pigeon").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Key Pecking");
        assert!(repo.by_organism("pig").await.unwrap().is_empty());
    }
}
