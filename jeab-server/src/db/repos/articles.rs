//! Article repository
//!
//! Every read goes through one LEFT JOIN query that resolves the linked
//! principle, procedure, and math model alongside the article (no N+1).

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::DbError;
use crate::models::{
    ArticleCreate, ArticleResponse, MathModelResponse, Page, PrincipleResponse, ProcedureResponse,
};

const SELECT_ARTICLE: &str = r#"
    SELECT
        a.id, a.title, a.authors, a.year, a.volume, a.issue, a.pages, a.doi, a.abstract,
        a.principle_id, a.procedure_id, a.math_model_id, a.created_at, a.updated_at,
        p.id AS p_id, p.name AS p_name, p.description AS p_description,
        p.category AS p_category, p.created_at AS p_created_at,
        pr.id AS pr_id, pr.name AS pr_name, pr.description AS pr_description,
        pr.organism AS pr_organism, pr.apparatus AS pr_apparatus,
        pr.parameters AS pr_parameters, pr.created_at AS pr_created_at,
        m.id AS m_id, m.name AS m_name, m.type AS m_type,
        m.latex_equation AS m_latex_equation, m.description AS m_description,
        m.parameters AS m_parameters, m.created_at AS m_created_at
    FROM articles a
    LEFT JOIN principles p ON p.id = a.principle_id
    LEFT JOIN procedures pr ON pr.id = a.procedure_id
    LEFT JOIN math_models m ON m.id = a.math_model_id
"#;

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List articles in insertion order.
    pub async fn list(&self, page: Page) -> Result<Vec<ArticleResponse>, DbError> {
        let rows = sqlx::query(&format!("{SELECT_ARTICLE} ORDER BY a.id LIMIT ? OFFSET ?"))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool)
            .await?;

        collect_articles(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Option<ArticleResponse>, DbError> {
        let row = sqlx::query(&format!("{SELECT_ARTICLE} WHERE a.id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(article_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert an article and return it as stored.
    ///
    /// Foreign keys are not checked up front; SQLite rejects a dangling
    /// reference with [`DbError::Constraint`].
    pub async fn create(&self, input: &ArticleCreate) -> Result<ArticleResponse, DbError> {
        let now = Utc::now();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO articles (
                title, authors, year, volume, issue, pages, doi, abstract,
                principle_id, procedure_id, math_model_id, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.authors)
        .bind(input.year)
        .bind(input.volume)
        .bind(input.issue)
        .bind(input.pages.as_deref())
        .bind(input.doi.as_deref())
        .bind(input.abstract_text.as_deref())
        .bind(input.principle_id)
        .bind(input.procedure_id)
        .bind(input.math_model_id)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id, year = input.year, "article created");

        self.get(id)
            .await?
            .ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
    }

    /// Case-insensitive substring match on the linked principle's name.
    /// Articles without a principle never match.
    pub async fn by_principle(
        &self,
        name: &str,
        page: Page,
    ) -> Result<Vec<ArticleResponse>, DbError> {
        tracing::debug!(principle = name, "articles by principle");

        let rows = sqlx::query(&format!(
            "{SELECT_ARTICLE} WHERE instr(lower(p.name), lower(?)) > 0 ORDER BY a.id LIMIT ? OFFSET ?"
        ))
        .bind(name)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        collect_articles(rows)
    }

    /// Inclusive year range; a missing bound leaves that side open.
    pub async fn by_year_range(
        &self,
        start: Option<i32>,
        end: Option<i32>,
        page: Page,
    ) -> Result<Vec<ArticleResponse>, DbError> {
        tracing::debug!(?start, ?end, "articles by year range");

        let mut sql = format!("{SELECT_ARTICLE} WHERE 1=1");
        if start.is_some() {
            sql.push_str(" AND a.year >= ?");
        }
        if end.is_some() {
            sql.push_str(" AND a.year <= ?");
        }
        sql.push_str(" ORDER BY a.id LIMIT ? OFFSET ?");

        let mut query = sqlx::query(&sql);
        if let Some(start) = start {
            query = query.bind(start);
        }
        if let Some(end) = end {
            query = query.bind(end);
        }

        let rows = query
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool)
            .await?;

        collect_articles(rows)
    }

    /// Case-insensitive substring match against title OR authors OR abstract.
    pub async fn search(&self, term: &str, page: Page) -> Result<Vec<ArticleResponse>, DbError> {
        tracing::debug!(term, "searching articles");

        let rows = sqlx::query(&format!(
            r#"{SELECT_ARTICLE}
            WHERE instr(lower(a.title), lower(?1)) > 0
               OR instr(lower(a.authors), lower(?1)) > 0
               OR instr(lower(coalesce(a.abstract, '')), lower(?1)) > 0
            ORDER BY a.id LIMIT ?2 OFFSET ?3"#
        ))
        .bind(term)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        collect_articles(rows)
    }
}

fn collect_articles(rows: Vec<SqliteRow>) -> Result<Vec<ArticleResponse>, DbError> {
    rows.iter()
        .map(|row| article_from_row(row).map_err(DbError::from))
        .collect()
}

fn article_from_row(row: &SqliteRow) -> Result<ArticleResponse, sqlx::Error> {
    let principle = match row.try_get::<Option<i64>, _>("p_id")? {
        Some(id) => Some(PrincipleResponse {
            id,
            name: row.try_get("p_name")?,
            description: row.try_get("p_description")?,
            category: row.try_get("p_category")?,
            created_at: row.try_get("p_created_at")?,
        }),
        None => None,
    };

    let procedure = match row.try_get::<Option<i64>, _>("pr_id")? {
        Some(id) => Some(ProcedureResponse {
            id,
            name: row.try_get("pr_name")?,
            description: row.try_get("pr_description")?,
            organism: row.try_get("pr_organism")?,
            apparatus: row.try_get("pr_apparatus")?,
            parameters: row.try_get("pr_parameters")?,
            created_at: row.try_get("pr_created_at")?,
        }),
        None => None,
    };

    let math_model = match row.try_get::<Option<i64>, _>("m_id")? {
        Some(id) => Some(MathModelResponse {
            id,
            name: row.try_get("m_name")?,
            model_type: row.try_get("m_type")?,
            latex_equation: row.try_get("m_latex_equation")?,
            description: row.try_get("m_description")?,
            parameters: row.try_get("m_parameters")?,
            created_at: row.try_get("m_created_at")?,
        }),
        None => None,
    };

    Ok(ArticleResponse {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        authors: row.try_get("authors")?,
        year: row.try_get("year")?,
        volume: row.try_get("volume")?,
        issue: row.try_get("issue")?,
        pages: row.try_get("pages")?,
        doi: row.try_get("doi")?,
        abstract_text: row.try_get("abstract")?,
        principle_id: row.try_get("principle_id")?,
        procedure_id: row.try_get("procedure_id")?,
        math_model_id: row.try_get("math_model_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        principle,
        procedure,
        math_model,
    })
}
