//! Articles and the `GET /api/articles` filter selection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::math_model::MathModelResponse;
use super::pagination::{Page, PageParams};
use super::principle::PrincipleResponse;
use super::procedure::ProcedureResponse;
use super::validation::{require_text, Validate, ValidationError};

const MAX_TITLE_LEN: usize = 500;
const MAX_AUTHORS_LEN: usize = 1000;

/// Input for creating an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleCreate {
    pub title: String,
    pub authors: String,
    pub year: i32,
    pub volume: Option<i32>,
    pub issue: Option<i32>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub principle_id: Option<i64>,
    pub procedure_id: Option<i64>,
    pub math_model_id: Option<i64>,
}

impl Validate for ArticleCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, MAX_TITLE_LEN)?;
        require_text("authors", &self.authors, MAX_AUTHORS_LEN)?;
        Ok(())
    }
}

/// Stored article with its linked records resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub authors: String,
    pub year: i32,
    pub volume: Option<i32>,
    pub issue: Option<i32>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub principle_id: Option<i64>,
    pub procedure_id: Option<i64>,
    pub math_model_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub principle: Option<PrincipleResponse>,
    pub procedure: Option<ProcedureResponse>,
    pub math_model: Option<MathModelResponse>,
}

/// `GET /api/articles` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub principle: Option<String>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
}

/// Which lookup serves an article listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    /// Substring match on the linked principle's name
    Principle(String),
    /// Inclusive year bounds, either side optional
    YearRange { start: Option<i32>, end: Option<i32> },
    /// Plain paginated list
    All,
}

impl ArticleQuery {
    pub fn page(&self) -> Page {
        Page::from(PageParams {
            skip: self.skip,
            limit: self.limit,
        })
    }

    /// Principle wins over year bounds; year bounds win over nothing.
    /// Filters are never combined.
    pub fn filter(&self) -> ArticleFilter {
        if let Some(principle) = self.principle.as_deref().filter(|p| !p.is_empty()) {
            return ArticleFilter::Principle(principle.to_string());
        }
        if self.year_start.is_some() || self.year_end.is_some() {
            return ArticleFilter::YearRange {
                start: self.year_start,
                end: self.year_end,
            };
        }
        ArticleFilter::All
    }
}

/// `GET /api/articles/search` query string
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl SearchQuery {
    pub fn page(&self) -> Page {
        Page::from(PageParams {
            skip: self.skip,
            limit: self.limit,
        })
    }
}
