//! Mathematical models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pagination::{Page, PageParams};
use super::validation::{require_text, Validate, ValidationError};

const MAX_NAME_LEN: usize = 200;

/// Input for creating a math model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathModelCreate {
    pub name: String,
    /// "static" or "recursive" by convention; not enforced
    #[serde(rename = "type")]
    pub model_type: Option<String>,
    /// Typeset equation, kept opaque
    pub latex_equation: Option<String>,
    pub description: Option<String>,
    pub parameters: Option<String>,
}

impl Validate for MathModelCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)
    }
}

/// Stored math model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MathModelResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub model_type: Option<String>,
    pub latex_equation: Option<String>,
    pub description: Option<String>,
    pub parameters: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `GET /api/math` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MathModelQuery {
    #[serde(rename = "type")]
    pub model_type: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl MathModelQuery {
    pub fn page(&self) -> Page {
        Page::from(PageParams {
            skip: self.skip,
            limit: self.limit,
        })
    }
}
