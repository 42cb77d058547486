//! Behavioral principles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pagination::{Page, PageParams};
use super::validation::{require_text, Validate, ValidationError};

const MAX_NAME_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 100;

/// Input for creating a principle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipleCreate {
    pub name: String,
    pub description: Option<String>,
    /// Short grouping label, e.g. "reinforcement"
    pub category: Option<String>,
}

impl Validate for PrincipleCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        if let Some(category) = &self.category {
            if category.chars().count() > MAX_CATEGORY_LEN {
                return Err(ValidationError::TooLong {
                    field: "category",
                    max: MAX_CATEGORY_LEN,
                });
            }
        }
        Ok(())
    }
}

/// Stored principle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PrincipleResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `GET /api/principles` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrincipleQuery {
    pub category: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl PrincipleQuery {
    pub fn page(&self) -> Page {
        Page::from(PageParams {
            skip: self.skip,
            limit: self.limit,
        })
    }
}
