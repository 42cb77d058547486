//! Experimental procedures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pagination::{Page, PageParams};
use super::validation::{require_text, Validate, ValidationError};

const MAX_NAME_LEN: usize = 200;

/// Input for creating a procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureCreate {
    pub name: String,
    pub description: Option<String>,
    /// Species used, e.g. "pigeon"
    pub organism: Option<String>,
    pub apparatus: Option<String>,
    /// Serialized experimental parameters, stored as-is
    pub parameters: Option<String>,
}

impl Validate for ProcedureCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)
    }
}

/// Stored procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProcedureResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub organism: Option<String>,
    pub apparatus: Option<String>,
    pub parameters: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `GET /api/procedures` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcedureQuery {
    pub organism: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ProcedureQuery {
    pub fn page(&self) -> Page {
        Page::from(PageParams {
            skip: self.skip,
            limit: self.limit,
        })
    }
}
