//! Procedure endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{ProcedureCreate, ProcedureQuery, ProcedureResponse};

/// GET /api/procedures - paginated list, or exact organism match
async fn list_procedures(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<ProcedureQuery>,
) -> Result<Json<Vec<ProcedureResponse>>, ApiError> {
    let repo = state.db.procedures();
    let procedures = match query.organism.as_deref() {
        Some(organism) => repo.by_organism(organism).await?,
        None => repo.list(query.page()).await?,
    };
    Ok(Json(procedures))
}

/// GET /api/procedures/{id}
async fn get_procedure(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ProcedureResponse>, ApiError> {
    let procedure = state
        .db
        .procedures()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("procedure", id))?;
    Ok(Json(procedure))
}

/// POST /api/procedures
async fn create_procedure(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<ProcedureCreate>,
) -> Result<(StatusCode, Json<ProcedureResponse>), ApiError> {
    let procedure = state.db.procedures().create(&input).await?;
    Ok((StatusCode::CREATED, Json(procedure)))
}

/// Procedure routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/procedures", get(list_procedures).post(create_procedure))
        .route("/procedures/{id}", get(get_procedure))
}
