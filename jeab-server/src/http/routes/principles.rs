//! Principle endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{PrincipleCreate, PrincipleQuery, PrincipleResponse};

/// GET /api/principles - paginated list, or exact category match
async fn list_principles(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<PrincipleQuery>,
) -> Result<Json<Vec<PrincipleResponse>>, ApiError> {
    let repo = state.db.principles();
    let principles = match query.category.as_deref() {
        Some(category) => repo.by_category(category).await?,
        None => repo.list(query.page()).await?,
    };
    Ok(Json(principles))
}

/// GET /api/principles/{id}
async fn get_principle(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<PrincipleResponse>, ApiError> {
    let principle = state
        .db
        .principles()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("principle", id))?;
    Ok(Json(principle))
}

/// POST /api/principles
async fn create_principle(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<PrincipleCreate>,
) -> Result<(StatusCode, Json<PrincipleResponse>), ApiError> {
    let principle = state.db.principles().create(&input).await?;
    Ok((StatusCode::CREATED, Json(principle)))
}

/// Principle routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/principles", get(list_principles).post(create_principle))
        .route("/principles/{id}", get(get_principle))
}
