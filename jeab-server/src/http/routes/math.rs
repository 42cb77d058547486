//! Math model endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{MathModelCreate, MathModelQuery, MathModelResponse};

/// GET /api/math - paginated list, or exact type match
async fn list_math_models(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<MathModelQuery>,
) -> Result<Json<Vec<MathModelResponse>>, ApiError> {
    let repo = state.db.math_models();
    let models = match query.model_type.as_deref() {
        Some(model_type) => repo.by_type(model_type).await?,
        None => repo.list(query.page()).await?,
    };
    Ok(Json(models))
}

/// GET /api/math/{id}
async fn get_math_model(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MathModelResponse>, ApiError> {
    let model = state
        .db
        .math_models()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("math model", id))?;
    Ok(Json(model))
}

/// POST /api/math
async fn create_math_model(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<MathModelCreate>,
) -> Result<(StatusCode, Json<MathModelResponse>), ApiError> {
    let model = state.db.math_models().create(&input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// Math model routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/math", get(list_math_models).post(create_math_model))
        .route("/math/{id}", get(get_math_model))
}
