//! Article endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{ArticleCreate, ArticleFilter, ArticleQuery, ArticleResponse, SearchQuery};

/// GET /api/articles - principle filter, else year range, else plain list
async fn list_articles(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<ArticleQuery>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let page = query.page();
    let repo = state.db.articles();

    let articles = match query.filter() {
        ArticleFilter::Principle(name) => repo.by_principle(&name, page).await?,
        ArticleFilter::YearRange { start, end } => repo.by_year_range(start, end, page).await?,
        ArticleFilter::All => repo.list(page).await?,
    };

    Ok(Json(articles))
}

/// GET /api/articles/search?q= - match title, authors, or abstract
async fn search_articles(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<SearchQuery>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let articles = state.db.articles().search(&query.q, query.page()).await?;
    Ok(Json(articles))
}

/// GET /api/articles/{id}
async fn get_article(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = state
        .db
        .articles()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("article", id))?;

    Ok(Json(article))
}

/// POST /api/articles
async fn create_article(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<ArticleCreate>,
) -> Result<(StatusCode, Json<ArticleResponse>), ApiError> {
    let article = state.db.articles().create(&input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route("/articles/search", get(search_articles))
        .route("/articles/{id}", get(get_article))
}
