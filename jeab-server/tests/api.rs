//! Router-level tests against an in-memory catalog

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use jeab_server::models::{PrincipleCreate, MAX_LIMIT};
use jeab_server::{build_router, Database};

async fn app() -> Router {
    let db = Database::in_memory().await.expect("in-memory database");
    build_router(db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn years(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|a| a["year"].as_i64().unwrap())
        .collect()
}

/// Principles "Positive Reinforcement" (id 1) and "Extinction" (id 2);
/// articles from 1938, 1970, 1972, 1975, 1960 with the first two linked
/// to positive reinforcement.
async fn seeded() -> Router {
    let app = app().await;

    let (status, _) = post(
        &app,
        "/api/principles",
        json!({"name": "Positive Reinforcement", "category": "reinforcement"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = post(&app, "/api/principles", json!({"name": "Extinction"})).await;
    assert_eq!(status, StatusCode::CREATED);

    for (year, principle_id) in [(1938, Some(1)), (1970, Some(1)), (1972, None), (1975, None), (1960, None)] {
        let (status, _) = post(
            &app,
            "/api/articles",
            json!({
                "title": format!("Article {year}"),
                "authors": "Skinner, B. F.",
                "year": year,
                "principle_id": principle_id,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    app
}

#[tokio::test]
async fn root_and_health() {
    let app = app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "JEAB Article Database API");

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn empty_lists_are_200_arrays() {
    let app = app().await;
    for uri in ["/api/articles", "/api/principles", "/api/procedures", "/api/math"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn create_and_fetch_article() {
    let app = app().await;

    let (status, created) = post(
        &app,
        "/api/articles",
        json!({
            "title": "Relative and absolute strength of response",
            "authors": "Herrnstein, R. J.",
            "year": 1961,
            "volume": 4,
            "pages": "267-272",
            "abstract": "Pigeons pecked two keys"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["abstract"], "Pigeons pecked two keys");
    assert_eq!(created["principle"], Value::Null);
    assert_eq!(created["created_at"], created["updated_at"]);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = get(&app, &format!("/api/articles/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_article_is_404() {
    let app = app().await;
    let (status, body) = get(&app, "/api/articles/12345").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let app = app().await;
    let (status, body) = get(&app, "/api/articles/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn article_missing_required_field_is_rejected_before_write() {
    let app = app().await;

    let (status, body) = post(&app, "/api/articles", json!({"title": "No authors", "year": 1970})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = post(&app, "/api/articles", json!({"title": " ", "authors": "A", "year": 1970})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, stats) = get(&app, "/api/stats").await;
    assert_eq!(stats["total_articles"], 0);
}

#[tokio::test]
async fn principle_filter_wins_over_year_bounds() {
    let app = seeded().await;

    let (status, body) = get(&app, "/api/articles?principle=reinforcement&year_start=1970&year_end=1975").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(years(&body), vec![1938, 1970]);
    assert_eq!(body[0]["principle"]["name"], "Positive Reinforcement");
}

#[tokio::test]
async fn year_bounds_filter_when_no_principle() {
    let app = seeded().await;

    let (_, body) = get(&app, "/api/articles?year_start=1970&year_end=1975").await;
    assert_eq!(years(&body), vec![1970, 1972, 1975]);

    let (_, body) = get(&app, "/api/articles?year_end=1960").await;
    assert_eq!(years(&body), vec![1938, 1960]);

    let (_, body) = get(&app, "/api/articles?principle=&year_start=1972").await;
    assert_eq!(years(&body), vec![1972, 1975]);
}

#[tokio::test]
async fn plain_list_paginates() {
    let app = seeded().await;

    let (_, body) = get(&app, "/api/articles").await;
    assert_eq!(years(&body), vec![1938, 1970, 1972, 1975, 1960]);

    let (_, body) = get(&app, "/api/articles?skip=1&limit=2").await;
    assert_eq!(years(&body), vec![1970, 1972]);

    let (status, _) = get(&app, "/api/articles?skip=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_endpoint() {
    let app = seeded().await;
    post(
        &app,
        "/api/articles",
        json!({"title": "Choice", "authors": "Baum", "year": 1974, "abstract": "Three PIGEONS"}),
    )
    .await;

    let (status, body) = get(&app, "/api/articles/search?q=pigeon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(years(&body), vec![1974]);

    let (status, _) = get(&app, "/api/articles/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_principle_is_conflict() {
    let app = seeded().await;

    let (status, body) = post(&app, "/api/principles", json!({"name": "Extinction"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "constraint_violation");

    let (_, list) = get(&app, "/api/principles").await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn principles_by_category_query() {
    let app = seeded().await;

    let (_, body) = get(&app, "/api/principles?category=reinforcement").await;
    let names: Vec<&str> = body.as_array().unwrap().iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Positive Reinforcement"]);

    let (status, body) = get(&app, "/api/principles/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], Value::Null);
}

#[tokio::test]
async fn math_models_round_trip() {
    let app = app().await;

    let (status, created) = post(
        &app,
        "/api/math",
        json!({"name": "Matching Law", "type": "static", "latex_equation": "\\frac{B_1}{B_2} = \\frac{R_1}{R_2}"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "static");

    let (_, body) = get(&app, "/api/math?type=static").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    let (_, body) = get(&app, "/api/math?type=recursive").await;
    assert_eq!(body, json!([]));

    let (_, body) = get(&app, "/api/math").await;
    assert_eq!(body[0]["latex_equation"], "\\frac{B_1}{B_2} = \\frac{R_1}{R_2}");
}

#[tokio::test]
async fn procedures_by_organism_query() {
    let app = app().await;
    post(&app, "/api/procedures", json!({"name": "Key pecking", "organism": "pigeon"})).await;
    post(&app, "/api/procedures", json!({"name": "Lever pressing", "organism": "rat"})).await;

    let (_, body) = get(&app, "/api/procedures?organism=rat").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Lever pressing");

    let (status, _) = get(&app, "/api/procedures/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn article_embeds_linked_records() {
    let app = app().await;
    post(&app, "/api/procedures", json!({"name": "Concurrent VI VI", "organism": "pigeon"})).await;
    post(&app, "/api/math", json!({"name": "Generalized Matching", "type": "static"})).await;

    let (status, created) = post(
        &app,
        "/api/articles",
        json!({"title": "On the law of effect", "authors": "Herrnstein", "year": 1970, "procedure_id": 1, "math_model_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["procedure"]["organism"], "pigeon");
    assert_eq!(created["math_model"]["type"], "static");
    assert_eq!(created["principle"], Value::Null);
}

#[tokio::test]
async fn dangling_foreign_key_is_conflict() {
    let app = app().await;
    let (status, _) = post(
        &app,
        "/api/articles",
        json!({"title": "Orphan", "authors": "A", "year": 2001, "principle_id": 9}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn stats_endpoint() {
    let app = seeded().await;

    let (status, body) = get(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_articles"], 5);
    assert_eq!(body["total_principles"], 2);
    assert_eq!(body["total_procedures"], 0);
    assert_eq!(body["total_math_models"], 0);
    assert_eq!(body["articles_by_decade"], json!({"1930s": 1, "1960s": 1, "1970s": 3}));
    assert_eq!(body["principles_by_category"], json!({"reinforcement": 1}));
}

#[tokio::test]
async fn extreme_year_keeps_stats_available() {
    let app = app().await;

    for year in [i32::MIN, i32::MAX, 1975] {
        let (status, _) = post(
            &app,
            "/api/articles",
            json!({"title": "T", "authors": "A", "year": year}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_articles"], 3);
    assert_eq!(
        body["articles_by_decade"],
        json!({"-2147483650s": 1, "1970s": 1, "2147483640s": 1})
    );
}

#[tokio::test]
async fn overlong_required_text_is_rejected() {
    let app = app().await;

    let (status, body) = post(
        &app,
        "/api/articles",
        json!({"title": "x".repeat(501), "authors": "A", "year": 1970}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("title"));

    let (status, _) = post(&app, "/api/principles", json!({"name": "n".repeat(201)})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app,
        "/api/articles",
        json!({"title": "x".repeat(500), "authors": "A", "year": 1970}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn oversized_limit_is_clamped() {
    let db = Database::in_memory().await.unwrap();
    let total = MAX_LIMIT as usize + 5;
    for i in 0..total {
        db.principles()
            .create(&PrincipleCreate {
                name: format!("Principle {i}"),
                description: None,
                category: None,
            })
            .await
            .unwrap();
    }
    let app = build_router(db);

    let (status, body) = get(&app, "/api/principles?limit=5000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), MAX_LIMIT as usize);

    let (_, body) = get(&app, "/api/principles?skip=1000&limit=5000").await;
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (_, body) = get(&app, "/api/principles").await;
    assert_eq!(body.as_array().unwrap().len(), 100);
}
