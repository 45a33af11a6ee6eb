mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use classroom_urls::api::handlers::{create_saved_url_handler, saved_url_list_handler};

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/urls", get(saved_url_list_handler))
        .route("/api/urls", post(create_saved_url_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_save_url_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body.get("id").is_some());
    assert_eq!(body["url"], "https://example.com");
    assert!(body.get("createdAt").is_some());
}

/// Dashboard URLs are stored raw: no normalization or format validation.
#[sqlx::test]
async fn test_save_url_stores_raw_input(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/urls")
        .json(&json!({ "url": "HTTP://Example.COM/MixedCase" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["url"], "HTTP://Example.COM/MixedCase");
}

#[sqlx::test]
async fn test_save_url_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.post("/api/urls").json(&json!({ "url": "" })).await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_list_saved_urls(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_saved_url(&pool, "https://example.com").await;
    common::create_test_saved_url(&pool, "https://rust-lang.org").await;

    let response = server.get("/api/urls").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["url"], "https://example.com");
    assert_eq!(items[1]["url"], "https://rust-lang.org");
}

#[sqlx::test]
async fn test_list_saved_urls_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 0);
}
