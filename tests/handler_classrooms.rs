mod common;

use axum::{
    Router,
    routing::{delete, get, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use classroom_urls::api::handlers::{
    classroom_detail_handler, classroom_list_handler, create_classroom_handler,
    delete_classroom_handler,
};

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/classrooms", get(classroom_list_handler))
        .route("/api/classrooms", post(create_classroom_handler))
        .route("/api/classrooms/{id}", get(classroom_detail_handler))
        .route("/api/classrooms/{id}", delete(delete_classroom_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_classroom_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/classrooms")
        .json(&json!({ "name": "Math 101", "description": "Advanced Mathematics" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body.get("id").is_some());
    assert_eq!(body["name"], "Math 101");
    assert_eq!(body["description"], "Advanced Mathematics");
    assert_eq!(body["urls"].as_array().unwrap().len(), 0);
    assert!(body.get("createdAt").is_some());
}

#[sqlx::test]
async fn test_create_classroom_name_only(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/classrooms")
        .json(&json!({ "name": "Science 202" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Science 202");
    assert!(body["description"].is_null());
}

#[sqlx::test]
async fn test_create_classroom_trims_whitespace(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/classrooms")
        .json(&json!({ "name": "  History 303  ", "description": "  World History  " }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "History 303");
    assert_eq!(body["description"], "World History");
}

#[sqlx::test]
async fn test_create_classroom_empty_name(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/classrooms")
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_create_classroom_blank_name(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/classrooms")
        .json(&json!({ "name": "   " }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_create_classroom_name_too_long(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/classrooms")
        .json(&json!({ "name": "x".repeat(101) }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_create_classroom_description_too_long(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/classrooms")
        .json(&json!({ "name": "Math 101", "description": "x".repeat(501) }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_classrooms_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/classrooms").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_list_classrooms_with_url_counts(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_classroom(&pool, "Math 101").await;
    common::create_test_url(&pool, id, "https://example.com").await;
    common::create_test_url(&pool, id, "https://rust-lang.org").await;
    common::create_test_classroom(&pool, "Science 202").await;

    let response = server.get("/api/classrooms").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);

    let math = items
        .iter()
        .find(|item| item["name"] == "Math 101")
        .unwrap();
    assert_eq!(math["urlCount"], 2);

    let science = items
        .iter()
        .find(|item| item["name"] == "Science 202")
        .unwrap();
    assert_eq!(science["urlCount"], 0);
}

#[sqlx::test]
async fn test_list_classrooms_item_structure(pool: PgPool) {
    let server = make_server(pool.clone());

    common::create_test_classroom_with_description(&pool, "Math 101", "Algebra").await;

    let response = server.get("/api/classrooms").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let first = &body.as_array().unwrap()[0];
    assert!(first.get("id").is_some());
    assert!(first.get("name").is_some());
    assert!(first.get("description").is_some());
    assert!(first.get("urlCount").is_some());
    assert!(first.get("createdAt").is_some());
}

// ─── DETAIL ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_classroom_detail_with_urls(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_classroom(&pool, "Math 101").await;
    common::create_test_url(&pool, id, "https://example.com").await;

    let response = server.get(&format!("/api/classrooms/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Math 101");

    let urls = body["urls"].as_array().unwrap();
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0]["url"], "https://example.com");
    assert_eq!(urls[0]["urlType"], "whitelist");
}

#[sqlx::test]
async fn test_classroom_detail_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/classrooms/99999").await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_classroom_success(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_classroom(&pool, "Math 101").await;

    let response = server.delete(&format!("/api/classrooms/{id}")).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/classrooms/{id}")).await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_delete_classroom_cascades_urls(pool: PgPool) {
    let server = make_server(pool.clone());

    let id = common::create_test_classroom(&pool, "Math 101").await;
    common::create_test_url(&pool, id, "https://example.com").await;
    common::create_test_url(&pool, id, "https://rust-lang.org").await;

    let response = server.delete(&format!("/api/classrooms/{id}")).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    assert_eq!(common::count_urls_for_classroom(&pool, id).await, 0);
}

#[sqlx::test]
async fn test_delete_classroom_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.delete("/api/classrooms/99999").await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}
