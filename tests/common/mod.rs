#![allow(dead_code)]

use classroom_urls::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_classroom(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO classrooms (name) VALUES ($1) RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_classroom_with_description(
    pool: &PgPool,
    name: &str,
    description: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO classrooms (name, description) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_url(pool: &PgPool, classroom_id: i64, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO classroom_urls (classroom_id, url) VALUES ($1, $2) RETURNING id",
    )
    .bind(classroom_id)
    .bind(url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_urls_for_classroom(pool: &PgPool, classroom_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM classroom_urls WHERE classroom_id = $1",
    )
    .bind(classroom_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_saved_url(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO saved_urls (url) VALUES ($1) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
