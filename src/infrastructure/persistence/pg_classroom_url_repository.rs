//! PostgreSQL implementation of the classroom URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClassroomUrl, NewClassroomUrl};
use crate::domain::repositories::ClassroomUrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for whitelist URL entries.
///
/// The `(classroom_id, url)` unique constraint enforces per-classroom URL
/// uniqueness; a violated insert surfaces as [`AppError::Conflict`] via the
/// central sqlx error mapping.
pub struct PgClassroomUrlRepository {
    pool: Arc<PgPool>,
}

impl PgClassroomUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassroomUrlRepository for PgClassroomUrlRepository {
    async fn create(&self, new_url: NewClassroomUrl) -> Result<ClassroomUrl, AppError> {
        let entry = sqlx::query_as::<_, ClassroomUrl>(
            r#"
            INSERT INTO classroom_urls (classroom_id, url, url_type)
            VALUES ($1, $2, $3)
            RETURNING id, classroom_id, url, url_type, created_at
            "#,
        )
        .bind(new_url.classroom_id)
        .bind(&new_url.url)
        .bind(&new_url.url_type)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(entry)
    }

    async fn find_by_classroom_and_url(
        &self,
        classroom_id: i64,
        url: &str,
    ) -> Result<Option<ClassroomUrl>, AppError> {
        let entry = sqlx::query_as::<_, ClassroomUrl>(
            r#"
            SELECT id, classroom_id, url, url_type, created_at
            FROM classroom_urls
            WHERE classroom_id = $1 AND url = $2
            "#,
        )
        .bind(classroom_id)
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(entry)
    }

    async fn list_for_classroom(&self, classroom_id: i64) -> Result<Vec<ClassroomUrl>, AppError> {
        let entries = sqlx::query_as::<_, ClassroomUrl>(
            r#"
            SELECT id, classroom_id, url, url_type, created_at
            FROM classroom_urls
            WHERE classroom_id = $1
            ORDER BY id
            "#,
        )
        .bind(classroom_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(entries)
    }
}
