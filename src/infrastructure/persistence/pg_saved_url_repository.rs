//! PostgreSQL implementation of the saved URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSavedUrl, SavedUrl};
use crate::domain::repositories::SavedUrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for dashboard-saved URLs.
pub struct PgSavedUrlRepository {
    pool: Arc<PgPool>,
}

impl PgSavedUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SavedUrlRepository for PgSavedUrlRepository {
    async fn create(&self, new_url: NewSavedUrl) -> Result<SavedUrl, AppError> {
        let saved = sqlx::query_as::<_, SavedUrl>(
            r#"
            INSERT INTO saved_urls (url)
            VALUES ($1)
            RETURNING id, url, created_at
            "#,
        )
        .bind(&new_url.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(saved)
    }

    async fn list(&self) -> Result<Vec<SavedUrl>, AppError> {
        let urls = sqlx::query_as::<_, SavedUrl>(
            r#"
            SELECT id, url, created_at
            FROM saved_urls
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(urls)
    }
}
