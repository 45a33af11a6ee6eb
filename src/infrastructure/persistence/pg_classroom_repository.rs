//! PostgreSQL implementation of the classroom repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Classroom, ClassroomSummary, NewClassroom};
use crate::domain::repositories::ClassroomRepository;
use crate::error::AppError;

/// PostgreSQL repository for classroom storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgClassroomRepository {
    pool: Arc<PgPool>,
}

impl PgClassroomRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassroomRepository for PgClassroomRepository {
    async fn create(&self, new_classroom: NewClassroom) -> Result<Classroom, AppError> {
        let classroom = sqlx::query_as::<_, Classroom>(
            r#"
            INSERT INTO classrooms (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(&new_classroom.name)
        .bind(&new_classroom.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(classroom)
    }

    async fn list_with_counts(&self) -> Result<Vec<ClassroomSummary>, AppError> {
        let summaries = sqlx::query_as::<_, ClassroomSummary>(
            r#"
            SELECT c.id, c.name, c.description, COUNT(u.id) AS url_count, c.created_at
            FROM classrooms c
            LEFT JOIN classroom_urls u ON u.classroom_id = c.id
            GROUP BY c.id, c.name, c.description, c.created_at
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(summaries)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Classroom>, AppError> {
        let classroom = sqlx::query_as::<_, Classroom>(
            r#"
            SELECT id, name, description, created_at
            FROM classrooms
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(classroom)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM classrooms WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
