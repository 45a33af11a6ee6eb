//! Classroom entity representing a named grouping of whitelist URLs.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A classroom: a logical grouping (a physical class or lesson group) that
/// whitelist URLs are attached to for DNS filtering control.
///
/// Classrooms are created once and never updated. Deleting a classroom
/// cascade-deletes its URL entries at the storage layer.
#[derive(Debug, Clone, FromRow)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new classroom.
///
/// `name` and `description` are expected to be trimmed and length-checked by
/// the service layer before this struct is constructed.
#[derive(Debug, Clone)]
pub struct NewClassroom {
    pub name: String,
    pub description: Option<String>,
}

/// Classroom list projection with the number of attached URLs.
#[derive(Debug, Clone, FromRow)]
pub struct ClassroomSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub url_count: i64,
    pub created_at: DateTime<Utc>,
}
