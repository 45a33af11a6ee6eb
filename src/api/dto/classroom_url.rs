//! DTOs for classroom URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ClassroomUrl;

/// Request body for attaching a URL to a classroom.
#[derive(Debug, Deserialize, Validate)]
pub struct AddUrlRequest {
    #[validate(length(max = 2048, message = "URL cannot exceed 2048 characters"))]
    pub url: String,
}

/// A stored whitelist URL entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomUrlItem {
    pub id: i64,
    /// Normalized URL as stored.
    pub url: String,
    pub url_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<ClassroomUrl> for ClassroomUrlItem {
    fn from(u: ClassroomUrl) -> Self {
        Self {
            id: u.id,
            url: u.url,
            url_type: u.url_type,
            created_at: u.created_at,
        }
    }
}
