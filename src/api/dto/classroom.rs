//! DTOs for classroom endpoints.
//!
//! Wire format uses camelCase field names to stay compatible with the
//! existing frontend client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::classroom_url::ClassroomUrlItem;
use crate::domain::entities::{Classroom, ClassroomSummary, ClassroomUrl};

/// Request body for creating a classroom.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClassroomRequest {
    #[validate(length(max = 100, message = "Classroom name cannot exceed 100 characters"))]
    pub name: String,

    #[validate(length(
        max = 500,
        message = "Classroom description cannot exceed 500 characters"
    ))]
    pub description: Option<String>,
}

/// Classroom summary for the list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomListItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub url_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ClassroomSummary> for ClassroomListItem {
    fn from(s: ClassroomSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            url_count: s.url_count,
            created_at: s.created_at,
        }
    }
}

/// Full classroom detail including all whitelist URLs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomDetailResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub urls: Vec<ClassroomUrlItem>,
    pub created_at: DateTime<Utc>,
}

impl ClassroomDetailResponse {
    /// Builds the detail response from a classroom and its URL entries.
    pub fn from_parts(classroom: Classroom, urls: Vec<ClassroomUrl>) -> Self {
        Self {
            id: classroom.id,
            name: classroom.name,
            description: classroom.description,
            urls: urls.into_iter().map(ClassroomUrlItem::from).collect(),
            created_at: classroom.created_at,
        }
    }
}
