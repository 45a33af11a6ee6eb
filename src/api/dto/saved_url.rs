//! DTOs for the saved URL dashboard endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::SavedUrl;

/// Request body for saving a URL.
#[derive(Debug, Deserialize)]
pub struct CreateSavedUrlRequest {
    pub url: String,
}

/// A saved URL as returned by the dashboard API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedUrlItem {
    pub id: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<SavedUrl> for SavedUrlItem {
    fn from(s: SavedUrl) -> Self {
        Self {
            id: s.id,
            url: s.url,
            created_at: s.created_at,
        }
    }
}
