//! Saved URL entity for the standalone URL dashboard.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A URL saved through the dashboard API.
///
/// Unrelated to classrooms: the stored string is raw user input, not
/// normalized or validated beyond being non-empty.
#[derive(Debug, Clone, FromRow)]
pub struct SavedUrl {
    pub id: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for saving a URL.
#[derive(Debug, Clone)]
pub struct NewSavedUrl {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_url_construction() {
        let saved = SavedUrl {
            id: 1,
            url: "anything goes here".to_string(),
            created_at: Utc::now(),
        };

        // Raw input is stored as-is.
        assert_eq!(saved.url, "anything goes here");
    }
}
