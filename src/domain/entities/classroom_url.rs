//! Whitelist URL entry owned by a classroom.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// The URL type tag for whitelist entries. The column exists to support a
/// future blacklist variant; every entry currently carries this value.
pub const URL_TYPE_WHITELIST: &str = "whitelist";

/// A URL entry attached to a classroom.
///
/// The `url` field always holds the normalized form (see
/// [`crate::utils::url_validator::normalize`]); `(classroom_id, url)` is
/// unique, so a classroom never contains the same normalized URL twice.
#[derive(Debug, Clone, FromRow)]
pub struct ClassroomUrl {
    pub id: i64,
    pub classroom_id: i64,
    pub url: String,
    pub url_type: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for attaching a URL to a classroom.
#[derive(Debug, Clone)]
pub struct NewClassroomUrl {
    pub classroom_id: i64,
    /// Normalized URL, validated by the service layer.
    pub url: String,
    pub url_type: String,
}

impl NewClassroomUrl {
    /// Creates a whitelist entry for the given classroom and normalized URL.
    pub fn whitelist(classroom_id: i64, url: String) -> Self {
        Self {
            classroom_id,
            url,
            url_type: URL_TYPE_WHITELIST.to_string(),
        }
    }
}
