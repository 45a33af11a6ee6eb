//! Repository trait for classroom whitelist URL entries.

use crate::domain::entities::{ClassroomUrl, NewClassroomUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL entries owned by classrooms.
///
/// URLs passed to this repository are already normalized; duplicate detection
/// is string equality on the normalized form, backed by the
/// `(classroom_id, url)` unique constraint.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClassroomUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassroomUrlRepository: Send + Sync {
    /// Inserts a URL entry for a classroom.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the classroom already contains the
    /// normalized URL (unique constraint violation, covering the concurrent
    /// insert race).
    ///
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_url: NewClassroomUrl) -> Result<ClassroomUrl, AppError>;

    /// Finds an entry by classroom and normalized URL.
    ///
    /// Used for the application-level duplicate pre-check before insertion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_classroom_and_url(
        &self,
        classroom_id: i64,
        url: &str,
    ) -> Result<Option<ClassroomUrl>, AppError>;

    /// Lists all URL entries for a classroom, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_classroom(&self, classroom_id: i64) -> Result<Vec<ClassroomUrl>, AppError>;
}
