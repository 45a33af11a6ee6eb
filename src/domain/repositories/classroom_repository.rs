//! Repository trait for classroom data access.

use crate::domain::entities::{Classroom, ClassroomSummary, NewClassroom};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing classrooms.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClassroomRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassroomRepository: Send + Sync {
    /// Creates a new classroom and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_classroom: NewClassroom) -> Result<Classroom, AppError>;

    /// Lists all classrooms with their URL counts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_with_counts(&self) -> Result<Vec<ClassroomSummary>, AppError>;

    /// Finds a classroom by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Classroom))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Classroom>, AppError>;

    /// Deletes a classroom. Attached URL entries are removed by the
    /// `ON DELETE CASCADE` constraint.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if no classroom
    /// had the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
