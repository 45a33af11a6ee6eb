//! Repository trait for saved dashboard URLs.

use crate::domain::entities::{NewSavedUrl, SavedUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the standalone saved-URL dashboard.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSavedUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SavedUrlRepository: Send + Sync {
    /// Stores a raw URL string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewSavedUrl) -> Result<SavedUrl, AppError>;

    /// Lists all saved URLs in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<SavedUrl>, AppError>;
}
