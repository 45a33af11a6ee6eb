//! Saved URL dashboard service.

use std::sync::Arc;

use crate::domain::entities::{NewSavedUrl, SavedUrl};
use crate::domain::repositories::SavedUrlRepository;
use crate::error::AppError;
use serde_json::json;

/// Service backing the standalone URL dashboard.
///
/// Stores raw URL strings; the only check is that the input is non-empty.
pub struct SavedUrlService<S: SavedUrlRepository> {
    repository: Arc<S>,
}

impl<S: SavedUrlRepository> SavedUrlService<S> {
    /// Creates a new saved URL service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Saves a raw URL string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is blank.
    pub async fn save_url(&self, url: String) -> Result<SavedUrl, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request("URL cannot be empty", json!({})));
        }

        self.repository.create(NewSavedUrl { url }).await
    }

    /// Lists all saved URLs in insertion order.
    pub async fn list_urls(&self) -> Result<Vec<SavedUrl>, AppError> {
        self.repository.list().await
    }
}
