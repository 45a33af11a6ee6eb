//! Classroom and whitelist URL management service.

use std::sync::Arc;

use crate::domain::entities::{
    Classroom, ClassroomSummary, ClassroomUrl, NewClassroom, NewClassroomUrl,
};
use crate::domain::repositories::{ClassroomRepository, ClassroomUrlRepository};
use crate::error::AppError;
use crate::utils::url_validator::{is_valid, normalize};
use serde_json::json;

/// Maximum length of a classroom name, in characters.
const MAX_NAME_LEN: usize = 100;
/// Maximum length of a classroom description, in characters.
const MAX_DESCRIPTION_LEN: usize = 500;
/// Maximum length of a stored (normalized) URL.
const MAX_URL_LEN: usize = 2048;

/// Service for creating, listing, and deleting classrooms and for attaching
/// whitelist URLs to them.
///
/// Input is trimmed and length-checked here; URLs are validated and
/// normalized before storage so that duplicate detection is plain string
/// equality on the normalized form.
pub struct ClassroomService<C: ClassroomRepository, U: ClassroomUrlRepository> {
    classroom_repository: Arc<C>,
    url_repository: Arc<U>,
}

impl<C: ClassroomRepository, U: ClassroomUrlRepository> ClassroomService<C, U> {
    /// Creates a new classroom service.
    pub fn new(classroom_repository: Arc<C>, url_repository: Arc<U>) -> Self {
        Self {
            classroom_repository,
            url_repository,
        }
    }

    /// Creates a classroom from user input.
    ///
    /// Name and description are trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the trimmed name is empty or
    /// exceeds 100 characters, or the trimmed description exceeds 500
    /// characters.
    pub async fn create_classroom(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Classroom, AppError> {
        let name = name.trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request(
                "Classroom name cannot be empty",
                json!({}),
            ));
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::bad_request(
                "Classroom name cannot exceed 100 characters",
                json!({ "max_length": MAX_NAME_LEN }),
            ));
        }

        let description = description.map(|d| d.trim().to_string());

        if let Some(ref d) = description
            && d.chars().count() > MAX_DESCRIPTION_LEN
        {
            return Err(AppError::bad_request(
                "Classroom description cannot exceed 500 characters",
                json!({ "max_length": MAX_DESCRIPTION_LEN }),
            ));
        }

        self.classroom_repository
            .create(NewClassroom { name, description })
            .await
    }

    /// Lists all classrooms with URL counts, newest first.
    pub async fn list_classrooms(&self) -> Result<Vec<ClassroomSummary>, AppError> {
        self.classroom_repository.list_with_counts().await
    }

    /// Retrieves a classroom and all of its URL entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no classroom has the given id.
    pub async fn get_classroom(
        &self,
        id: i64,
    ) -> Result<(Classroom, Vec<ClassroomUrl>), AppError> {
        let classroom = self
            .classroom_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Classroom not found", json!({ "id": id })))?;

        let urls = self.url_repository.list_for_classroom(id).await?;

        Ok((classroom, urls))
    }

    /// Deletes a classroom; its URL entries are cascade-deleted by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no classroom has the given id.
    pub async fn delete_classroom(&self, id: i64) -> Result<(), AppError> {
        if self.classroom_repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Classroom not found",
                json!({ "id": id }),
            ))
        }
    }

    /// Validates, normalizes, and attaches a whitelist URL to a classroom.
    ///
    /// The stored value is the normalized form, so `"example.com"` and
    /// `"https://EXAMPLE.COM"` are the same entry for duplicate purposes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank, fails
    /// validation, or its normalized form exceeds 2048 characters.
    /// Returns [`AppError::NotFound`] if the classroom does not exist.
    /// Returns [`AppError::Conflict`] if the classroom already contains the
    /// normalized URL, including when a concurrent insert wins the race and
    /// the unique constraint rejects this write.
    pub async fn add_url(&self, classroom_id: i64, url: String) -> Result<ClassroomUrl, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request("URL cannot be empty", json!({})));
        }

        if !is_valid(&url) {
            return Err(AppError::bad_request(
                "Invalid URL format. Please provide a valid domain (e.g., example.com)",
                json!({ "url": url }),
            ));
        }

        let normalized_url = normalize(&url);

        if normalized_url.chars().count() > MAX_URL_LEN {
            return Err(AppError::bad_request(
                "URL cannot exceed 2048 characters",
                json!({ "max_length": MAX_URL_LEN }),
            ));
        }

        if self
            .classroom_repository
            .find_by_id(classroom_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "Classroom not found",
                json!({ "id": classroom_id }),
            ));
        }

        if self
            .url_repository
            .find_by_classroom_and_url(classroom_id, &normalized_url)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "This URL already exists in the classroom",
                json!({ "url": normalized_url }),
            ));
        }

        self.url_repository
            .create(NewClassroomUrl::whitelist(classroom_id, normalized_url))
            .await
    }
}
