//! Handler for attaching whitelist URLs to classrooms.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::classroom_url::{AddUrlRequest, ClassroomUrlItem};
use crate::error::AppError;
use crate::state::AppState;

/// Validates, normalizes, and attaches a URL to a classroom.
///
/// # Endpoint
///
/// `POST /api/classrooms/{id}/urls`
///
/// The stored URL is the normalized form (trimmed, lowercased, `https://`
/// prepended when no scheme is present), so duplicate detection treats
/// `"example.com"` and `"https://EXAMPLE.COM"` as the same entry.
///
/// # Errors
///
/// Returns 400 if the URL is blank or not a valid domain-style address.
/// Returns 404 if the classroom does not exist.
/// Returns 409 if the classroom already contains the normalized URL.
pub async fn add_classroom_url_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<AddUrlRequest>,
) -> Result<(StatusCode, Json<ClassroomUrlItem>), AppError> {
    payload.validate()?;

    let entry = state.classroom_service.add_url(id, payload.url).await?;

    Ok((StatusCode::CREATED, Json(ClassroomUrlItem::from(entry))))
}
