//! Handlers for the standalone saved-URL dashboard endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::saved_url::{CreateSavedUrlRequest, SavedUrlItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all saved URLs.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn saved_url_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedUrlItem>>, AppError> {
    let urls = state.saved_url_service.list_urls().await?;

    Ok(Json(urls.into_iter().map(SavedUrlItem::from).collect()))
}

/// Saves a raw URL string.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// The input is stored as-is: dashboard URLs are not validated or normalized
/// beyond a non-empty check.
///
/// # Errors
///
/// Returns 400 if the URL is blank.
pub async fn create_saved_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateSavedUrlRequest>,
) -> Result<(StatusCode, Json<SavedUrlItem>), AppError> {
    let saved = state.saved_url_service.save_url(payload.url).await?;

    Ok((StatusCode::CREATED, Json(SavedUrlItem::from(saved))))
}
