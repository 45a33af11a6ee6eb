//! Handlers for classroom management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::classroom::{
    ClassroomDetailResponse, ClassroomListItem, CreateClassroomRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new classroom.
///
/// # Endpoint
///
/// `POST /api/classrooms`
///
/// # Errors
///
/// Returns 400 if the name is blank or exceeds 100 characters, or the
/// description exceeds 500 characters.
pub async fn create_classroom_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateClassroomRequest>,
) -> Result<(StatusCode, Json<ClassroomDetailResponse>), AppError> {
    payload.validate()?;

    let classroom = state
        .classroom_service
        .create_classroom(payload.name, payload.description)
        .await?;

    // A freshly created classroom owns no URLs yet.
    let response = ClassroomDetailResponse::from_parts(classroom, Vec::new());

    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists all classrooms with URL counts, newest first.
///
/// # Endpoint
///
/// `GET /api/classrooms`
///
/// Returns a bare JSON array for frontend compatibility.
pub async fn classroom_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassroomListItem>>, AppError> {
    let summaries = state.classroom_service.list_classrooms().await?;

    Ok(Json(
        summaries.into_iter().map(ClassroomListItem::from).collect(),
    ))
}

/// Returns a classroom with all of its whitelist URLs.
///
/// # Endpoint
///
/// `GET /api/classrooms/{id}`
///
/// # Errors
///
/// Returns 404 if the classroom does not exist.
pub async fn classroom_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ClassroomDetailResponse>, AppError> {
    let (classroom, urls) = state.classroom_service.get_classroom(id).await?;

    Ok(Json(ClassroomDetailResponse::from_parts(classroom, urls)))
}

/// Deletes a classroom and, by cascade, its URL entries.
///
/// # Endpoint
///
/// `DELETE /api/classrooms/{id}`
///
/// # Errors
///
/// Returns 404 if the classroom does not exist.
pub async fn delete_classroom_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.classroom_service.delete_classroom(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
