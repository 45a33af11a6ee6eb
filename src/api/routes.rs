//! API route configuration.

use crate::api::handlers::{
    add_classroom_url_handler, classroom_detail_handler, classroom_list_handler,
    create_classroom_handler, create_saved_url_handler, delete_classroom_handler, health_handler,
    saved_url_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /classrooms`            - List classrooms with URL counts
/// - `POST   /classrooms`            - Create a classroom
/// - `GET    /classrooms/{id}`       - Classroom detail with all URLs
/// - `DELETE /classrooms/{id}`       - Delete a classroom (cascades to URLs)
/// - `POST   /classrooms/{id}/urls`  - Attach a whitelist URL
/// - `GET    /urls`                  - List saved dashboard URLs
/// - `POST   /urls`                  - Save a raw URL
/// - `GET    /health`                - Component health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/classrooms",
            get(classroom_list_handler).post(create_classroom_handler),
        )
        .route(
            "/classrooms/{id}",
            get(classroom_detail_handler).delete(delete_classroom_handler),
        )
        .route("/classrooms/{id}/urls", post(add_classroom_url_handler))
        .route(
            "/urls",
            get(saved_url_list_handler).post(create_saved_url_handler),
        )
        .route("/health", get(health_handler))
}
