//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ClassroomService, SavedUrlService};
use crate::infrastructure::persistence::{
    PgClassroomRepository, PgClassroomUrlRepository, PgSavedUrlRepository,
};

/// Classroom service wired to the PostgreSQL repositories.
pub type AppClassroomService = ClassroomService<PgClassroomRepository, PgClassroomUrlRepository>;
/// Saved URL service wired to the PostgreSQL repository.
pub type AppSavedUrlService = SavedUrlService<PgSavedUrlRepository>;

/// Application state shared across handlers.
///
/// Cheap to clone: services and the pool are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub classroom_service: Arc<AppClassroomService>,
    pub saved_url_service: Arc<AppSavedUrlService>,
    /// Kept for the health check's direct connectivity probe.
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Builds the full service graph on top of a connection pool.
    pub fn new(db: Arc<PgPool>) -> Self {
        let classroom_repository = Arc::new(PgClassroomRepository::new(db.clone()));
        let url_repository = Arc::new(PgClassroomUrlRepository::new(db.clone()));
        let saved_url_repository = Arc::new(PgSavedUrlRepository::new(db.clone()));

        Self {
            classroom_service: Arc::new(ClassroomService::new(
                classroom_repository,
                url_repository,
            )),
            saved_url_service: Arc::new(SavedUrlService::new(saved_url_repository)),
            db,
        }
    }
}
