//! Business logic services orchestrating domain operations.
//!
//! - [`ClassroomService`] - Classroom lifecycle and whitelist URL attachment
//! - [`SavedUrlService`] - Standalone saved-URL dashboard

pub mod classroom_service;
pub mod saved_url_service;

pub use classroom_service::ClassroomService;
pub use saved_url_service::SavedUrlService;
