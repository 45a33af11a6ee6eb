//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ClassroomRepository`] - Classroom CRUD operations
//! - [`ClassroomUrlRepository`] - Whitelist URL entries per classroom
//! - [`SavedUrlRepository`] - Saved dashboard URLs

pub mod classroom_repository;
pub mod classroom_url_repository;
pub mod saved_url_repository;

pub use classroom_repository::ClassroomRepository;
pub use classroom_url_repository::ClassroomUrlRepository;
pub use saved_url_repository::SavedUrlRepository;

#[cfg(test)]
pub use classroom_repository::MockClassroomRepository;
#[cfg(test)]
pub use classroom_url_repository::MockClassroomUrlRepository;
#[cfg(test)]
pub use saved_url_repository::MockSavedUrlRepository;
