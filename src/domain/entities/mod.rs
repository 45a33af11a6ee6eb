//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Classroom`] - A named grouping of whitelist URLs
//! - [`ClassroomUrl`] - A normalized URL entry owned by a classroom
//! - [`SavedUrl`] - A raw URL saved through the dashboard API
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewClassroom`, `NewClassroomUrl`, `NewSavedUrl`. Projections used only
//! for reads (such as [`ClassroomSummary`]) live beside their entity.

pub mod classroom;
pub mod classroom_url;
pub mod saved_url;

pub use classroom::{Classroom, ClassroomSummary, NewClassroom};
pub use classroom_url::{ClassroomUrl, NewClassroomUrl, URL_TYPE_WHITELIST};
pub use saved_url::{NewSavedUrl, SavedUrl};
