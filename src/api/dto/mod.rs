//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Response field names are camelCase for frontend
//! compatibility.

pub mod classroom;
pub mod classroom_url;
pub mod health;
pub mod saved_url;
