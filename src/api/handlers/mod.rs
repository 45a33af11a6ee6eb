//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod classroom_urls;
pub mod classrooms;
pub mod health;
pub mod saved_urls;

pub use classroom_urls::add_classroom_url_handler;
pub use classrooms::{
    classroom_detail_handler, classroom_list_handler, create_classroom_handler,
    delete_classroom_handler,
};
pub use health::health_handler;
pub use saved_urls::{create_saved_url_handler, saved_url_list_handler};
