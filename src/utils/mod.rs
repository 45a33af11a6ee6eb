//! Utility functions shared across the application.
//!
//! - [`url_validator`] - URL normalization, validation, and domain extraction

pub mod url_validator;
