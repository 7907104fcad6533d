// src/utils/mod.rs

//! Utility functions and helpers.

pub mod url;

pub use url::{base_domain, file_name_from_url};
