// src/storage/mod.rs

//! Persistence for discovered artifacts.

mod local;

pub use local::{LocalStore, SaveFailure, SaveSummary, export_url_list};
