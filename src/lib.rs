// src/lib.rs

//! pdfcrawl Library
//!
//! Discovers PDF documents reachable from a starting web page by following
//! same-site links to a bounded depth.

pub mod error;
pub mod fetch;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
