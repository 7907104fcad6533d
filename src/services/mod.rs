// src/services/mod.rs

//! Crawl services.
//!
//! - `LinkExtractor`: pull anchor targets out of page markup
//! - `ScopePolicy`: decide artifact / followable / out-of-scope per link
//! - `VisitLedger`: at-most-once bookkeeping for fetched URLs
//! - `TraversalEngine`: the depth-bounded walk tying them together

mod extractor;
mod ledger;
mod scope;
mod traversal;

pub use extractor::LinkExtractor;
pub use ledger::VisitLedger;
pub use scope::ScopePolicy;
pub use traversal::TraversalEngine;
