// src/models/mod.rs

//! Domain models for the crawler application.

mod config;
mod crawl;

// Re-export all public types
pub use config::{Config, CrawlerConfig, StorageConfig};
pub use crawl::{
    Classification, CrawlOutcome, CrawlRequest, CrawlStats, CrawlWarning, FetchStrategy, Link,
    ScopeReason,
};
