// src/models/crawl.rs

//! Crawl domain types: request, links, classification, outcome.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::error::FetchError;

/// Parameters of a single crawl run. Immutable once created.
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// Page the walk starts from
    pub root_url: Url,

    /// How many link hops from the root are explored. The root page is
    /// always fetched; its followable links are expanded only while more
    /// than one hop of budget remains.
    pub max_depth: u32,
}

impl CrawlRequest {
    pub fn new(root_url: Url, max_depth: u32) -> Self {
        Self {
            root_url,
            max_depth,
        }
    }
}

/// Which page-fetching backend a crawl uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FetchStrategy {
    /// One plain HTTP round trip per page
    Static,
    /// Load the page in a headless browser and wait for dynamic content
    Rendered,
}

/// A hyperlink found on a page, resolved against the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The href attribute as written in the markup
    pub raw_href: String,
    /// Absolute form, fragment stripped
    pub resolved: Url,
}

/// What the scope policy decided about a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A PDF document; collected, never expanded
    Artifact(Url),
    /// A same-site HTML page eligible for expansion
    FollowablePage(Url),
    /// Dropped without a fetch
    OutOfScope(ScopeReason),
}

/// Why a link fell outside the crawl scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeReason {
    /// Host belongs to a different base domain than the root
    ExternalDomain,
    /// Path does not end in an HTML page suffix
    NonPageResource,
}

impl fmt::Display for ScopeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExternalDomain => write!(f, "external domain"),
            Self::NonPageResource => write!(f, "non-page resource"),
        }
    }
}

/// A page that failed to fetch during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlWarning {
    pub url: Url,
    pub cause: FetchError,
}

/// Everything a crawl run produced.
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Artifact URLs in discovery order: document order within a page,
    /// depth-first across pages
    pub artifacts: Vec<Url>,

    /// Pages that failed to fetch, with the cause of each failure
    pub warnings: Vec<CrawlWarning>,

    pub stats: CrawlStats,
}

/// Summary figures for a crawl run.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub pages_fetched: usize,
    pub artifact_count: usize,
    pub warning_count: usize,
}
