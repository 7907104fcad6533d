// src/fetch/mod.rs

//! Page fetching strategies.
//!
//! The traversal engine is generic over one capability: turn a URL into page
//! markup. Two backends implement it, a plain HTTP fetch and a headless
//! browser fetch for pages that assemble their content client-side.

mod rendered;
mod static_http;

use async_trait::async_trait;
use url::Url;

pub use rendered::RenderedFetcher;
pub use static_http::{StaticFetcher, create_client};

use crate::error::{FetchError, Result};
use crate::models::{CrawlerConfig, FetchStrategy};

/// Capability to fetch the markup of a single page.
///
/// Implementations perform network I/O but never mutate shared state; a
/// failed fetch must leave the backend usable for the next page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> std::result::Result<String, FetchError>;
}

/// Build the fetcher for the selected strategy.
///
/// For the rendered strategy this launches the browser session up front;
/// failure to acquire it is fatal to the whole crawl, there is no fallback
/// to the static strategy.
pub fn build(strategy: FetchStrategy, config: &CrawlerConfig) -> Result<Box<dyn PageFetcher>> {
    match strategy {
        FetchStrategy::Static => Ok(Box::new(StaticFetcher::new(config)?)),
        FetchStrategy::Rendered => Ok(Box::new(RenderedFetcher::launch(config)?)),
    }
}
