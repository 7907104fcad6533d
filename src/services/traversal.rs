// src/services/traversal.rs

//! Depth-bounded recursive traversal.
//!
//! The engine walks the link graph depth-first: a page is fully fetched and
//! expanded before its sibling links are looked at, so artifacts come out in
//! a deterministic order (document order within a page, depth-first across
//! pages). Two independent protections guarantee termination: the depth
//! budget bounds how far any branch can go, and the visit ledger stops a URL
//! reached over several paths from being fetched more than once.

use chrono::Utc;
use futures::future::BoxFuture;
use url::Url;

use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::models::{
    Classification, CrawlOutcome, CrawlRequest, CrawlStats, CrawlWarning,
};
use crate::services::{LinkExtractor, ScopePolicy, VisitLedger};

/// Orchestrates fetcher, extractor, scope policy and ledger for one crawl.
pub struct TraversalEngine<'a> {
    fetcher: &'a dyn PageFetcher,
    extractor: LinkExtractor,
}

impl<'a> TraversalEngine<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher) -> Self {
        Self {
            fetcher,
            extractor: LinkExtractor::new(),
        }
    }

    /// Run the walk described by `request`.
    ///
    /// Fetch failures are contained at the page that failed and reported in
    /// the outcome's warnings; they never abort the crawl. The only error
    /// here is a root URL the scope cannot be derived from.
    pub async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlOutcome> {
        let scope = ScopePolicy::for_root(&request.root_url)?;
        let started_at = Utc::now();

        let mut walk = Walk {
            fetcher: self.fetcher,
            extractor: &self.extractor,
            scope,
            ledger: VisitLedger::new(),
            artifacts: Vec::new(),
            warnings: Vec::new(),
            pages_fetched: 0,
        };

        walk.visit(request.root_url.clone(), request.max_depth).await;

        let stats = CrawlStats {
            started_at,
            finished_at: Utc::now(),
            pages_fetched: walk.pages_fetched,
            artifact_count: walk.artifacts.len(),
            warning_count: walk.warnings.len(),
        };

        Ok(CrawlOutcome {
            artifacts: walk.artifacts,
            warnings: walk.warnings,
            stats,
        })
    }
}

/// Mutable state of one crawl run. Owned by the run, dropped with it.
struct Walk<'a> {
    fetcher: &'a dyn PageFetcher,
    extractor: &'a LinkExtractor,
    scope: ScopePolicy,
    ledger: VisitLedger,
    artifacts: Vec<Url>,
    warnings: Vec<CrawlWarning>,
    pages_fetched: usize,
}

impl Walk<'_> {
    /// Visit one page node.
    ///
    /// `remaining` is the link-hop budget measured from the root; artifacts
    /// on this page are always collected, while followable links are only
    /// expanded when more than one hop of budget is left. Recursion is
    /// boxed because the future type would otherwise be infinite.
    fn visit(&mut self, url: Url, remaining: u32) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            // Insert before dispatching the fetch so a re-entrant path to
            // the same URL sees it as taken.
            if !self.ledger.insert(&url) {
                log::debug!("skipping {url}: already visited");
                return;
            }

            log::info!("scraping {url} (budget {remaining})");
            let markup = match self.fetcher.fetch(&url).await {
                Ok(markup) => markup,
                Err(cause) => {
                    log::warn!("failed to fetch {url}: {cause}");
                    self.warnings.push(CrawlWarning { url, cause });
                    return;
                }
            };
            self.pages_fetched += 1;

            for link in self.extractor.extract(&markup, &url) {
                match self.scope.classify(&link) {
                    Classification::Artifact(target) => {
                        if self.ledger.insert(&target) {
                            log::info!("found PDF: {target}");
                            self.artifacts.push(target);
                        }
                    }
                    Classification::FollowablePage(target) => {
                        if remaining > 1 {
                            self.visit(target, remaining - 1).await;
                        } else {
                            log::debug!("not expanding {target}: depth budget exhausted");
                        }
                    }
                    Classification::OutOfScope(reason) => {
                        log::debug!("dropping {} ({reason})", link.resolved);
                    }
                }
            }
        })
    }
}
