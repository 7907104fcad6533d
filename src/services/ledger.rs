// src/services/ledger.rs

//! Visit bookkeeping for a single crawl run.

use std::collections::HashSet;

use url::Url;

/// Set of URLs already scheduled or visited during one crawl run.
///
/// A URL is inserted before its fetch is dispatched, so a page reachable via
/// several parent pages is fetched at most once. Owned by exactly one run;
/// dropped with it.
#[derive(Debug, Default)]
pub struct VisitLedger {
    seen: HashSet<Url>,
}

impl VisitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a URL. Returns `false` if it was already known, in which case
    /// the caller must not dispatch another fetch for it.
    pub fn insert(&mut self, url: &Url) -> bool {
        self.seen.insert(url.clone())
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_first_sight_only() {
        let mut ledger = VisitLedger::new();
        let url = Url::parse("https://site.test/a.html").unwrap();

        assert!(ledger.insert(&url));
        assert!(!ledger.insert(&url));
        assert!(ledger.contains(&url));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_distinct_urls_are_distinct_entries() {
        let mut ledger = VisitLedger::new();
        assert!(ledger.insert(&Url::parse("https://site.test/a.html").unwrap()));
        assert!(ledger.insert(&Url::parse("https://site.test/b.html").unwrap()));
        assert_eq!(ledger.len(), 2);
    }
}
