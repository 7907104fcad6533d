// src/services/extractor.rs

//! Link extraction from page markup.

use scraper::{Html, Selector};
use url::Url;

use crate::models::Link;

/// Extracts anchor targets from page markup, in document order.
///
/// Pure function of its inputs: no network, no shared state. Duplicate
/// targets within one page are preserved; deduplication belongs to the
/// visit ledger, not here. Malformed markup degrades to however many
/// anchors still parse, down to zero links.
pub struct LinkExtractor {
    anchor: Selector,
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            anchor: Selector::parse("a[href]").unwrap(),
        }
    }

    /// Resolve every `<a href>` in `markup` against `base_url`.
    ///
    /// Standard relative resolution applies: relative paths, absolute paths
    /// and protocol-relative references all work. Fragments are stripped, so
    /// a fragment-only href resolves to `base_url` itself and the ledger
    /// skips it downstream. Unresolvable hrefs are dropped.
    pub fn extract(&self, markup: &str, base_url: &Url) -> Vec<Link> {
        let document = Html::parse_document(markup);
        let mut links = Vec::new();

        for element in document.select(&self.anchor) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let Ok(mut resolved) = base_url.join(href) else {
                log::debug!("unresolvable href {href:?} on {base_url}");
                continue;
            };
            resolved.set_fragment(None);
            links.push(Link {
                raw_href: href.to_string(),
                resolved,
            });
        }

        links
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(markup: &str, base: &str) -> Vec<Link> {
        let base = Url::parse(base).unwrap();
        LinkExtractor::new().extract(markup, &base)
    }

    #[test]
    fn test_extract_preserves_document_order() {
        let markup = r#"
            <p><a href="/one.html">one</a></p>
            <div><a href="/two.pdf">two</a><a href="/three.html">three</a></div>
        "#;
        let links = extract(markup, "https://site.test/index.html");
        let resolved: Vec<_> = links.iter().map(|l| l.resolved.as_str()).collect();
        assert_eq!(
            resolved,
            [
                "https://site.test/one.html",
                "https://site.test/two.pdf",
                "https://site.test/three.html",
            ]
        );
    }

    #[test]
    fn test_extract_resolves_relative_path() {
        let links = extract(
            r#"<a href="../file.pdf">f</a>"#,
            "https://site.test/dir/page.html",
        );
        assert_eq!(links[0].resolved.as_str(), "https://site.test/file.pdf");
    }

    #[test]
    fn test_extract_resolves_protocol_relative() {
        let links = extract(
            r#"<a href="//cdn.site.test/doc.pdf">d</a>"#,
            "https://site.test/page.html",
        );
        assert_eq!(links[0].resolved.as_str(), "https://cdn.site.test/doc.pdf");
    }

    #[test]
    fn test_extract_fragment_only_resolves_to_base() {
        let links = extract(r##"<a href="#section">s</a>"##, "https://site.test/page.html");
        assert_eq!(links[0].resolved.as_str(), "https://site.test/page.html");
    }

    #[test]
    fn test_extract_keeps_duplicates() {
        let markup = r#"<a href="/a.html">1</a><a href="/a.html">2</a>"#;
        let links = extract(markup, "https://site.test/index.html");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].resolved, links[1].resolved);
    }

    #[test]
    fn test_extract_skips_anchors_without_href() {
        let markup = r#"<a name="top">t</a><a href="/a.html">a</a>"#;
        let links = extract(markup, "https://site.test/index.html");
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_extract_malformed_markup_yields_what_parses() {
        let links = extract(
            "<html><body><a href='/a.html'>unclosed",
            "https://site.test/index.html",
        );
        assert_eq!(links.len(), 1);
    }
}
