// src/services/scope.rs

//! Link classification against the crawl scope.

use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Classification, Link, ScopeReason};
use crate::utils::base_domain;

/// Classifies links relative to the crawl's root domain.
///
/// The base domain is derived from the root URL once, when the policy is
/// built, not recomputed against whichever page a link was found on.
/// Classification is a pure function of the link.
#[derive(Debug, Clone)]
pub struct ScopePolicy {
    base_domain: String,
}

const ARTIFACT_SUFFIXES: [&str; 1] = [".pdf"];
const PAGE_SUFFIXES: [&str; 2] = [".htm", ".html"];

impl ScopePolicy {
    /// Derive the scope from the crawl root.
    pub fn for_root(root_url: &Url) -> Result<Self> {
        let base_domain = base_domain(root_url)
            .ok_or_else(|| AppError::validation(format!("root URL {root_url} has no host")))?;
        Ok(Self { base_domain })
    }

    /// First matching rule wins:
    ///
    /// 1. `.pdf` path → artifact, even on a foreign domain;
    /// 2. foreign base domain → out of scope;
    /// 3. path without an `.htm`/`.html` suffix → out of scope. This also
    ///    excludes extensionless page routes; kept that way deliberately;
    /// 4. otherwise a followable page.
    pub fn classify(&self, link: &Link) -> Classification {
        let url = &link.resolved;

        if has_suffix(url.path(), &ARTIFACT_SUFFIXES) {
            return Classification::Artifact(url.clone());
        }

        if base_domain(url).as_deref() != Some(self.base_domain.as_str()) {
            return Classification::OutOfScope(ScopeReason::ExternalDomain);
        }

        if !has_suffix(url.path(), &PAGE_SUFFIXES) {
            return Classification::OutOfScope(ScopeReason::NonPageResource);
        }

        Classification::FollowablePage(url.clone())
    }
}

fn has_suffix(path: &str, suffixes: &[&str]) -> bool {
    let path = path.to_ascii_lowercase();
    suffixes.iter().any(|suffix| path.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> ScopePolicy {
        ScopePolicy::for_root(&Url::parse("https://a.example.com/start.html").unwrap()).unwrap()
    }

    fn link(s: &str) -> Link {
        Link {
            raw_href: s.to_string(),
            resolved: Url::parse(s).unwrap(),
        }
    }

    #[test]
    fn test_same_domain_pdf_is_artifact() {
        let c = policy().classify(&link("https://a.example.com/doc.pdf"));
        assert!(matches!(c, Classification::Artifact(_)));
    }

    #[test]
    fn test_artifact_rule_precedes_domain_rule() {
        // An off-domain PDF is still collected
        let c = policy().classify(&link("https://b.other.org/doc.pdf"));
        assert!(matches!(c, Classification::Artifact(_)));
    }

    #[test]
    fn test_artifact_suffix_is_case_insensitive() {
        let c = policy().classify(&link("https://a.example.com/DOC.PDF"));
        assert!(matches!(c, Classification::Artifact(_)));
    }

    #[test]
    fn test_external_page_is_out_of_scope() {
        let c = policy().classify(&link("https://b.other.org/x.html"));
        assert_eq!(c, Classification::OutOfScope(ScopeReason::ExternalDomain));
    }

    #[test]
    fn test_sibling_subdomain_is_in_scope() {
        let c = policy().classify(&link("https://b.example.com/x.html"));
        assert!(matches!(c, Classification::FollowablePage(_)));
    }

    #[test]
    fn test_non_page_resource_is_out_of_scope() {
        let p = policy();
        for target in [
            "https://a.example.com/image.png",
            "https://a.example.com/archive.zip",
            // Extensionless routes are excluded by the suffix rule
            "https://a.example.com/about",
            "https://a.example.com/search?q=x",
        ] {
            assert_eq!(
                p.classify(&link(target)),
                Classification::OutOfScope(ScopeReason::NonPageResource),
                "{target}"
            );
        }
    }

    #[test]
    fn test_page_suffixes_are_case_insensitive() {
        let c = policy().classify(&link("https://a.example.com/INDEX.HTML"));
        assert!(matches!(c, Classification::FollowablePage(_)));
        let c = policy().classify(&link("https://a.example.com/old.HTM"));
        assert!(matches!(c, Classification::FollowablePage(_)));
    }

    #[test]
    fn test_hostless_scheme_is_out_of_scope() {
        let c = policy().classify(&link("mailto:someone@example.com"));
        assert_eq!(c, Classification::OutOfScope(ScopeReason::ExternalDomain));
    }

    #[test]
    fn test_classify_is_pure() {
        let p = policy();
        let l = link("https://b.example.com/x.html");
        assert_eq!(p.classify(&l), p.classify(&l));
    }
}
