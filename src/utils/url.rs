// src/utils/url.rs

//! URL inspection utilities.

use url::{Host, Url};

/// Registrable base domain of a URL: the last two labels of the hostname.
///
/// `www.example.com` and `example.com` share the base domain `example.com`
/// and count as the same site for scoping purposes. IP hosts are returned
/// whole. Returns `None` for URLs without a host (`mailto:`, `javascript:`).
///
/// # Examples
/// ```
/// use pdfcrawl::utils::base_domain;
/// use url::Url;
///
/// let url = Url::parse("https://www.example.com/a").unwrap();
/// assert_eq!(base_domain(&url), Some("example.com".to_string()));
/// ```
pub fn base_domain(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(domain) => {
            let host = domain.to_ascii_lowercase();
            let cut = host
                .rmatch_indices('.')
                .nth(1)
                .map(|(idx, _)| idx + 1)
                .unwrap_or(0);
            Some(host[cut..].to_string())
        }
        ip => Some(ip.to_string()),
    }
}

/// File name for a downloaded artifact: the URL's final path segment.
pub fn file_name_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "download.pdf".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_base_domain_strips_subdomains() {
        assert_eq!(
            base_domain(&url("https://docs.dept.example.com/x")),
            Some("example.com".to_string())
        );
        assert_eq!(
            base_domain(&url("https://example.com/x")),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_base_domain_is_case_insensitive() {
        assert_eq!(
            base_domain(&url("https://WWW.Example.COM/x")),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_base_domain_single_label_host() {
        assert_eq!(
            base_domain(&url("http://localhost:8080/x")),
            Some("localhost".to_string())
        );
    }

    #[test]
    fn test_base_domain_ip_host() {
        assert_eq!(
            base_domain(&url("http://192.168.0.1/x")),
            Some("192.168.0.1".to_string())
        );
    }

    #[test]
    fn test_base_domain_no_host() {
        assert_eq!(base_domain(&url("mailto:someone@example.com")), None);
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url(&url("https://site.test/a/report.pdf")),
            "report.pdf"
        );
        assert_eq!(file_name_from_url(&url("https://site.test/")), "download.pdf");
    }
}
