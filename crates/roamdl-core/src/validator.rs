//! HTTP(S) URL shape checks for extracted image references.

use crate::error::RunError;
use regex::{Regex, RegexBuilder};

/// Scheme, authority (domain labels, `localhost`, or dotted IPv4), optional
/// port, optional path/query.
const URL_PATTERN: &str = r"^https?://(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,6}\.?|[a-z0-9-]{2,}\.?)|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$";

pub struct UrlValidator {
    pattern: Regex,
}

impl UrlValidator {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(URL_PATTERN)
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    /// True if `candidate` parses with an http(s) scheme and a host, and
    /// matches the URL shape pattern.
    pub fn is_valid(&self, candidate: &str) -> bool {
        let parsed = match url::Url::parse(candidate) {
            Ok(u) => u,
            Err(_) => return false,
        };
        let scheme_ok = matches!(parsed.scheme(), "http" | "https");
        let host_ok = parsed.host_str().is_some_and(|h| !h.is_empty());
        scheme_ok && host_ok && self.pattern.is_match(candidate)
    }

    pub fn validate(&self, candidate: &str) -> Result<(), RunError> {
        if self.is_valid(candidate) {
            Ok(())
        } else {
            Err(RunError::InvalidUrl {
                url: candidate.to_string(),
            })
        }
    }

    /// Checks every URL in order and stops at the first invalid one.
    pub fn validate_all<S: AsRef<str>>(&self, urls: &[S]) -> Result<(), RunError> {
        for url in urls {
            self.validate(url.as_ref())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v() -> UrlValidator {
        UrlValidator::new().unwrap()
    }

    #[test]
    fn accepts_storage_urls() {
        assert!(v().is_valid(
            "https://firebasestorage.googleapis.com/v0/b/firescript-577a2.appspot.com/o/imgs%2Fapp%2Fa.png?alt=media&token=0f1e"
        ));
        assert!(v().is_valid("HTTPS://FIREBASESTORAGE.GOOGLEAPIS.COM/x.png"));
    }

    #[test]
    fn accepts_localhost_ipv4_and_ports() {
        assert!(v().is_valid("http://localhost:8080/img"));
        assert!(v().is_valid("http://127.0.0.1:34567/firebasestorage/1"));
        assert!(v().is_valid("http://example.com"));
        assert!(v().is_valid("http://example.com/"));
    }

    #[test]
    fn rejects_missing_scheme_or_host() {
        assert!(!v().is_valid("firebasestorage.googleapis.com/a.png"));
        assert!(!v().is_valid("https:///a.png"));
        assert!(!v().is_valid("ftp://example.com/a.png"));
        assert!(!v().is_valid(""));
    }

    #[test]
    fn rejects_whitespace_and_bad_labels() {
        assert!(!v().is_valid("https://exa mple.com/a.png"));
        assert!(!v().is_valid("https://example.com/a b.png"));
        assert!(!v().is_valid("https://-bad-.com/a.png"));
    }

    #[test]
    fn validate_all_reports_first_offender() {
        let urls = [
            "https://firebasestorage.googleapis.com/a.png",
            "not a url",
            "also bad",
        ];
        match v().validate_all(&urls) {
            Err(RunError::InvalidUrl { url }) => assert_eq!(url, "not a url"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn validate_all_empty_ok() {
        let urls: [&str; 0] = [];
        assert!(v().validate_all(&urls).is_ok());
    }
}
