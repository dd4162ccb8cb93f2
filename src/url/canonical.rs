use url::Url;

/// Canonicalizes a URL for use as a dedup identity key
///
/// # Canonicalization Steps
///
/// 1. Remove the fragment (everything after `#`) — fragments are client-side
///    navigation markers, not distinct HTTP resources
/// 2. Remove the trailing slash from the path, except for the root `/`
///
/// Scheme, host, query and the rest of the path are left untouched; the
/// crawler never rewrites URLs beyond what identity requires.
///
/// # Examples
///
/// ```
/// use docsweep::url::canonicalize;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/docs/#intro").unwrap();
/// assert_eq!(canonicalize(url).as_str(), "https://example.com/docs");
/// ```
pub fn canonicalize(mut url: Url) -> Url {
    url.set_fragment(None);

    let path = url.path();
    if path.len() > 1 && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            url.set_path("/");
        } else {
            url.set_path(&trimmed);
        }
    }

    url
}

/// Returns true if two URLs share a scheme, host, and port
///
/// The port participates because the authority would otherwise let a crawl
/// configured for `host:8080` wander onto `host:9090`.
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_strip_fragment() {
        let result = canonicalize(url("https://example.com/page#section"));
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_strip_trailing_slash() {
        let result = canonicalize(url("https://example.com/page/"));
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_strip_repeated_trailing_slashes() {
        let result = canonicalize(url("https://example.com/page///"));
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_keep_root_slash() {
        let result = canonicalize(url("https://example.com/"));
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_fragment_and_slash_together() {
        let result = canonicalize(url("https://example.com/docs/#intro"));
        assert_eq!(result.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_query_is_preserved() {
        let result = canonicalize(url("https://example.com/page?a=1#frag"));
        assert_eq!(result.as_str(), "https://example.com/page?a=1");
    }

    #[test]
    fn test_idempotent() {
        let once = canonicalize(url("https://example.com/docs/#x"));
        let twice = canonicalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_same_origin_matches() {
        assert!(same_origin(
            &url("https://example.com/a"),
            &url("https://example.com/b?q=1")
        ));
    }

    #[test]
    fn test_same_origin_rejects_other_host() {
        assert!(!same_origin(
            &url("https://example.com/a"),
            &url("https://other.com/a")
        ));
    }

    #[test]
    fn test_same_origin_rejects_subdomain() {
        assert!(!same_origin(
            &url("https://example.com/a"),
            &url("https://docs.example.com/a")
        ));
    }

    #[test]
    fn test_same_origin_rejects_other_scheme() {
        assert!(!same_origin(
            &url("https://example.com/a"),
            &url("http://example.com/a")
        ));
    }

    #[test]
    fn test_same_origin_rejects_other_port() {
        assert!(!same_origin(
            &url("http://127.0.0.1:8080/a"),
            &url("http://127.0.0.1:9090/a")
        ));
    }

    #[test]
    fn test_same_origin_default_port_equivalence() {
        assert!(same_origin(
            &url("https://example.com/a"),
            &url("https://example.com:443/a")
        ));
    }
}
