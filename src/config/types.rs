use regex::Regex;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// How page content is retrieved
///
/// The static/rendered duality is dispatched once per fetch; there are no
/// parallel code paths above the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// A single plain GET request
    Static,

    /// Load the page in headless Chromium and wait a fixed duration for
    /// dynamic content to settle before serializing the DOM
    Rendered { wait: Duration },
}

impl FetchMode {
    /// Returns true for the rendered variant
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Immutable configuration for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Scheme + host (+ optional port) the crawl is confined to
    pub base_url: Url,

    /// Path of the first page to fetch
    pub start_path: String,

    /// Further seed paths, enqueued after the start path in order
    pub additional_paths: Vec<String>,

    /// Comma-separated CSS selector candidates for the content region,
    /// tried in order; the first match wins
    pub selector: String,

    /// Regular expression over URL paths; `None` matches every path
    pub path_pattern: Option<Regex>,

    /// Pause between two consecutive fetches
    pub delay: Duration,

    /// Ceiling on the number of pages accepted into the result
    pub max_pages: usize,

    /// Static or rendered fetching
    pub fetch_mode: FetchMode,

    /// Where the document collection is written
    pub output_path: PathBuf,

    /// Verbose logging; does not affect crawl semantics
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_mode_is_rendered() {
        assert!(!FetchMode::Static.is_rendered());
        assert!(FetchMode::Rendered {
            wait: Duration::from_secs(5)
        }
        .is_rendered());
    }
}
