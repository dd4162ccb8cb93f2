//! URL eligibility filtering
//!
//! A discovered URL is crawled only if it stays on the configured origin,
//! its path matches the configured pattern, and it has not been seen
//! before. Eligibility is a strict boolean AND of those three checks; there
//! is no scoring.

use crate::config::CrawlConfig;
use crate::url::{canonicalize, same_origin};
use std::collections::HashSet;
use url::Url;

/// Decides whether a discovered URL is eligible for crawling
///
/// The three conditions, evaluated in order:
///
/// 1. Scheme, host, and port equal the configured base URL (no subdomain
///    or cross-domain crawling)
/// 2. The URL's path matches `path_pattern`; a missing pattern matches
///    every path. The pattern sees the path as resolved, before
///    trailing-slash normalization, so anchored patterns behave the way
///    they read.
/// 3. The canonical form of the URL is not already in `visited`
///
/// # Arguments
///
/// * `url` - The resolved absolute URL of the discovered link
/// * `config` - The crawl configuration
/// * `visited` - Canonical URLs already fetched or enqueued this run
pub fn is_eligible(url: &Url, config: &CrawlConfig, visited: &HashSet<String>) -> bool {
    if !same_origin(url, &config.base_url) {
        return false;
    }

    if let Some(pattern) = &config.path_pattern {
        if !pattern.is_match(url.path()) {
            return false;
        }
    }

    let canonical = canonicalize(url.clone());
    !visited.contains(canonical.as_str())
}
