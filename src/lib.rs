//! Docsweep: a polite documentation-site crawler
//!
//! This crate implements a breadth-first crawler for documentation websites.
//! It discovers in-domain links, filters them by URL-pattern rules, optionally
//! renders JavaScript-driven pages in headless Chromium, and writes the
//! collected pages as one ordered JSON collection.

pub mod config;
pub mod crawler;
pub mod output;
pub mod record;
pub mod url;

use thiserror::Error;

/// Main error type for docsweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors, all fatal before a crawl starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown preset: '{0}' (expected one of: gemini, anthropic)")]
    UnknownPreset(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid path pattern: {0}")]
    InvalidPattern(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Per-page fetch failures
///
/// These are recovered locally by the scheduler: the offending URL is
/// skipped, stays marked visited, and the crawl continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Render failure for {url}: {message}")]
    Render { url: String, message: String },
}

/// Document store failures (cannot persist or load the collection)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for docsweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlConfig, FetchMode};
pub use record::{DocumentCollection, PageRecord};
pub use crate::url::{canonicalize, same_origin};
