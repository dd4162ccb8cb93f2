//! Pre-authored crawl configurations for known documentation sites
//!
//! A preset is a complete [`CrawlConfig`]; explicit CLI flags may still
//! override individual fields after resolution.

use crate::config::types::{CrawlConfig, FetchMode};
use crate::ConfigError;
use regex::Regex;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Names accepted by [`resolve`]
pub const PRESET_NAMES: &[&str] = &["gemini", "anthropic"];

/// Resolves a preset name to a full crawl configuration
///
/// # Arguments
///
/// * `name` - One of [`PRESET_NAMES`]
///
/// # Returns
///
/// * `Ok(CrawlConfig)` - The pre-authored configuration
/// * `Err(ConfigError::UnknownPreset)` - The name is not in the table
pub fn resolve(name: &str) -> Result<CrawlConfig, ConfigError> {
    match name {
        "gemini" => gemini(),
        "anthropic" => anthropic(),
        other => Err(ConfigError::UnknownPreset(other.to_string())),
    }
}

fn parse_base(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", url, e)))
}

fn parse_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(e.to_string()))
}

/// Google Gemini API documentation
fn gemini() -> Result<CrawlConfig, ConfigError> {
    Ok(CrawlConfig {
        base_url: parse_base("https://ai.google.dev")?,
        start_path: "/gemini-api/docs/".to_string(),
        additional_paths: vec![
            "/gemini-api/docs/models".to_string(),
            "/gemini-api/docs/quickstart".to_string(),
        ],
        selector: "main, article, .devsite-article-body, .devsite-article-inner".to_string(),
        path_pattern: Some(parse_pattern(r"^/gemini-api/docs/.*")?),
        delay: Duration::from_millis(500),
        max_pages: 200,
        fetch_mode: FetchMode::Static,
        output_path: PathBuf::from("document/gemini_docs.json"),
        debug: false,
    })
}

/// Anthropic API documentation (JavaScript-rendered, so fetched in Chromium)
fn anthropic() -> Result<CrawlConfig, ConfigError> {
    Ok(CrawlConfig {
        base_url: parse_base("https://docs.anthropic.com")?,
        start_path: "/en/api/getting-started".to_string(),
        additional_paths: vec![
            "/en/api/messages".to_string(),
            "/en/api/rate-limits".to_string(),
            "/en/api/system-prompts".to_string(),
            "/en/api/human-in-the-loop".to_string(),
        ],
        selector: ".docs-content, main, article, .content-wrapper, .content".to_string(),
        path_pattern: Some(parse_pattern(r"^/en/api/.*")?),
        delay: Duration::from_secs(1),
        max_pages: 200,
        fetch_mode: FetchMode::Rendered {
            wait: Duration::from_secs(8),
        },
        output_path: PathBuf::from("document/anthropic_docs.json"),
        debug: false,
    })
}
