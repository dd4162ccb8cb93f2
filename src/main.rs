//! Docsweep main entry point
//!
//! Command-line interface for the documentation-site crawler. A crawl is
//! configured from a named preset, from explicit flags, or from a preset
//! with individual fields overridden by flags.

use clap::{ArgGroup, Parser};
use docsweep::config::{self, CrawlConfig, FetchMode};
use docsweep::crawler::crawl;
use docsweep::output::write_collection;
use docsweep::ConfigError;
use regex::Regex;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Docsweep: a polite documentation site crawler
///
/// Crawls a documentation website breadth-first, filters pages by URL
/// pattern, and writes the extracted pages as one ordered JSON collection.
#[derive(Parser, Debug)]
#[command(name = "docsweep")]
#[command(version)]
#[command(about = "A polite documentation site crawler", long_about = None)]
#[command(group(
    ArgGroup::new("origin")
        .required(true)
        .multiple(true)
        .args(["preset", "base_url"])
))]
struct Cli {
    /// Use a pre-authored configuration (gemini, anthropic)
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Base URL the crawl is confined to (e.g. https://ai.google.dev)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path of the first page to fetch (e.g. /gemini-api/docs/)
    #[arg(long, value_name = "PATH")]
    start_path: Option<String>,

    /// Output JSON file path
    #[arg(long = "output_file", value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Comma-separated CSS selector candidates for the content region
    /// (default: main)
    #[arg(long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Regular expression over URL paths eligible for crawling
    #[arg(long, value_name = "REGEX")]
    path_pattern: Option<String>,

    /// Delay between requests, in seconds (default: 0.5)
    #[arg(long, value_name = "SECONDS")]
    delay: Option<f64>,

    /// Maximum number of pages to crawl
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Additional seed paths to crawl
    #[arg(long, num_args = 1.., value_name = "PATH")]
    additional_paths: Option<Vec<String>>,

    /// Fetch pages with a headless browser, for JavaScript-driven sites
    #[arg(long)]
    use_selenium: bool,

    /// Seconds to wait for rendered content to settle (default: 5)
    #[arg(long, value_name = "SECONDS")]
    wait_time: Option<u64>,

    /// Verbose logging; does not affect crawl semantics
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    // Resolve configuration; any failure here exits before crawling starts
    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Crawling {} starting at {} (max {} pages)",
        config.base_url,
        config.start_path,
        config.max_pages
    );

    let output_path = config.output_path.clone();
    let collection = crawl(config).await?;

    write_collection(&collection, &output_path)?;
    tracing::info!(
        "Saved {} pages to {}",
        collection.len(),
        output_path.display()
    );

    Ok(())
}

/// Sets up the tracing subscriber
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("docsweep=debug,info")
    } else {
        EnvFilter::new("docsweep=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Builds the crawl configuration from the CLI arguments
///
/// Starts from the preset when one is named, otherwise from the explicit
/// flags (which must then include --base-url, --start-path and
/// --output_file). Explicit flags override individual preset fields.
fn build_config(cli: &Cli) -> Result<CrawlConfig, ConfigError> {
    let mut config = match &cli.preset {
        Some(name) => config::resolve(name)?,
        None => explicit_config(cli)?,
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = parse_base_url(base_url)?;
    }
    if let Some(start_path) = &cli.start_path {
        config.start_path = start_path.clone();
    }
    if let Some(output_file) = &cli.output_file {
        config.output_path = output_file.clone();
    }
    if let Some(selector) = &cli.selector {
        config.selector = selector.clone();
    }
    if let Some(pattern) = &cli.path_pattern {
        config.path_pattern = Some(parse_pattern(pattern)?);
    }
    if let Some(delay) = cli.delay {
        config.delay = parse_delay(delay)?;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_pages = max_pages;
    }
    if let Some(paths) = &cli.additional_paths {
        config.additional_paths = paths.clone();
    }

    if cli.use_selenium {
        config.fetch_mode = FetchMode::Rendered {
            wait: Duration::from_secs(cli.wait_time.unwrap_or(5)),
        };
    } else if let Some(wait_time) = cli.wait_time {
        // --wait-time alone adjusts an already-rendered preset
        if config.fetch_mode.is_rendered() {
            config.fetch_mode = FetchMode::Rendered {
                wait: Duration::from_secs(wait_time),
            };
        }
    }

    config.debug = cli.debug;

    config::validate(&config)?;
    Ok(config)
}

/// Builds a configuration purely from explicit flags
fn explicit_config(cli: &Cli) -> Result<CrawlConfig, ConfigError> {
    let base_url = cli
        .base_url
        .as_ref()
        .ok_or_else(|| ConfigError::MissingField("--base-url".to_string()))?;
    let start_path = cli
        .start_path
        .clone()
        .ok_or_else(|| ConfigError::MissingField("--start-path".to_string()))?;
    let output_path = cli
        .output_file
        .clone()
        .ok_or_else(|| ConfigError::MissingField("--output_file".to_string()))?;

    Ok(CrawlConfig {
        base_url: parse_base_url(base_url)?,
        start_path,
        additional_paths: Vec::new(),
        selector: "main".to_string(),
        path_pattern: None,
        delay: Duration::from_millis(500),
        max_pages: usize::MAX,
        fetch_mode: FetchMode::Static,
        output_path,
        debug: false,
    })
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", raw, e)))
}

fn parse_pattern(raw: &str) -> Result<Regex, ConfigError> {
    Regex::new(raw).map_err(|e| ConfigError::InvalidPattern(e.to_string()))
}

fn parse_delay(seconds: f64) -> Result<Duration, ConfigError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay must be a non-negative number of seconds, got {}",
            seconds
        )));
    }
    Ok(Duration::from_secs_f64(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("docsweep").chain(args.iter().copied()))
    }

    #[test]
    fn test_preset_alone_builds_config() {
        let cli = parse(&["--preset", "gemini"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.base_url.as_str(), "https://ai.google.dev/");
        assert_eq!(config.max_pages, 200);
    }

    #[test]
    fn test_unknown_preset_is_fatal() {
        let cli = parse(&["--preset", "nonexistent"]);
        assert!(matches!(
            build_config(&cli),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_explicit_flags_override_preset_fields() {
        let cli = parse(&["--preset", "gemini", "--max-pages", "7", "--delay", "2.0"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.max_pages, 7);
        assert_eq!(config.delay, Duration::from_secs(2));
        // Untouched preset fields survive
        assert_eq!(config.start_path, "/gemini-api/docs/");
    }

    #[test]
    fn test_explicit_config_requires_core_fields() {
        let cli = parse(&["--base-url", "https://example.com"]);
        assert!(matches!(
            build_config(&cli),
            Err(ConfigError::MissingField(_))
        ));
    }

    #[test]
    fn test_explicit_config_defaults() {
        let cli = parse(&[
            "--base-url",
            "https://example.com",
            "--start-path",
            "/docs/",
            "--output_file",
            "out.json",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.selector, "main");
        assert_eq!(config.delay, Duration::from_millis(500));
        assert_eq!(config.fetch_mode, FetchMode::Static);
        assert!(config.path_pattern.is_none());
    }

    #[test]
    fn test_use_selenium_sets_rendered_mode() {
        let cli = parse(&[
            "--base-url",
            "https://example.com",
            "--start-path",
            "/docs/",
            "--output_file",
            "out.json",
            "--use-selenium",
            "--wait-time",
            "9",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(
            config.fetch_mode,
            FetchMode::Rendered {
                wait: Duration::from_secs(9)
            }
        );
    }

    #[test]
    fn test_wait_time_adjusts_rendered_preset() {
        let cli = parse(&["--preset", "anthropic", "--wait-time", "3"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(
            config.fetch_mode,
            FetchMode::Rendered {
                wait: Duration::from_secs(3)
            }
        );
    }

    #[test]
    fn test_negative_delay_rejected() {
        let cli = parse(&[
            "--base-url",
            "https://example.com",
            "--start-path",
            "/docs/",
            "--output_file",
            "out.json",
            "--delay=-1",
        ]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_bad_path_pattern_rejected() {
        let cli = parse(&["--preset", "gemini", "--path-pattern", "["]);
        assert!(matches!(
            build_config(&cli),
            Err(ConfigError::InvalidPattern(_))
        ));
    }
}
