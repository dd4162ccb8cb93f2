use crate::config::types::CrawlConfig;
use crate::ConfigError;

/// Validates a crawl configuration before any crawling starts
///
/// Every failure here is a fatal [`ConfigError`]; nothing is fetched until
/// the whole configuration is known good.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_base_url(config)?;
    validate_paths(config)?;
    validate_limits(config)?;
    validate_output(config)?;
    Ok(())
}

fn validate_base_url(config: &CrawlConfig) -> Result<(), ConfigError> {
    let url = &config.base_url;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base URL '{}' has no host",
            url
        )));
    }

    Ok(())
}

fn validate_paths(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.start_path.is_empty() {
        return Err(ConfigError::Validation(
            "start_path cannot be empty".to_string(),
        ));
    }

    if !config.start_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "start_path must begin with '/', got '{}'",
            config.start_path
        )));
    }

    for path in &config.additional_paths {
        if !path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "additional path must begin with '/', got '{}'",
                path
            )));
        }
    }

    Ok(())
}

fn validate_limits(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.selector.trim().is_empty() {
        return Err(ConfigError::Validation(
            "selector cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_output(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.output_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
