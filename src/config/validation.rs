use crate::config::types::{Config, CrawlConfig, FetchConfig, OutputConfig, SiteConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_fetch_config(&config.fetch)?;
    validate_crawl_config(&config.crawl)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates site recognition settings
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.domain_hint.is_empty() {
        return Err(ConfigError::Validation(
            "domain-hint cannot be empty".to_string(),
        ));
    }

    if config.listing_markers.is_empty() {
        return Err(ConfigError::Validation(
            "listing-markers must contain at least one path marker".to_string(),
        ));
    }

    for marker in &config.listing_markers {
        if marker.is_empty() {
            return Err(ConfigError::Validation(
                "listing-markers cannot contain empty strings".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates HTTP fetch settings
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.accept_language.is_empty() {
        return Err(ConfigError::Validation(
            "accept-language cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be <= 10, got {}",
            config.max_retries
        )));
    }

    if config.retry_backoff_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "retry-backoff-ms must be <= 60000ms, got {}ms",
            config.retry_backoff_ms
        )));
    }

    Ok(())
}

/// Validates crawl pacing settings
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.workers < 1 || config.workers > 64 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 64, got {}",
            config.workers
        )));
    }

    if config.politeness_delay_ms > 600_000 {
        return Err(ConfigError::Validation(format!(
            "politeness-delay-ms must be <= 600000ms, got {}ms",
            config.politeness_delay_ms
        )));
    }

    Ok(())
}

/// Validates output settings
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.json_path.is_empty() {
        return Err(ConfigError::Validation(
            "json-path cannot be empty".to_string(),
        ));
    }

    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    if config.json_path == config.csv_path {
        return Err(ConfigError::Validation(format!(
            "json-path and csv-path must differ, both are '{}'",
            config.json_path
        )));
    }

    Ok(())
}
