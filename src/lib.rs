//! Adsweep: a polite classifieds-listing scraper
//!
//! This crate discovers item listings from a paginated search results page,
//! optionally follows each listing for fuller attributes, and persists the
//! deduplicated result set as JSON and CSV. Extraction is heuristic and fails
//! soft: fields that cannot be located are absent, never errors.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod listing;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for adsweep operations
///
/// Only configuration-level problems can abort a run. Fetch failures are not
/// represented here: they demote to a skipped page or a URL-only record inside
/// the crawler (see [`crawler::FetchFailure`]).
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Search URL is empty")]
    Empty,

    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for adsweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator, CrawlRequest};
pub use listing::ListingRecord;
pub use output::write_outputs;
pub use url::{normalize_listing_url, parse_search_url};
