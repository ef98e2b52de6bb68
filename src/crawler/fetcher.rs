//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawl, including:
//! - Building the shared HTTP client with a browser-like user agent
//! - GET requests with a per-request timeout
//! - Retry logic with exponential backoff for transient failures
//! - Error classification

use crate::config::FetchConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// A successfully fetched HTML page
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status: u16,
    /// Page body content
    pub body: String,
}

/// A fetch that exhausted its attempts
#[derive(Debug, Clone, Error)]
#[error("GET {url}: {cause}")]
pub struct FetchFailure {
    /// The URL that was requested
    pub url: String,
    /// Why the final attempt failed
    pub cause: FetchCause,
}

/// Classification of a failed fetch attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchCause {
    /// The request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established
    #[error("connection failed")]
    Connect,

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Any other transport-level problem
    #[error("{0}")]
    Transport(String),
}

/// Builds an HTTP client with the configured fetch profile
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use adsweep::config::FetchConfig;
/// use adsweep::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&config.accept_language) {
        headers.insert(ACCEPT_LANGUAGE, value);
    }

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, retrying transient failures with exponential backoff
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | 2xx | Return the body |
/// | 408, 429, 500, 502, 503, 504 | Retry with backoff |
/// | Other status | Immediate failure |
/// | Timeout | Retry with backoff |
/// | Connection refused | Retry with backoff |
/// | Body decode error | Immediate failure |
///
/// The backoff doubles per attempt, starting at `retry_backoff_ms`.
/// `max_retries` counts total attempts and is clamped to at least one.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `config` - Retry and backoff settings
///
/// # Returns
///
/// * `Ok(FetchedPage)` - The page body and final URL
/// * `Err(FetchFailure)` - The URL and the cause of the last attempt
pub async fn fetch_page(
    client: &Client,
    url: &str,
    config: &FetchConfig,
) -> Result<FetchedPage, FetchFailure> {
    let attempts = config.max_retries.max(1);
    let mut attempt = 1;

    loop {
        let cause = match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    let final_url = response.url().to_string();
                    match response.text().await {
                        Ok(body) => {
                            return Ok(FetchedPage {
                                final_url,
                                status: status.as_u16(),
                                body,
                            });
                        }
                        Err(e) => FetchCause::Transport(e.to_string()),
                    }
                } else {
                    FetchCause::Status(status.as_u16())
                }
            }
            Err(e) => classify_error(&e),
        };

        if attempt < attempts && is_retryable(&cause) {
            let delay = backoff_delay(config.retry_backoff_ms, attempt);
            debug!(
                "attempt {}/{} for {} failed ({}), retrying in {:?}",
                attempt, attempts, url, cause, delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
            continue;
        }

        return Err(FetchFailure {
            url: url.to_string(),
            cause,
        });
    }
}

/// Maps a reqwest error to a fetch cause
fn classify_error(error: &reqwest::Error) -> FetchCause {
    if error.is_timeout() {
        FetchCause::Timeout
    } else if error.is_connect() {
        FetchCause::Connect
    } else {
        FetchCause::Transport(error.to_string())
    }
}

/// Whether a failed attempt is worth repeating
fn is_retryable(cause: &FetchCause) -> bool {
    match cause {
        FetchCause::Timeout | FetchCause::Connect => true,
        FetchCause::Status(code) => is_retryable_status(*code),
        FetchCause::Transport(_) => false,
    }
}

fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

fn backoff_delay(base_ms: u64, attempt: u32) -> Duration {
    Duration::from_millis(base_ms * 2u64.pow(attempt.saturating_sub(1)))
}
