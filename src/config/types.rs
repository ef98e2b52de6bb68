use serde::Deserialize;

/// Main configuration structure for adsweep
///
/// Every section and key is optional; a missing config file is equivalent to
/// `Config::default()`. The defaults describe the reference target site and a
/// conservative fetch discipline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target-site heuristics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Host substring that marks the site family (regional hosts included)
    #[serde(rename = "domain-hint", default = "default_domain_hint")]
    pub domain_hint: String,

    /// Path fragments that mark a link as a listing page
    #[serde(rename = "listing-markers", default = "default_listing_markers")]
    pub listing_markers: Vec<String>,
}

/// Fetch discipline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Identity string sent as the User-Agent header
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Accept-Language header value
    #[serde(rename = "accept-language", default = "default_accept_language")]
    pub accept_language: String,

    /// Total per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per URL for transient failures (timeouts, 5xx, 408/429)
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Base backoff between attempts (milliseconds, doubled per attempt)
    #[serde(rename = "retry-backoff-ms", default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

/// Crawl pacing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Minimum spacing between listing fetches (milliseconds, shared across workers)
    #[serde(rename = "politeness-delay-ms", default = "default_politeness_delay_ms")]
    pub politeness_delay_ms: u64,

    /// Size of the listing-fetch worker pool
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path for the structured JSON dataset
    #[serde(rename = "json-path", default = "default_json_path")]
    pub json_path: String,

    /// Path for the flat CSV dataset
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,
}

fn default_domain_hint() -> String {
    "olx".to_string()
}

fn default_listing_markers() -> Vec<String> {
    vec![
        "/item/".to_string(),
        "/p/".to_string(),
        "/view/".to_string(),
        "/i/".to_string(),
    ]
}

fn default_user_agent() -> String {
    // An ordinary browser identity; sites vary in what they tolerate
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        .to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    500
}

fn default_politeness_delay_ms() -> u64 {
    1000
}

fn default_workers() -> usize {
    4
}

fn default_json_path() -> String {
    "listings.json".to_string()
}

fn default_csv_path() -> String {
    "listings.csv".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain_hint: default_domain_hint(),
            listing_markers: default_listing_markers(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            politeness_delay_ms: default_politeness_delay_ms(),
            workers: default_workers(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: default_json_path(),
            csv_path: default_csv_path(),
        }
    }
}
