//! Crawl coordinator - main orchestration logic
//!
//! This module owns a sweep from start to finish, including:
//! - Paginating over search result pages
//! - Discovering listing links and deduplicating across pages
//! - Choosing between card summaries and detail-page visits
//! - Producing records in discovery order

use crate::config::Config;
use crate::crawler::discover::{discover_listing_links, listing_cards};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::pacer::Pacer;
use crate::extract::{extract_card_summary, extract_listing_detail};
use crate::listing::ListingRecord;
use crate::url::parse_search_url;
use crate::{ConfigError, SweepError};
use reqwest::Client;
use scraper::Html;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use url::Url;

/// What to sweep, as requested on the command line
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// The search results URL to start from
    pub search_url: String,
    /// How many results pages to walk (at least 1)
    pub pages: u32,
    /// Whether to fetch each listing's own page for richer fields
    pub visit_details: bool,
}

/// Main sweep coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    request: CrawlRequest,
    base: Url,
    client: Client,
    pacer: Arc<Pacer>,
    seen: HashSet<String>,
    records: Vec<ListingRecord>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The sweep configuration
    /// * `request` - The search URL, page count, and mode
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SweepError)` - Invalid request or client build failure
    pub fn new(config: Config, request: CrawlRequest) -> Result<Self, SweepError> {
        if request.pages == 0 {
            return Err(SweepError::Config(ConfigError::Validation(
                "pages must be >= 1".to_string(),
            )));
        }

        let base = parse_search_url(&request.search_url)?;
        let client = build_http_client(&config.fetch)?;
        let pacer = Arc::new(Pacer::new(
            Duration::from_millis(config.crawl.politeness_delay_ms),
            config.crawl.workers,
        ));

        Ok(Self {
            config: Arc::new(config),
            request,
            base,
            client,
            pacer,
            seen: HashSet::new(),
            records: Vec::new(),
        })
    }

    /// Runs the sweep
    ///
    /// This is the core loop that:
    /// 1. Builds the URL for each results page
    /// 2. Fetches it, warning and moving on when a page fails
    /// 3. Discovers listing links in document order
    /// 4. Produces one record per listing not seen on an earlier page
    ///
    /// A listing is marked seen as soon as it is claimed, so a URL repeated
    /// on a later page never yields a second record.
    pub async fn run(mut self) -> Result<Vec<ListingRecord>, SweepError> {
        let mode = if self.request.visit_details {
            "detail"
        } else {
            "summary"
        };
        tracing::info!(
            "starting sweep of {} ({} pages, {} mode)",
            self.request.search_url,
            self.request.pages,
            mode
        );

        let start_time = std::time::Instant::now();
        let mut pages_fetched = 0u32;
        let mut pages_failed = 0u32;

        for page in 1..=self.request.pages {
            let page_url = build_page_url(&self.request.search_url, page);
            tracing::debug!("fetching results page {}", page_url);

            let fetched = match fetch_page(&self.client, &page_url, &self.config.fetch).await {
                Ok(fetched) => fetched,
                Err(failure) => {
                    tracing::warn!("results page {} skipped: {}", page, failure);
                    pages_failed += 1;
                    continue;
                }
            };
            pages_fetched += 1;

            if self.request.visit_details {
                let links = self.discover_links(&fetched.body, page);
                self.collect_details(links).await;
            } else {
                self.collect_summaries(&fetched.body, page);
            }
        }

        tracing::info!(
            "sweep complete: {} records from {} pages ({} failed) in {:?}",
            self.records.len(),
            pages_fetched,
            pages_failed,
            start_time.elapsed()
        );

        Ok(self.records)
    }

    /// Parses a results page and returns its listing links in document order
    fn discover_links(&self, body: &str, page: u32) -> Vec<String> {
        let document = Html::parse_document(body);
        let links = discover_listing_links(&document, &self.base, &self.config.site);
        tracing::info!("page {}: {} candidate listings", page, links.len());
        links
    }

    /// Summary mode: extract each unseen listing from its card on the page
    ///
    /// A link whose card cannot be found still produces a URL-only record.
    fn collect_summaries(&mut self, body: &str, page: u32) {
        let document = Html::parse_document(body);
        let links = discover_listing_links(&document, &self.base, &self.config.site);
        let cards = listing_cards(&document, &self.base, &self.config.site);
        tracing::info!("page {}: {} candidate listings", page, links.len());

        for url in links {
            if !self.seen.insert(url.clone()) {
                continue;
            }

            let record = match cards.get(url.as_str()) {
                Some(card) => extract_card_summary(*card).into_record(url),
                None => ListingRecord::url_only(url),
            };
            self.records.push(record);
        }
    }

    /// Detail mode: fetch each unseen listing's own page
    ///
    /// Fetches run on pooled workers but records are appended in discovery
    /// order, so output order matches the page regardless of completion
    /// order.
    async fn collect_details(&mut self, links: Vec<String>) {
        let mut claimed = Vec::new();
        for url in links {
            if self.seen.insert(url.clone()) {
                claimed.push(url);
            }
        }

        let mut workers = JoinSet::new();
        for (index, url) in claimed.into_iter().enumerate() {
            let permit = match self.pacer.acquire().await {
                Some(permit) => permit,
                None => break,
            };

            let client = self.client.clone();
            let config = Arc::clone(&self.config);
            let pacer = Arc::clone(&self.pacer);
            workers.spawn(async move {
                let _permit = permit;
                let record = fetch_listing(&client, &config, &pacer, url).await;
                (index, record)
            });
        }

        let mut batch = Vec::new();
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(entry) => batch.push(entry),
                Err(e) => tracing::error!("listing worker failed: {}", e),
            }
        }

        batch.sort_by_key(|(index, _)| *index);
        self.records
            .extend(batch.into_iter().map(|(_, record)| record));
    }
}

/// Fetches one listing page and extracts its detail fields
///
/// Fetch failures degrade to a URL-only record; a claimed listing is never
/// dropped from the results.
async fn fetch_listing(
    client: &Client,
    config: &Config,
    pacer: &Pacer,
    url: String,
) -> ListingRecord {
    pacer.wait_turn().await;
    tracing::debug!("visiting {}", url);

    match fetch_page(client, &url, &config.fetch).await {
        Ok(fetched) => match Url::parse(&url) {
            Ok(page_url) => extract_listing_detail(&fetched.body, &page_url).into_record(url),
            Err(_) => ListingRecord::url_only(url),
        },
        Err(failure) => {
            tracing::warn!("{}; keeping URL-only record", failure);
            ListingRecord::url_only(url)
        }
    }
}

/// Builds the URL for a given results page
///
/// Page 1 is the search URL exactly as supplied. Later pages append a
/// `page=N` parameter, with `&` when the URL already carries a query and
/// `?` otherwise.
fn build_page_url(search_url: &str, page: u32) -> String {
    if page <= 1 {
        return search_url.to_string();
    }

    let separator = if search_url.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", search_url, separator, page)
}

/// Runs a complete sweep with the given configuration and request
///
/// # Arguments
///
/// * `config` - The sweep configuration
/// * `request` - The search URL, page count, and mode
///
/// # Returns
///
/// * `Ok(Vec<ListingRecord>)` - One record per discovered listing
/// * `Err(SweepError)` - Invalid request or client build failure
///
/// # Example
///
/// ```no_run
/// use adsweep::config::Config;
/// use adsweep::crawler::{crawl, CrawlRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let request = CrawlRequest {
///     search_url: "https://www.olx.in/items/q-car-cover".to_string(),
///     pages: 2,
///     visit_details: false,
/// };
/// let records = crawl(Config::default(), request).await?;
/// println!("{} listings", records.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(
    config: Config,
    request: CrawlRequest,
) -> Result<Vec<ListingRecord>, SweepError> {
    Coordinator::new(config, request)?.run().await
}
