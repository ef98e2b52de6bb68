//! Crawler module for sweeping classifieds search results
//!
//! This module contains the core sweep logic, including:
//! - HTTP fetching with retry and backoff
//! - Listing link discovery on results pages
//! - Politeness pacing shared across workers
//! - Overall sweep coordination

mod coordinator;
mod discover;
mod fetcher;
mod pacer;

pub use coordinator::{crawl, Coordinator, CrawlRequest};
pub use discover::{discover_listing_links, listing_cards};
pub use fetcher::{build_http_client, fetch_page, FetchCause, FetchFailure, FetchedPage};
pub use pacer::Pacer;
