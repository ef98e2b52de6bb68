//! URL handling for adsweep
//!
//! This module provides the dedup-key normalization, the listing-link
//! qualification heuristic, and the search-URL validation gate.

mod matcher;
mod normalize;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use matcher::is_listing_link;
pub use normalize::normalize_listing_url;

/// Validates the operator-supplied search URL
///
/// This is the fatal configuration gate: it runs before any network activity,
/// and a failure here aborts the run. Everything that can go wrong later
/// (fetches, extraction) degrades instead.
///
/// # Arguments
///
/// * `input` - The raw search URL string from the CLI
///
/// # Returns
///
/// * `Ok(Url)` - Parsed http(s) URL with a host
/// * `Err(UrlError)` - Empty, unparseable, wrong scheme, or host-less input
pub fn parse_search_url(input: &str) -> UrlResult<Url> {
    if input.is_empty() {
        return Err(UrlError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "only HTTP and HTTPS are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
