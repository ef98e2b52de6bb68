//! The listing record type shared across the pipeline
//!
//! One record per discovered listing URL. Every field except the URL itself is
//! best-effort: extraction leaves a field `None` when nothing matched, which is
//! distinct from an extracted empty value (values that trim to empty are also
//! recorded as absent). The images list is always present, empty when the
//! summary path produced the record or no images were found.

use serde::{Deserialize, Serialize};

/// One scraped listing, keyed by its normalized URL.
///
/// The URL is assigned once at discovery time and never mutated; the remaining
/// fields are written at most once, by whichever extractor produced the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Normalized listing URL (scheme+host+path, no query, no trailing slash)
    pub url: String,

    /// Listing title
    pub title: Option<String>,

    /// Price as displayed, currency prefix and all; never parsed to a number
    pub price: Option<String>,

    /// "City, Region" style location line (summary path only)
    pub location: Option<String>,

    /// Longest text block on the detail page (detail path only)
    pub description: Option<String>,

    /// Absolute image URLs in document order, duplicates preserved
    pub images: Vec<String>,

    /// Short preview text from the search-result card (summary path only)
    pub snippet: Option<String>,
}

impl ListingRecord {
    /// A degraded record carrying only the URL.
    ///
    /// Emitted when an item fetch fails in detail mode, or when no card can be
    /// re-located in summary mode. Partial results beat missing results: the
    /// URL is never dropped.
    pub fn url_only(url: String) -> Self {
        Self {
            url,
            title: None,
            price: None,
            location: None,
            description: None,
            images: Vec::new(),
            snippet: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_only_has_no_fields() {
        let record = ListingRecord::url_only("https://site.test/item/1".to_string());

        assert_eq!(record.url, "https://site.test/item/1");
        assert!(record.title.is_none());
        assert!(record.price.is_none());
        assert!(record.location.is_none());
        assert!(record.description.is_none());
        assert!(record.images.is_empty());
        assert!(record.snippet.is_none());
    }

    #[test]
    fn test_serializes_absent_fields_as_null() {
        let record = ListingRecord::url_only("https://site.test/item/1".to_string());
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"title\":null"));
        assert!(json.contains("\"images\":[]"));
    }
}
