//! Full-record extraction from a fetched listing page
//!
//! The slow path: runs over the whole detail page rather than one card. The
//! description heuristic trades precision for resilience, taking the longest
//! text block on the page as "main content" without any knowledge of the
//! site's markup structure.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use super::heuristics::{collect_text, looks_like_price};
use crate::listing::ListingRecord;

static HEADINGS: Lazy<Selector> = Lazy::new(|| Selector::parse("h1, h2").unwrap());
static PRICE_SCOPE: Lazy<Selector> = Lazy::new(|| Selector::parse("span, div").unwrap());
static TEXT_BLOCKS: Lazy<Selector> = Lazy::new(|| Selector::parse("div, section, p").unwrap());
static IMAGES: Lazy<Selector> = Lazy::new(|| Selector::parse("img[src]").unwrap());

/// Fields recoverable from a listing's own page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDetail {
    pub title: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
}

impl ListingDetail {
    /// Attaches the discovered URL, producing the emitted record.
    pub fn into_record(self, url: String) -> ListingRecord {
        ListingRecord {
            url,
            title: self.title,
            price: self.price,
            location: None,
            description: self.description,
            images: self.images,
            snippet: None,
        }
    }
}

/// Extracts a full record from a listing page.
///
/// Title is the first top-level heading; price the first span/div page-wide
/// whose own text carries a currency indicator; description the longest text
/// block among div/section/p candidates; images every non-inline `img` source
/// resolved against `page_url`. Never fails: absent matches leave fields unset.
pub fn extract_listing_detail(html: &str, page_url: &Url) -> ListingDetail {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&HEADINGS)
        .next()
        .map(collect_text)
        .filter(|text| !text.is_empty());

    let price = doc
        .select(&PRICE_SCOPE)
        .find(|el| looks_like_price(*el))
        .map(collect_text)
        .filter(|text| !text.is_empty());

    let description = longest_text_block(&doc);
    let images = collect_images(&doc, page_url);

    ListingDetail {
        title,
        price,
        description,
        images,
    }
}

/// Greatest character count wins; ties keep the first block in document order.
fn longest_text_block(doc: &Html) -> Option<String> {
    let mut best: Option<String> = None;
    let mut best_len = 0usize;

    for el in doc.select(&TEXT_BLOCKS) {
        let text = collect_text(el);
        let len = text.chars().count();
        if len > best_len {
            best_len = len;
            best = Some(text);
        }
    }

    best
}

/// Document order, duplicates preserved. Inline `data:` sources and sources
/// that cannot be resolved against the page URL are skipped silently.
fn collect_images(doc: &Html, page_url: &Url) -> Vec<String> {
    let mut images = Vec::new();

    for img in doc.select(&IMAGES) {
        let src = match img.value().attr("src") {
            Some(src) => src,
            None => continue,
        };
        if src.is_empty() || src.starts_with("data:") {
            continue;
        }
        if let Ok(resolved) = page_url.join(src) {
            images.push(resolved.to_string());
        }
    }

    images
}
