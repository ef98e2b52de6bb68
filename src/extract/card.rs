//! Summary extraction from one search-result card
//!
//! The fast path: fields are sliced out of the already-fetched search page
//! without visiting the listing. Works on the nearest container around a
//! qualifying anchor, as located by the discoverer's card index.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::heuristics::{
    collect_text, has_location_class, looks_like_location, looks_like_price,
};
use crate::listing::ListingRecord;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static CANDIDATES: Lazy<Selector> = Lazy::new(|| Selector::parse("span, p, div").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Fields recoverable from a card without navigation.
///
/// Every field is best-effort; absent means no heuristic matched, which is a
/// valid outcome on drifted markup, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSummary {
    pub title: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub snippet: Option<String>,
}

impl CardSummary {
    /// Attaches the discovered URL, producing the emitted record.
    pub fn into_record(self, url: String) -> ListingRecord {
        ListingRecord {
            url,
            title: self.title,
            price: self.price,
            location: self.location,
            description: None,
            images: Vec::new(),
            snippet: self.snippet,
        }
    }
}

/// Extracts summary fields from one result card.
///
/// Title is the first linked anchor's text; price the first span/p/div whose
/// own text carries a currency indicator; location prefers a `location`-classed
/// element and falls back to a "City, Region" scan; snippet is the first
/// paragraph. Returns all-absent fields for a container with none of these.
pub fn extract_card_summary(card: ElementRef) -> CardSummary {
    let title = card
        .select(&ANCHOR)
        .next()
        .map(collect_text)
        .filter(|text| !text.is_empty());

    let price = card
        .select(&CANDIDATES)
        .find(|el| looks_like_price(*el))
        .map(collect_text)
        .filter(|text| !text.is_empty());

    let location = find_location(card);

    let snippet = card
        .select(&PARAGRAPH)
        .next()
        .map(collect_text)
        .filter(|text| !text.is_empty());

    CardSummary {
        title,
        price,
        location,
        snippet,
    }
}

/// An explicitly tagged location element wins outright. Without one, scan the
/// final four text-bearing candidates last-to-first for a "City, Region" shaped
/// line; locations conventionally render near the end of a card.
fn find_location(card: ElementRef) -> Option<String> {
    if let Some(tagged) = card.select(&CANDIDATES).find(|el| has_location_class(*el)) {
        let text = collect_text(tagged);
        return if text.is_empty() { None } else { Some(text) };
    }

    let candidates: Vec<ElementRef> = card.select(&CANDIDATES).collect();
    let tail_start = candidates.len().saturating_sub(4);
    for el in candidates[tail_start..].iter().rev() {
        let text = collect_text(*el);
        if !text.is_empty() && looks_like_location(&text) {
            return Some(text);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn card(doc: &Html) -> ElementRef<'_> {
        let selector = Selector::parse("li").unwrap();
        doc.select(&selector).next().unwrap()
    }

    #[test]
    fn test_extracts_all_summary_fields() {
        let doc = Html::parse_fragment(
            r#"<li>
                <a href="/item/car-cover-123">Waterproof car cover</a>
                <span>₹ 1,899</span>
                <p>Fits sedans and hatchbacks, UV resistant.</p>
                <span class="location">Andheri East, Mumbai</span>
            </li>"#,
        );

        let summary = extract_card_summary(card(&doc));

        assert_eq!(summary.title.as_deref(), Some("Waterproof car cover"));
        assert_eq!(summary.price.as_deref(), Some("₹ 1,899"));
        assert_eq!(summary.location.as_deref(), Some("Andheri East, Mumbai"));
        assert_eq!(
            summary.snippet.as_deref(),
            Some("Fits sedans and hatchbacks, UV resistant.")
        );
    }

    #[test]
    fn test_bare_container_yields_all_absent() {
        let doc = Html::parse_fragment("<li><div>nothing useful here</div></li>");

        let summary = extract_card_summary(card(&doc));

        assert_eq!(summary, CardSummary::default());
    }

    #[test]
    fn test_empty_anchor_text_is_absent_title() {
        let doc = Html::parse_fragment(r#"<li><a href="/item/1"></a></li>"#);

        let summary = extract_card_summary(card(&doc));

        assert!(summary.title.is_none());
    }

    #[test]
    fn test_price_matches_leaf_not_wrapper() {
        let doc = Html::parse_fragment(
            r#"<li><div><span>₹ 1,899</span><p>a very long description of the cover</p></div></li>"#,
        );

        let summary = extract_card_summary(card(&doc));

        assert_eq!(summary.price.as_deref(), Some("₹ 1,899"));
    }

    #[test]
    fn test_price_ignores_ordinary_words() {
        let doc = Html::parse_fragment("<li><span>nice cars available</span></li>");

        let summary = extract_card_summary(card(&doc));

        assert!(summary.price.is_none());
    }

    #[test]
    fn test_tagged_location_wins_over_pattern() {
        let doc = Html::parse_fragment(
            r#"<li>
                <span>Sector 9, Gurgaon</span>
                <span class="location">Baner</span>
            </li>"#,
        );

        let summary = extract_card_summary(card(&doc));

        // The tagged element wins even though it lacks the comma shape
        assert_eq!(summary.location.as_deref(), Some("Baner"));
    }

    #[test]
    fn test_location_fallback_scans_tail_last_to_first() {
        let doc = Html::parse_fragment(
            r#"<li>
                <span>one</span>
                <span>Sector 9, Gurgaon</span>
                <span>two</span>
                <span>three</span>
                <span>Malad West, Mumbai</span>
            </li>"#,
        );

        let summary = extract_card_summary(card(&doc));

        // Both shaped candidates sit in the final four; the later one wins
        assert_eq!(summary.location.as_deref(), Some("Malad West, Mumbai"));
    }

    #[test]
    fn test_location_fallback_ignores_elements_before_tail() {
        let doc = Html::parse_fragment(
            r#"<li>
                <span>Pune, Maharashtra</span>
                <span>a</span>
                <span>b</span>
                <span>c</span>
                <span>d</span>
            </li>"#,
        );

        let summary = extract_card_summary(card(&doc));

        assert!(summary.location.is_none());
    }

    #[test]
    fn test_snippet_is_first_paragraph() {
        let doc = Html::parse_fragment(
            "<li><p>first snippet</p><p>second snippet</p></li>",
        );

        let summary = extract_card_summary(card(&doc));

        assert_eq!(summary.snippet.as_deref(), Some("first snippet"));
    }

    #[test]
    fn test_into_record_keeps_detail_fields_empty() {
        let summary = CardSummary {
            title: Some("Cover".to_string()),
            price: Some("₹ 500".to_string()),
            location: None,
            snippet: None,
        };

        let record = summary.into_record("https://site.test/item/1".to_string());

        assert_eq!(record.url, "https://site.test/item/1");
        assert_eq!(record.title.as_deref(), Some("Cover"));
        assert!(record.description.is_none());
        assert!(record.images.is_empty());
    }
}
