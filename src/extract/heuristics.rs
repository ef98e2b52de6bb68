//! Field-level matching heuristics shared by both extractors
//!
//! Target-site markup drifts, so each field is located by a small predicate
//! over tag kind and text shape rather than by fixed selectors. Keeping the
//! predicates here makes them independently testable and swappable.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

/// Currency indicator: the rupee symbol or a local abbreviation as its own
/// word. "₹ 1,899", "INR 2,500" and "Rs. 300" match; the letters buried in
/// ordinary words ("cars", "offers") do not.
static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i:₹|\binr\b|\brs\b\.?)").unwrap());

/// "City, Region" shape: letters, then a comma, then more letters.
static LOCATION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z].+,\s*[A-Za-z]").unwrap());

/// Collects an element's text the way a reader sees it: every descendant text
/// node trimmed, empties dropped, the rest joined with single spaces.
pub(crate) fn collect_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text belonging to the element itself: direct child text nodes only,
/// excluding anything nested deeper.
pub(crate) fn own_text(el: ElementRef) -> String {
    el.children()
        .filter_map(|node| node.value().as_text())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when the element's own text carries a currency indicator.
///
/// Matching on own text rather than aggregated descendant text keeps outer
/// wrapper elements from shadowing the leaf that actually shows the price.
pub(crate) fn looks_like_price(el: ElementRef) -> bool {
    PRICE_PATTERN.is_match(&own_text(el))
}

/// True when the text is shaped like a "City, Region" line.
pub(crate) fn looks_like_location(text: &str) -> bool {
    LOCATION_PATTERN.is_match(text)
}

/// True when the element's class list contains the literal `location` token.
pub(crate) fn has_location_class(el: ElementRef) -> bool {
    el.value().classes().any(|class| class == "location")
}
