//! Listing link discovery
//!
//! This module walks a search results page and turns its anchors into
//! canonical listing URLs:
//! - Resolve each href against the page URL
//! - Keep only links that qualify as listings for the configured site
//! - Normalize and deduplicate, preserving document order

use crate::config::SiteConfig;
use crate::url::{is_listing_link, normalize_listing_url};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::{HashMap, HashSet};
use url::Url;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Collects the listing URLs on a search results page
///
/// Every `<a href>` is resolved against `base_url`, filtered through the
/// listing-link heuristic, and normalized. The result keeps the first
/// appearance of each distinct URL in document order, so repeated anchors
/// for the same listing (image link plus title link) yield one entry.
///
/// # Arguments
///
/// * `document` - The parsed search results page
/// * `base_url` - The page URL, used to resolve relative hrefs
/// * `site` - Host hint and path markers for qualification
///
/// # Returns
///
/// Normalized listing URLs in first-appearance order
pub fn discover_listing_links(
    document: &Html,
    base_url: &Url,
    site: &SiteConfig,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&ANCHOR) {
        if let Some(href) = element.value().attr("href") {
            if let Some(url) = resolve_listing_url(href, base_url, site) {
                if seen.insert(url.clone()) {
                    links.push(url);
                }
            }
        }
    }

    links
}

/// Builds the card index for a search results page
///
/// Maps each normalized listing URL to the container element of the first
/// anchor that produced it. The container is the anchor's immediate parent,
/// falling back to the anchor itself when the parent is not an element.
/// Summary extraction scopes its field lookups to this container.
pub fn listing_cards<'a>(
    document: &'a Html,
    base_url: &Url,
    site: &SiteConfig,
) -> HashMap<String, ElementRef<'a>> {
    let mut cards = HashMap::new();

    for element in document.select(&ANCHOR) {
        if let Some(href) = element.value().attr("href") {
            if let Some(url) = resolve_listing_url(href, base_url, site) {
                let card = element
                    .parent()
                    .and_then(ElementRef::wrap)
                    .unwrap_or(element);
                cards.entry(url).or_insert(card);
            }
        }
    }

    cards
}

/// Resolves an href to a normalized listing URL
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only links (same page anchors)
/// - Hrefs that do not resolve against the base URL
/// - URLs that fail the listing-link heuristic
fn resolve_listing_url(href: &str, base_url: &Url, site: &SiteConfig) -> Option<String> {
    let href = href.trim();

    // Skip empty hrefs
    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    let url = base_url.join(href).ok()?;

    if !is_listing_link(&url, site) {
        return None;
    }

    Some(normalize_listing_url(&url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://www.olx.in/items/q-car-cover").unwrap()
    }

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn test_discovers_in_document_order() {
        let html = r#"
            <html><body>
                <a href="/item/cover-one">One</a>
                <a href="/item/cover-two">Two</a>
                <a href="/item/cover-three">Three</a>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let links = discover_listing_links(&document, &base_url(), &site());
        assert_eq!(
            links,
            vec![
                "https://www.olx.in/item/cover-one",
                "https://www.olx.in/item/cover-two",
                "https://www.olx.in/item/cover-three",
            ]
        );
    }

    #[test]
    fn test_query_variants_collapse_to_one_entry() {
        let html = r#"
            <html><body>
                <a href="/item/cover?utm=a">Image</a>
                <a href="/item/cover?utm=b">Title</a>
                <a href="/item/cover/">Again</a>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let links = discover_listing_links(&document, &base_url(), &site());
        assert_eq!(links, vec!["https://www.olx.in/item/cover"]);
    }

    #[test]
    fn test_non_listing_links_dropped() {
        let html = r#"
            <html><body>
                <a href="/help/contact">Help</a>
                <a href="?page=2">Next</a>
                <a href="https://elsewhere.test/item/cover">Foreign</a>
                <a href="/item/real-cover">Real</a>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let links = discover_listing_links(&document, &base_url(), &site());
        assert_eq!(links, vec!["https://www.olx.in/item/real-cover"]);
    }

    #[test]
    fn test_resolves_relative_forms() {
        let html = r#"
            <html><body>
                <a href="/view/absolute-path">Root relative</a>
                <a href="https://www.olx.in/p/full">Absolute</a>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let links = discover_listing_links(&document, &base_url(), &site());
        assert_eq!(
            links,
            vec![
                "https://www.olx.in/view/absolute-path",
                "https://www.olx.in/p/full",
            ]
        );
    }

    #[test]
    fn test_skips_special_schemes() {
        let html = r##"
            <html><body>
                <a href="javascript:void(0)">JS</a>
                <a href="mailto:seller@olx.in">Mail</a>
                <a href="tel:+911234567890">Call</a>
                <a href="#listings">Jump</a>
            </body></html>
        "##;
        let document = Html::parse_document(html);
        let links = discover_listing_links(&document, &base_url(), &site());
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_markup_still_yields_links() {
        // Unclosed tags; the parser recovers and the anchor survives.
        let html = r#"<html><body><div><a href="/item/survivor">Still here</div>"#;
        let document = Html::parse_document(html);
        let links = discover_listing_links(&document, &base_url(), &site());
        assert_eq!(links, vec!["https://www.olx.in/item/survivor"]);
    }

    #[test]
    fn test_cards_map_to_parent_container() {
        let html = r#"
            <html><body>
                <div class="card"><a href="/item/cover">Cover</a><span>Rs 499</span></div>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let cards = listing_cards(&document, &base_url(), &site());
        let card = cards.get("https://www.olx.in/item/cover").unwrap();
        assert_eq!(card.value().name(), "div");
        assert_eq!(card.value().attr("class"), Some("card"));
    }

    #[test]
    fn test_card_index_keeps_first_anchor() {
        let html = r#"
            <html><body>
                <div class="first"><a href="/item/cover">Image</a></div>
                <div class="second"><a href="/item/cover">Title</a></div>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let cards = listing_cards(&document, &base_url(), &site());
        assert_eq!(cards.len(), 1);
        let card = cards.get("https://www.olx.in/item/cover").unwrap();
        assert_eq!(card.value().attr("class"), Some("first"));
    }
}
