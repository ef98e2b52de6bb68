//! Heuristic field extraction from semi-structured listing markup
//!
//! Two tiers over the same record shape: [`extract_card_summary`] slices
//! fields out of one search-result card without navigation, and
//! [`extract_listing_detail`] works over a fetched listing page. Both are pure
//! transforms over already-parsed text and never fail; a field that cannot be
//! located is absent in the output.

mod card;
mod detail;
mod heuristics;

pub use card::{extract_card_summary, CardSummary};
pub use detail::{extract_listing_detail, ListingDetail};
