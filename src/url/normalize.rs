use url::Url;

/// Normalizes a listing URL into its dedup key form
///
/// The key is scheme+host+path only. This transform must be applied
/// identically everywhere a URL is compared or stored, or duplicates leak
/// through the seen-set.
///
/// # Normalization Steps
///
/// 1. Remove the query string
/// 2. Remove the fragment
/// 3. Remove trailing path separators
///
/// Host casing and percent-encoding are already canonical on a parsed [`Url`],
/// so the result is idempotent: re-parsing and normalizing the key yields the
/// key again.
///
/// # Examples
///
/// ```
/// use adsweep::url::normalize_listing_url;
/// use url::Url;
///
/// let url = Url::parse("https://www.olx.in/item/car-cover-123?spotlight=1#photos").unwrap();
/// assert_eq!(
///     normalize_listing_url(&url),
///     "https://www.olx.in/item/car-cover-123"
/// );
/// ```
pub fn normalize_listing_url(url: &Url) -> String {
    let mut url = url.clone();

    // Steps 1 & 2: drop query and fragment
    url.set_query(None);
    url.set_fragment(None);

    // Step 3: drop trailing slashes from the serialized form. A bare origin
    // serializes with a "/" path, so the root URL becomes scheme+host alone.
    url.as_str().trim_end_matches('/').to_string()
}
