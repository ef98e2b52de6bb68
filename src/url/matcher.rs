use crate::config::SiteConfig;
use url::Url;

/// Checks whether a resolved link qualifies as a listing candidate
///
/// A link qualifies only if all three hold:
/// 1. Its scheme is http or https
/// 2. Its host contains the configured site family hint (substring match, so
///    regional hosts like `olx.in` and `www.olx.com.br` all qualify)
/// 3. Its path contains at least one of the configured listing-path markers
///
/// The markers are matched against the path only; a marker appearing in the
/// query string does not qualify.
///
/// # Examples
///
/// ```
/// use adsweep::config::SiteConfig;
/// use adsweep::url::is_listing_link;
/// use url::Url;
///
/// let site = SiteConfig::default();
/// let item = Url::parse("https://www.olx.in/item/car-cover-123").unwrap();
/// let search = Url::parse("https://www.olx.in/search?next=/item/5").unwrap();
///
/// assert!(is_listing_link(&item, &site));
/// assert!(!is_listing_link(&search, &site));
/// ```
pub fn is_listing_link(url: &Url, site: &SiteConfig) -> bool {
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    let host = match url.host_str() {
        Some(host) => host,
        None => return false,
    };
    if !host.contains(&site.domain_hint) {
        return false;
    }

    let path = url.path();
    site.listing_markers
        .iter()
        .any(|marker| path.contains(marker.as_str()))
}
