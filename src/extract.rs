//! Article link extraction from category index pages.
//!
//! Index pages link articles with a mix of relative and absolute hrefs, so
//! every candidate is resolved against the site's base origin before
//! filtering. Only same-host links whose path carries the article page
//! suffix (`.html` on VnExpress) survive.

use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Extract the deduplicated set of candidate article URLs from an index
/// page, in document order.
///
/// # Arguments
///
/// * `html` - The category index page markup
/// * `base_url` - The site's base origin; relative hrefs resolve against it
///   and links on other hosts are dropped
/// * `page_suffix` - Path suffix article pages carry (e.g. `.html`)
pub fn extract_links(html: &str, base_url: &Url, page_suffix: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let links: Vec<String> = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base_url.join(href).ok())
        .filter(|url| {
            url.host_str().is_some()
                && url.host_str() == base_url.host_str()
                && url.path().contains(page_suffix)
        })
        .map(|url| url.to_string())
        .unique()
        .collect();

    debug!(count = links.len(), "extracted candidate article links");
    links
}
