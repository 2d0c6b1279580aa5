//! Per-category scraping: index fetch, link extraction, and batched
//! concurrent article fetching.
//!
//! A category scan is best-effort. The index fetch is retried and its
//! failure propagates to the coordinator, but each article's fetch+parse is
//! an independent, individually retried operation whose failure only drops
//! that one article. Articles are fetched in fixed-size concurrent batches
//! with a pause between batches, which bounds both peak in-flight requests
//! and the request rate seen by the origin.

use crate::client::RequestClient;
use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::extract::extract_links;
use crate::models::Article;
use crate::parse::parse_article;
use crate::retry::with_retry;
use futures::future::join_all;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Scrape up to `max_articles` articles from one category.
///
/// Fails only when the category index page itself cannot be fetched after
/// retries; every article-level failure (timeout, HTTP error, unparseable
/// markup) is logged and the article omitted.
#[instrument(level = "info", skip(client, config))]
pub async fn scrape_category(
    client: &RequestClient,
    config: &ScrapeConfig,
    category: &str,
    max_articles: usize,
) -> Result<Vec<Article>, ScrapeError> {
    let index_url = config.site.category_url(category);
    let index_url = index_url.as_str();
    let html = with_retry(&config.retry, || {
        client.get_text(index_url, config.timeouts.read)
    })
    .await?;

    let links = extract_links(&html, &config.site.base_url, &config.site.page_suffix);
    info!(category, found = links.len(), "indexed category");

    // Only max_articles links are submitted at all; truncation happens
    // here, not after fetching.
    let selected: Vec<&str> = links.iter().take(max_articles).map(String::as_str).collect();
    let mut articles = Vec::new();

    for (batch_index, batch) in selected.chunks(config.batch.size).enumerate() {
        if batch_index > 0 {
            sleep(config.batch.delay).await;
        }

        // Settle every fetch in the batch regardless of individual outcome,
        // then keep the successes.
        let outcomes = join_all(batch.iter().map(|link| fetch_article(client, config, link))).await;
        for (link, outcome) in batch.iter().zip(outcomes) {
            match outcome {
                Ok(Some(article)) => articles.push(article),
                Ok(None) => {
                    warn!(%link, "page had no extractable title/content; skipping")
                }
                Err(e) => warn!(error = %e, %link, "article fetch failed; skipping"),
            }
        }
    }

    info!(category, count = articles.len(), "category scrape complete");
    Ok(articles)
}

/// Fetch and parse a single article. An `Ok(None)` means the page fetched
/// but was not parseable; that outcome is never retried, since retrying
/// will not change malformed markup.
async fn fetch_article(
    client: &RequestClient,
    config: &ScrapeConfig,
    url: &str,
) -> Result<Option<Article>, ScrapeError> {
    let html = with_retry(&config.retry, || {
        client.get_text(url, config.timeouts.read)
    })
    .await?;
    Ok(parse_article(&html, url))
}
