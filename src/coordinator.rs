//! Top-level scrape coordination.
//!
//! [`SiteScraper::scrape`] is the crate's public entry point. One call runs
//! the full pipeline: connectivity probe, sequential category scans,
//! keyword filtering, truncation, and report finalization. The call never
//! returns an error and never panics; every failure is captured into the
//! report's error list. Partial results are kept deliberately (some
//! categories may be blocked while others are healthy), but an unreachable
//! origin aborts immediately since proceeding would be pointless.
//!
//! No state survives between calls. Each invocation owns its accumulating
//! article, error, and source lists, so concurrent scrapes do not share
//! anything.

use crate::category::scrape_category;
use crate::client::RequestClient;
use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::models::{Article, ScrapeOptions, ScrapeReport};
use crate::retry::with_retry;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument, warn};

/// Scraper for one configured news site.
///
/// Construction wires the configuration into a request client; all target
/// site knowledge (origin, headers, timeouts, retry and batch policies)
/// lives in the injected [`ScrapeConfig`], so scrapers for different sites
/// or timeout profiles coexist freely.
#[derive(Debug, Clone)]
pub struct SiteScraper {
    config: ScrapeConfig,
    client: RequestClient,
}

impl SiteScraper {
    pub fn new(config: ScrapeConfig) -> Self {
        let client = RequestClient::new(&config.site);
        Self { config, client }
    }

    /// Scraper for the default site profile (VnExpress).
    pub fn with_defaults() -> Self {
        Self::new(ScrapeConfig::default())
    }

    /// Run one full scrape and return its report.
    ///
    /// # Pipeline
    ///
    /// 1. HEAD probe against the site root; failure aborts with a single
    ///    error in the report
    /// 2. Each category in option order, sequentially; a failed category is
    ///    recorded and scanning continues
    /// 3. Keyword filter (case-insensitive substring over title+content)
    /// 4. Truncation to `max_articles`
    /// 5. Finalize counts, success flag, and wall-clock duration
    #[instrument(level = "info", skip_all, fields(categories = options.categories.len()))]
    pub async fn scrape(&self, options: &ScrapeOptions) -> ScrapeReport {
        let start = Instant::now();
        let ceiling = options
            .timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(self.config.timeouts.total);
        let mut report = ScrapeReport::empty();

        info!(base = %self.config.site.base_url, "starting scrape");

        if let Err(e) = self.check_connection().await {
            error!(error = %e, "connectivity check failed; aborting scrape");
            report.errors.push(e.to_string());
            report.duration_ms = start.elapsed().as_millis() as u64;
            return report;
        }

        for category in &options.categories {
            let index_url = self.config.site.category_url(category);
            match scrape_category(&self.client, &self.config, category, options.max_articles).await
            {
                Ok(mut articles) => {
                    info!(%category, count = articles.len(), "category scanned");
                    report.articles.append(&mut articles);
                }
                Err(e) => {
                    let message = format!("category {category} failed: {e}");
                    error!(%category, error = %e, "category scan failed; continuing");
                    report.errors.push(message);
                }
            }
            // attempted regardless of outcome
            report.sources.push(index_url);
        }

        if !options.keywords.is_empty() {
            let before = report.articles.len();
            report.articles = filter_by_keywords(report.articles, &options.keywords);
            info!(
                before,
                after = report.articles.len(),
                "applied keyword filter"
            );
        }

        report.articles.truncate(options.max_articles);
        report.total_found = report.articles.len();
        report.success = report.total_found > 0;
        report.duration_ms = start.elapsed().as_millis() as u64;

        if start.elapsed() > ceiling {
            warn!(
                duration_ms = report.duration_ms,
                ceiling_ms = ceiling.as_millis() as u64,
                "scrape exceeded its advisory time ceiling"
            );
        }
        info!(
            success = report.success,
            total_found = report.total_found,
            errors = report.errors.len(),
            duration_ms = report.duration_ms,
            "scrape complete"
        );
        report
    }

    /// Probe the site root with a short dedicated timeout, retried under
    /// the normal policy. Failure is terminal for the whole scrape.
    async fn check_connection(&self) -> Result<(), ScrapeError> {
        let url = self.config.site.base_url.as_str();
        with_retry(&self.config.retry, || {
            self.client.head(url, self.config.timeouts.connect)
        })
        .await
        .map_err(|e| ScrapeError::Connectivity {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Keep only articles whose title or content contains at least one keyword,
/// case-insensitively.
fn filter_by_keywords(articles: Vec<Article>, keywords: &[String]) -> Vec<Article> {
    let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    articles
        .into_iter()
        .filter(|article| {
            let haystack = format!("{} {}", article.title, article.content).to_lowercase();
            needles.iter().any(|needle| haystack.contains(needle))
        })
        .collect()
}
