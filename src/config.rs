//! Scrape configuration: target site, timeouts, retry and batching policies.
//!
//! Configuration is an explicit value threaded into [`SiteScraper`] at
//! construction time rather than a process-wide singleton, so multiple
//! configurations (different target sites, different timeout profiles) can
//! coexist and be tested independently.
//!
//! The defaults mirror VnExpress: a 15 second connectivity probe, 60 second
//! reads, 3 retry attempts with a 2 second base delay doubling each attempt,
//! and batches of 5 articles with a 1 second pause between batches.
//!
//! [`SiteScraper`]: crate::coordinator::SiteScraper

use std::time::Duration;
use url::Url;

/// Browser-like user agent sent with every request to avoid being served a
/// degraded (or blocked) response.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// The news site being scraped: base origin, request headers, and the URL
/// shape of its article pages.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base origin of the site, e.g. `https://vnexpress.net`.
    pub base_url: Url,
    /// User agent string sent with every request.
    pub user_agent: String,
    /// Additional request headers (name, value) sent with every request.
    pub headers: Vec<(String, String)>,
    /// Suffix article page paths carry, e.g. `.html`. Links without it are
    /// not treated as articles.
    pub page_suffix: String,
    /// Category path segments scanned when the caller does not specify any.
    pub default_categories: Vec<String>,
}

impl SiteConfig {
    /// Absolute URL of a category index page.
    pub fn category_url(&self, category: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            category.trim_start_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://vnexpress.net").expect("default base URL is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: vec![
                (
                    "Accept".to_string(),
                    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                        .to_string(),
                ),
                (
                    "Accept-Language".to_string(),
                    "vi-VN,vi;q=0.9,en;q=0.8".to_string(),
                ),
                ("Upgrade-Insecure-Requests".to_string(), "1".to_string()),
                ("Cache-Control".to_string(), "no-cache".to_string()),
                ("Pragma".to_string(), "no-cache".to_string()),
            ],
            page_suffix: ".html".to_string(),
            default_categories: vec![
                "kinh-doanh".to_string(),
                "the-gioi".to_string(),
                "the-thao".to_string(),
                "giai-tri".to_string(),
            ],
        }
    }
}

/// Per-step time limits.
///
/// `total` is an advisory ceiling for a whole scrape: it is reported against
/// but not enforced as a single hard deadline, since each network step is
/// already bounded by `connect` or `read`.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    /// Limit for the upfront HEAD reachability probe.
    pub connect: Duration,
    /// Limit for fetching a category index or an article page.
    pub read: Duration,
    /// Advisory ceiling for a whole scrape.
    pub total: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(15),
            read: Duration::from_secs(60),
            total: Duration::from_secs(120),
        }
    }
}

/// Exponential backoff settings for [`with_retry`].
///
/// [`with_retry`]: crate::retry::with_retry
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total invocations of the operation, including the first.
    pub max_attempts: usize,
    /// Delay after the first failed attempt.
    pub base_delay: Duration,
    /// Factor the delay grows by with each further failure.
    pub multiplier: u32,
}

impl RetryPolicy {
    /// Delay applied after failed attempt `attempt` (1-based):
    /// `base_delay * multiplier^(attempt - 1)`.
    pub fn delay_for(&self, attempt: usize) -> Duration {
        let exp = attempt.saturating_sub(1) as u32;
        self.base_delay
            .saturating_mul(self.multiplier.saturating_pow(exp))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            multiplier: 2,
        }
    }
}

/// Bounded fan-out settings for article fetching within one category.
#[derive(Debug, Clone, Copy)]
pub struct BatchPolicy {
    /// Peak number of concurrent in-flight article requests.
    pub size: usize,
    /// Pause between batches (not after the last) to throttle request rate
    /// to the origin.
    pub delay: Duration,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            size: 5,
            delay: Duration::from_secs(1),
        }
    }
}

/// Everything one [`SiteScraper`] needs: the target site plus resilience
/// policies.
///
/// [`SiteScraper`]: crate::coordinator::SiteScraper
#[derive(Debug, Clone, Default)]
pub struct ScrapeConfig {
    pub site: SiteConfig,
    pub timeouts: Timeouts,
    pub retry: RetryPolicy,
    pub batch: BatchPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_targets_vnexpress() {
        let site = SiteConfig::default();
        assert_eq!(site.base_url.host_str(), Some("vnexpress.net"));
        assert_eq!(site.page_suffix, ".html");
        assert_eq!(site.default_categories.len(), 4);
    }

    #[test]
    fn test_category_url_joins_cleanly() {
        let site = SiteConfig::default();
        assert_eq!(
            site.category_url("kinh-doanh"),
            "https://vnexpress.net/kinh-doanh"
        );
        assert_eq!(
            site.category_url("/the-gioi"),
            "https://vnexpress.net/the-gioi"
        );
    }

    #[test]
    fn test_backoff_progression() {
        let policy = RetryPolicy {
            max_attempts: 4,
            base_delay: Duration::from_millis(2000),
            multiplier: 2,
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(4000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(8000));
    }

    #[test]
    fn test_default_timeouts_match_site_profile() {
        let t = Timeouts::default();
        assert_eq!(t.connect, Duration::from_secs(15));
        assert_eq!(t.read, Duration::from_secs(60));
        assert_eq!(t.total, Duration::from_secs(120));
    }
}
