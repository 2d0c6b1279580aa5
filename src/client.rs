//! Single-attempt HTTP client with hard per-request timeouts.
//!
//! [`RequestClient`] issues one bounded-time request and classifies every
//! failure into the [`ScrapeError`] taxonomy: the deadline cancels the
//! in-flight transfer and surfaces as [`ScrapeError::Timeout`], a non-2xx
//! response becomes [`ScrapeError::HttpStatus`], and transport-level
//! failures become [`ScrapeError::Network`]. No retry logic lives here;
//! that is [`with_retry`]'s job.
//!
//! [`with_retry`]: crate::retry::with_retry

use crate::config::SiteConfig;
use crate::error::ScrapeError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP client carrying the site's headers; one instance per
/// [`SiteScraper`].
///
/// [`SiteScraper`]: crate::coordinator::SiteScraper
#[derive(Debug, Clone)]
pub struct RequestClient {
    http: reqwest::Client,
    headers: HeaderMap,
}

impl RequestClient {
    /// Build a client sending the site's user agent and headers with every
    /// request. Headers that are not valid HTTP are skipped with a warning.
    pub fn new(site: &SiteConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&site.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("vnscrape")),
        );
        for (name, value) in &site.headers {
            let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
                warn!(header = %name, "skipping invalid header name");
                continue;
            };
            let Ok(value) = HeaderValue::from_str(value) else {
                warn!(header = %name, "skipping invalid header value");
                continue;
            };
            headers.insert(name, value);
        }
        Self {
            http: reqwest::Client::new(),
            headers,
        }
    }

    /// Fetch a page body with a hard deadline covering connect, response,
    /// and body download.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_text(&self, url: &str, timeout: Duration) -> Result<String, ScrapeError> {
        let response = self.execute(Method::GET, url, timeout).await?;
        match response.text().await {
            Ok(body) => {
                debug!(bytes = body.len(), "fetched page body");
                Ok(body)
            }
            Err(e) if e.is_timeout() => Err(Self::timeout_error(url, timeout)),
            Err(e) => Err(ScrapeError::Network {
                url: url.to_string(),
                source: e,
            }),
        }
    }

    /// Lightweight existence probe: a HEAD request that only checks the
    /// origin answers with a success status.
    #[instrument(level = "debug", skip(self))]
    pub async fn head(&self, url: &str, timeout: Duration) -> Result<(), ScrapeError> {
        self.execute(Method::HEAD, url, timeout).await.map(|_| ())
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        timeout: Duration,
    ) -> Result<reqwest::Response, ScrapeError> {
        let result = self
            .http
            .request(method, url)
            .headers(self.headers.clone())
            .timeout(timeout)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(Self::status_error(url, response.status())),
            Err(e) if e.is_timeout() => Err(Self::timeout_error(url, timeout)),
            Err(e) => Err(ScrapeError::Network {
                url: url.to_string(),
                source: e,
            }),
        }
    }

    fn status_error(url: &str, status: StatusCode) -> ScrapeError {
        ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        }
    }

    fn timeout_error(url: &str, timeout: Duration) -> ScrapeError {
        ScrapeError::Timeout {
            url: url.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
    }
}
