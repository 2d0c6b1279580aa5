//! Error taxonomy for the scraping pipeline.
//!
//! Every failure a request can produce is classified into one of the
//! variants below so callers (and the retry layer) can tell a slow origin
//! from a broken one. Parse failures are deliberately *not* errors: a page
//! that fetched fine but has no extractable title/body yields `None` from
//! the parser and the article is skipped.

use thiserror::Error;

/// Classified failures produced by the request client and the coordinator.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request did not complete within its allotted time and the
    /// in-flight operation was cancelled.
    #[error("request timed out after {timeout_ms}ms: {url}")]
    Timeout { url: String, timeout_ms: u64 },

    /// The origin answered with a non-2xx status.
    #[error("HTTP {status} {status_text}: {url}")]
    HttpStatus {
        url: String,
        status: u16,
        status_text: String,
    },

    /// Low-level transport failure: DNS, refused connection, TLS, etc.
    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upfront site-reachability probe failed. Fatal for the whole
    /// scrape; recorded once in the report and nothing else is attempted.
    #[error("cannot reach {url}: {reason}")]
    Connectivity { url: String, reason: String },
}
