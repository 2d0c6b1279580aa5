//! # vnscrape
//!
//! Resilient scraping core for VnExpress-style news sites. The crate fetches
//! category index pages, extracts article links, and downloads and parses
//! articles in bounded concurrent batches, all under hard per-request
//! timeouts with retried transient failures.
//!
//! ## Features
//!
//! - Hard per-request timeouts that cancel hung transfers
//! - Exponential-backoff retry around every network operation
//! - Bounded concurrency: articles fetched in batches of 5 with an
//!   inter-batch pause to throttle the origin
//! - Best-effort aggregation: one broken article or category never sinks a
//!   scrape; the report carries partial results plus error messages
//! - Selector-based field extraction behind a pure parsing function
//!
//! ## Usage
//!
//! ```no_run
//! use vnscrape::{ScrapeOptions, SiteScraper};
//!
//! # async fn run() {
//! let scraper = SiteScraper::with_defaults();
//! let report = scraper.scrape(&ScrapeOptions::default()).await;
//! println!("{} articles in {}ms", report.total_found, report.duration_ms);
//! # }
//! ```
//!
//! ## Architecture
//!
//! One scrape runs a fixed pipeline:
//! 1. **Probe**: HEAD the site root with a short timeout; unreachable means
//!    an immediate empty report
//! 2. **Scan**: each configured category sequentially: index fetch, link
//!    extraction, then batched concurrent article fetches
//! 3. **Filter**: optional case-insensitive keyword filtering over
//!    title+content
//! 4. **Report**: truncate to the article limit and finalize counts,
//!    errors, sources, and timing
//!
//! The coordinator never returns an error: callers always receive a
//! [`ScrapeReport`] and inspect its `success`, `errors`, and `total_found`
//! fields.

pub mod category;
pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod extract;
pub mod models;
pub mod parse;
pub mod retry;

pub use config::{BatchPolicy, RetryPolicy, ScrapeConfig, SiteConfig, Timeouts};
pub use coordinator::SiteScraper;
pub use error::ScrapeError;
pub use models::{Article, ScrapeOptions, ScrapeReport};
