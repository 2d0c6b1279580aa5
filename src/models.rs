//! Data models for scraped articles, scrape options, and the scrape report.
//!
//! This module defines the structures exchanged with callers:
//! - [`Article`]: one scraped news item, immutable once constructed
//! - [`ScrapeOptions`]: per-invocation configuration (categories, limits,
//!   keyword filters)
//! - [`ScrapeReport`]: the aggregate result of one scrape, including timing
//!   and error information
//!
//! All three serialize to JSON so presentation layers can render or export
//! them directly.

use serde::{Deserialize, Serialize};

/// One scraped news article.
///
/// An `Article` is only constructed when both title and content were
/// extracted; the parser returns nothing rather than a partially populated
/// entity. The `id` is derived deterministically from the source URL, so
/// re-scraping the same URL yields the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Stable identifier derived from the source URL.
    pub id: String,
    /// Article headline. Never empty.
    pub title: String,
    /// The URL the article was scraped from.
    pub url: String,
    /// Body text with HTML stripped and whitespace collapsed. Never empty.
    pub content: String,
    /// Publish timestamp as shown on the page, or the scrape time (RFC 3339)
    /// when the page carried none.
    pub published_at: String,
    /// Category derived from the first URL path segment.
    pub category: String,
    /// Topic tags in page order. May be empty.
    pub tags: Vec<String>,
    /// Byline author. May be empty.
    pub author: String,
    /// Thumbnail image URL, when the page carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Configuration for one scrape invocation.
///
/// Options carry no state between calls; each invocation is independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeOptions {
    /// Category path segments to scan, in order.
    pub categories: Vec<String>,
    /// Maximum number of articles in the final report.
    pub max_articles: usize,
    /// Case-insensitive substring filters applied against title+content.
    /// Empty means no filtering.
    pub keywords: Vec<String>,
    /// Advisory override of the whole-scrape time ceiling, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            categories: vec![
                "kinh-doanh".to_string(),
                "the-gioi".to_string(),
                "the-thao".to_string(),
                "giai-tri".to_string(),
            ],
            max_articles: 50,
            keywords: Vec::new(),
            timeout_ms: None,
        }
    }
}

/// Aggregate result of one scrape invocation.
///
/// `success` is true iff at least one article survived filtering and
/// truncation, and `total_found` always equals `articles.len()` at the time
/// the report is finalized. The report is returned once and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    /// Whether the scrape produced at least one article.
    pub success: bool,
    /// Articles after keyword filtering and truncation.
    pub articles: Vec<Article>,
    /// Length of `articles` when the report was finalized.
    pub total_found: usize,
    /// Human-readable error messages, in the order they occurred.
    pub errors: Vec<String>,
    /// Wall-clock duration of the whole scrape in milliseconds.
    pub duration_ms: u64,
    /// Category index URLs actually attempted, in order.
    pub sources: Vec<String>,
}

impl ScrapeReport {
    /// An empty, not-yet-successful report to accumulate into.
    pub(crate) fn empty() -> Self {
        Self {
            success: false,
            articles: Vec::new(),
            total_found: 0,
            errors: Vec::new(),
            duration_ms: 0,
            sources: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: "gia-vang-hom-nay-4783921".to_string(),
            title: "Giá vàng hôm nay".to_string(),
            url: "https://vnexpress.net/kinh-doanh/gia-vang-hom-nay-4783921.html".to_string(),
            content: "Giá vàng miếng tăng mạnh trong phiên sáng.".to_string(),
            published_at: "Thứ năm, 21/8/2025, 09:00".to_string(),
            category: "kinh-doanh".to_string(),
            tags: vec!["vàng".to_string(), "giá vàng".to_string()],
            author: "Anh Minh".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_article_serialization() {
        let article = sample_article();
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("gia-vang-hom-nay-4783921"));
        assert!(json.contains("kinh-doanh"));
        // image_url is None and should be omitted entirely
        assert!(!json.contains("image_url"));
    }

    #[test]
    fn test_article_roundtrip_with_image() {
        let mut article = sample_article();
        article.image_url = Some("https://i1-kinhdoanh.vnecdn.net/thumb.jpg".to_string());
        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, article.id);
        assert_eq!(
            back.image_url.as_deref(),
            Some("https://i1-kinhdoanh.vnecdn.net/thumb.jpg")
        );
        assert_eq!(back.tags.len(), 2);
    }

    #[test]
    fn test_options_defaults() {
        let options = ScrapeOptions::default();
        assert_eq!(options.categories.len(), 4);
        assert_eq!(options.max_articles, 50);
        assert!(options.keywords.is_empty());
        assert!(options.timeout_ms.is_none());
    }

    #[test]
    fn test_options_deserialization() {
        let json = r#"{
            "categories": ["the-thao"],
            "max_articles": 10,
            "keywords": ["bóng đá"]
        }"#;
        let options: ScrapeOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.categories, vec!["the-thao"]);
        assert_eq!(options.max_articles, 10);
        assert!(options.timeout_ms.is_none());
    }

    #[test]
    fn test_report_serialization() {
        let mut report = ScrapeReport::empty();
        report.articles.push(sample_article());
        report.total_found = 1;
        report.success = true;
        report.duration_ms = 1234;
        report
            .sources
            .push("https://vnexpress.net/kinh-doanh".to_string());

        let json = serde_json::to_string(&report).unwrap();
        let back: ScrapeReport = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert_eq!(back.total_found, 1);
        assert_eq!(back.duration_ms, 1234);
        assert_eq!(back.sources.len(), 1);
    }

    #[test]
    fn test_empty_report_is_unsuccessful() {
        let report = ScrapeReport::empty();
        assert!(!report.success);
        assert_eq!(report.total_found, 0);
        assert!(report.articles.is_empty());
        assert!(report.errors.is_empty());
    }
}
