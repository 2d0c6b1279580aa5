//! Article field extraction from page markup.
//!
//! [`parse_article`] is a pure function: markup and source URL in,
//! [`Article`] or `None` out. It performs no I/O, so its whole test suite
//! runs against literal HTML fixtures. The selectors target VnExpress's
//! article markup (`div.fck_detail` content blocks, `span.time` timestamps,
//! `p.author` bylines, `img.thumb` thumbnails, `a.tag` topic links).
//!
//! A page missing its title or content block yields `None`: a partially
//! parsed article is discarded entirely rather than surfaced with missing
//! core fields. Category and id come from the URL alone, which keeps them
//! stable even when content markup changes.

use crate::models::Article;
use chrono::Utc;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector is valid"));
static CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.fck_detail").expect("content selector is valid"));
static TIME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.time").expect("time selector is valid"));
static AUTHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.author").expect("author selector is valid"));
static THUMB_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img.thumb").expect("thumbnail selector is valid"));
static TAG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.tag").expect("tag selector is valid"));

/// Parse one article page into an [`Article`], or `None` when the page has
/// no extractable title or content.
pub fn parse_article(html: &str, url: &str) -> Option<Article> {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(collapsed_text)
        .filter(|t| !t.is_empty())?;
    let content = document
        .select(&CONTENT_SELECTOR)
        .next()
        .map(collapsed_text)
        .filter(|c| !c.is_empty())?;

    let published_at = document
        .select(&TIME_SELECTOR)
        .next()
        .map(collapsed_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| Utc::now().to_rfc3339());
    let author = document
        .select(&AUTHOR_SELECTOR)
        .next()
        .map(collapsed_text)
        .unwrap_or_default();
    let image_url = document
        .select(&THUMB_SELECTOR)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);
    let tags: Vec<String> = document
        .select(&TAG_SELECTOR)
        .map(collapsed_text)
        .filter(|t| !t.is_empty())
        .collect();

    debug!(%url, title = %title, tags = tags.len(), "parsed article");

    Some(Article {
        id: article_id(url),
        title,
        url: url.to_string(),
        content,
        published_at,
        category: category_from_url(url),
        tags,
        author,
        image_url,
    })
}

/// Deterministic article id: the final URL path segment with a trailing
/// `.html` stripped. The same URL always maps to the same id.
///
/// The suffix is fixed, like the selectors above: this parser targets
/// VnExpress's article markup and URL shape, and `.html` is the
/// [`SiteConfig`] default the extractor feeds it from. A segment without
/// the suffix is kept whole, so ids stay stable for other URL shapes too.
///
/// [`SiteConfig`]: crate::config::SiteConfig
pub fn article_id(url: &str) -> String {
    let slug = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .trim_end_matches(".html");
    if slug.is_empty() {
        url.to_string()
    } else {
        slug.to_string()
    }
}

/// Category of an article, taken from the first URL path segment. Pages at
/// the site root fall back to `"unknown"`.
pub fn category_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.find(|s| !s.is_empty()))
                .map(str::to_string)
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// All text under an element, tag-stripped and whitespace-collapsed.
fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_URL: &str = "https://vnexpress.net/kinh-doanh/gia-vang-tang-manh-4783921.html";

    fn full_fixture() -> &'static str {
        r#"<html>
            <head><title>  Giá vàng tăng mạnh  </title></head>
            <body>
                <span class="time">Thứ năm, 21/8/2025, 09:00</span>
                <p class="author">Anh Minh</p>
                <img src="https://i1-kinhdoanh.vnecdn.net/thumb.jpg" class="thumb lazy"/>
                <div class="fck_detail">
                    <p>Giá vàng miếng sáng nay tăng mạnh.</p>
                    <p>Giới phân tích dự báo đà tăng còn kéo dài.</p>
                </div>
                <a class="tag" href="/tag/vang"> vàng </a>
                <a class="tag" href="/tag/gia-vang">giá vàng</a>
            </body>
        </html>"#
    }

    #[test]
    fn test_parses_all_fields() {
        let article = parse_article(full_fixture(), ARTICLE_URL).unwrap();
        assert_eq!(article.id, "gia-vang-tang-manh-4783921");
        assert_eq!(article.title, "Giá vàng tăng mạnh");
        assert_eq!(
            article.content,
            "Giá vàng miếng sáng nay tăng mạnh. Giới phân tích dự báo đà tăng còn kéo dài."
        );
        assert_eq!(article.published_at, "Thứ năm, 21/8/2025, 09:00");
        assert_eq!(article.author, "Anh Minh");
        assert_eq!(article.category, "kinh-doanh");
        assert_eq!(article.tags, vec!["vàng", "giá vàng"]);
        assert_eq!(
            article.image_url.as_deref(),
            Some("https://i1-kinhdoanh.vnecdn.net/thumb.jpg")
        );
    }

    #[test]
    fn test_missing_title_yields_none() {
        let html = r#"<html><body>
            <div class="fck_detail"><p>Nội dung.</p></div>
        </body></html>"#;
        assert!(parse_article(html, ARTICLE_URL).is_none());
    }

    #[test]
    fn test_missing_content_block_yields_none() {
        let html = r#"<html>
            <head><title>Chỉ có tiêu đề</title></head>
            <body><p>Không có khối nội dung.</p></body>
        </html>"#;
        assert!(parse_article(html, ARTICLE_URL).is_none());
    }

    #[test]
    fn test_empty_content_block_yields_none() {
        let html = r#"<html>
            <head><title>Tiêu đề</title></head>
            <body><div class="fck_detail">   </div></body>
        </html>"#;
        assert!(parse_article(html, ARTICLE_URL).is_none());
    }

    #[test]
    fn test_date_falls_back_to_now_and_author_to_empty() {
        let html = r#"<html>
            <head><title>Tiêu đề</title></head>
            <body><div class="fck_detail"><p>Nội dung bài viết.</p></div></body>
        </html>"#;
        let article = parse_article(html, ARTICLE_URL).unwrap();
        // RFC 3339 fallback from the scrape clock
        assert!(article.published_at.contains('T'));
        assert!(article.author.is_empty());
        assert!(article.tags.is_empty());
        assert!(article.image_url.is_none());
    }

    #[test]
    fn test_id_is_deterministic_per_url() {
        let first = parse_article(full_fixture(), ARTICLE_URL).unwrap();
        let second = parse_article(full_fixture(), ARTICLE_URL).unwrap();
        assert_eq!(first.id, second.id);

        let other = parse_article(
            full_fixture(),
            "https://vnexpress.net/the-gioi/hoi-nghi-4783100.html",
        )
        .unwrap();
        assert_ne!(first.id, other.id);
        assert_eq!(other.id, "hoi-nghi-4783100");
        assert_eq!(other.category, "the-gioi");
    }

    #[test]
    fn test_id_strips_only_the_html_suffix() {
        assert_eq!(
            article_id("https://vnexpress.net/kinh-doanh/bai-viet-4783921.html"),
            "bai-viet-4783921"
        );
        // segments without the article suffix are kept whole
        assert_eq!(
            article_id("https://vnexpress.net/kinh-doanh/bai-viet-4783921"),
            "bai-viet-4783921"
        );
        assert_eq!(
            article_id("https://vnexpress.net/kinh-doanh/bai.v2.html"),
            "bai.v2"
        );
    }

    #[test]
    fn test_category_from_root_url_is_unknown() {
        assert_eq!(category_from_url("https://vnexpress.net/"), "unknown");
        assert_eq!(category_from_url("not a url"), "unknown");
    }
}
