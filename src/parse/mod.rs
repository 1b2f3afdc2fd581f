//! Document parser.
//!
//! Turns raw HTML plus the page's URL into a [`ParsedContent`]:
//! - Metadata (title, description, canonical, robots, author, language, viewport)
//! - Headings, images, links and hreflang tags
//! - Visible body text and its word count
//! - Structured data markers (JSON-LD, microdata)
//!
//! Parsing never fails. `html5ever` recovers from any markup, and anything
//! that cannot be read degrades to an empty or `None` field.

mod content;
mod html;
mod links;
mod structured;

use log::debug;
use scraper::Html;

use crate::models::ParsedContent;

// Re-export public API
pub use content::{count_words, extract_body_text, extract_headings, extract_images};
pub use html::{extract_metadata, extract_title};
pub use links::{base_host, classify_href, extract_hreflang_tags, extract_links};
pub use structured::{extract_structured_data, StructuredData};

/// Parses `html` into the content model used by the validators.
///
/// `base_url` is the page's final URL; its host decides which links are
/// internal.
///
/// # Examples
///
/// ```
/// use seo_audit::parse_document;
///
/// let parsed = parse_document(
///     "<html><head><title>Hello</title></head><body><h1>Hi there</h1></body></html>",
///     "https://example.com/",
/// );
/// assert_eq!(parsed.metadata.title.as_deref(), Some("Hello"));
/// assert_eq!(parsed.h1s(), vec!["Hi there".to_string()]);
/// ```
pub fn parse_document(html: &str, base_url: &str) -> ParsedContent {
    let document = Html::parse_document(html);

    let metadata = extract_metadata(&document);
    let headings = extract_headings(&document);
    let images = extract_images(&document);
    let links = extract_links(&document, base_url);
    let hreflang_tags = extract_hreflang_tags(&document);
    let body_text = extract_body_text(&document);
    let word_count = count_words(&body_text);
    let structured = extract_structured_data(&document);

    debug!(
        "Parsed {base_url}: {} headings, {} images, {} links, {} hreflang tags, {} words, {} schema types",
        headings.len(),
        images.len(),
        links.len(),
        hreflang_tags.len(),
        word_count,
        structured.types.len()
    );

    ParsedContent {
        metadata,
        headings,
        images,
        links,
        hreflang_tags,
        body_text,
        word_count,
        has_structured_data: structured.has_structured_data,
        structured_data_types: structured.types,
    }
}
