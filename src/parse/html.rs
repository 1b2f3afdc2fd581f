//! Page metadata extraction.
//!
//! This module reads the head-level signals of a document:
//! - Page title
//! - Meta description, robots, author and viewport
//! - Canonical link
//! - Document language

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::Metadata;
use crate::utils::{compile_selector, non_empty};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_SELECTOR_STR: &str = "meta";
const LINK_REL_SELECTOR_STR: &str = "link[rel]";
const HTML_LANG_SELECTOR_STR: &str = "html[lang]";

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(META_SELECTOR_STR, "META_SELECTOR"));
static LINK_REL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(LINK_REL_SELECTOR_STR, "LINK_REL_SELECTOR"));
static HTML_LANG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(HTML_LANG_SELECTOR_STR, "HTML_LANG_SELECTOR"));

/// Extracts page metadata from a parsed document.
///
/// Meta names are matched case-insensitively and the first occurrence of each
/// tag wins. Values are whitespace-normalized; empty values are `None`.
pub fn extract_metadata(document: &Html) -> Metadata {
    let title = extract_title(document);
    log::debug!("Extracted title: {title:?}");

    let mut metadata = Metadata {
        title,
        canonical_url: extract_canonical(document),
        ..Default::default()
    };
    let mut content_language = None;

    for element in document.select(&META_SELECTOR) {
        let element = element.value();
        let content = element.attr("content").and_then(non_empty);

        if let Some(name) = element.attr("name") {
            let slot = match name.trim().to_ascii_lowercase().as_str() {
                "description" => &mut metadata.description,
                "robots" => &mut metadata.robots,
                "author" => &mut metadata.author,
                "viewport" => &mut metadata.viewport,
                _ => continue,
            };
            if slot.is_none() {
                *slot = content;
            }
        } else if element
            .attr("http-equiv")
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("content-language"))
            && content_language.is_none()
        {
            content_language = content;
        }
    }

    metadata.language = document
        .select(&HTML_LANG_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("lang"))
        .and_then(non_empty)
        .or(content_language);

    metadata
}

/// Text of the first HTML `<title>`, or `None` when absent or blank.
///
/// SVG and MathML `<title>` elements describe embedded graphics, not the
/// document, and are skipped.
pub fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .find(|element| &*element.value().name.ns == HTML_NAMESPACE)
        .and_then(|element| non_empty(&element.text().collect::<String>()))
}

/// `href` of the first `<link>` whose `rel` token list contains `canonical`.
fn extract_canonical(document: &Html) -> Option<String> {
    document
        .select(&LINK_REL_SELECTOR)
        .filter(|element| {
            element.value().attr("rel").is_some_and(|rel| {
                rel.split_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            })
        })
        .find_map(|element| element.value().attr("href").and_then(non_empty))
}
