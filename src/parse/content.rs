//! Body content extraction: headings, images and visible text.

use scraper::{Html, Node, Selector};
use std::sync::LazyLock;

use crate::config::NON_CONTENT_ELEMENTS;
use crate::models::{Heading, Image};
use crate::utils::{compile_selector, non_empty, normalize_whitespace};

const HEADING_SELECTOR_STR: &str = "h1, h2, h3, h4, h5, h6";
const IMAGE_SELECTOR_STR: &str = "img";
const BODY_SELECTOR_STR: &str = "body";

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(HEADING_SELECTOR_STR, "HEADING_SELECTOR"));
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(IMAGE_SELECTOR_STR, "IMAGE_SELECTOR"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(BODY_SELECTOR_STR, "BODY_SELECTOR"));

/// Extracts every heading, all levels, in document order.
pub fn extract_headings(document: &Html) -> Vec<Heading> {
    document
        .select(&HEADING_SELECTOR)
        .filter_map(|element| {
            let level = heading_level(element.value().name())?;
            Some(Heading {
                level,
                text: normalize_whitespace(&element.text().collect::<String>()),
                id: element.value().attr("id").and_then(non_empty),
            })
        })
        .collect()
}

fn heading_level(tag: &str) -> Option<u8> {
    tag.strip_prefix('h')?
        .parse::<u8>()
        .ok()
        .filter(|level| (1..=6).contains(level))
}

/// Extracts every `<img>`.
///
/// `alt` keeps the distinction between a missing attribute (`None`) and an
/// empty one (`Some("")`).
pub fn extract_images(document: &Html) -> Vec<Image> {
    document
        .select(&IMAGE_SELECTOR)
        .map(|element| {
            let img = element.value();
            Image {
                src: img.attr("src").map(str::trim).unwrap_or_default().to_string(),
                alt: img.attr("alt").map(normalize_whitespace),
                title: img.attr("title").and_then(non_empty),
                width: parse_dimension(img.attr("width")),
                height: parse_dimension(img.attr("height")),
            }
        })
        .collect()
}

/// Pixel dimension from `width`/`height`; percentages and junk are `None`.
fn parse_dimension(value: Option<&str>) -> Option<u32> {
    value?.trim().trim_end_matches("px").parse().ok()
}

/// Visible body copy, whitespace-normalized.
///
/// Text inside script, style, noscript and embedded-frame elements is dropped.
/// Falls back to the whole document when there is no `<body>`.
pub fn extract_body_text(document: &Html) -> String {
    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut raw = String::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| NON_CONTENT_ELEMENTS.contains(&element.name()))
        });
        if !hidden {
            raw.push_str(text);
            raw.push(' ');
        }
    }

    normalize_whitespace(&raw)
}

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
