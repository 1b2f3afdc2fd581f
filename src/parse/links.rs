//! Anchor and hreflang extraction.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::models::{HreflangTag, Link};
use crate::utils::{compile_selector, non_empty, normalize_whitespace};

const ANCHOR_SELECTOR_STR: &str = "a[href]";
const HREFLANG_SELECTOR_STR: &str = "link[hreflang]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));
static HREFLANG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(HREFLANG_SELECTOR_STR, "HREFLANG_SELECTOR"));

/// Extracts every `<a href>` and classifies it against the host of `base_url`.
pub fn extract_links(document: &Html, base_url: &str) -> Vec<Link> {
    let host = base_host(base_url);
    if host.is_none() {
        log::debug!("Base URL '{base_url}' has no host; only relative links count as internal");
    }

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            let anchor = element.value();
            let href = anchor.attr("href")?.trim();
            let (is_internal, is_external) = classify_href(href, host.as_deref());
            Some(Link {
                href: href.to_string(),
                text: normalize_whitespace(&element.text().collect::<String>()),
                rel: anchor.attr("rel").and_then(non_empty),
                target: anchor.attr("target").and_then(non_empty),
                is_internal,
                is_external,
            })
        })
        .collect()
}

/// Lowercased host of `base_url`, if it parses and has one.
pub fn base_host(base_url: &str) -> Option<String> {
    Url::parse(base_url)
        .ok()?
        .host_str()
        .map(|host| host.to_ascii_lowercase())
}

/// Returns `(is_internal, is_external)` for an `href`.
///
/// Internal: starts with `/` or `#`, or textually contains the page's host.
/// External: anything else with an absolute `http(s)://` scheme.
/// Other targets (`mailto:`, `tel:`, `javascript:`, bare relative paths) are neither.
pub fn classify_href(href: &str, host: Option<&str>) -> (bool, bool) {
    let lower = href.to_ascii_lowercase();
    let is_internal = href.starts_with('/')
        || href.starts_with('#')
        || host.is_some_and(|host| !host.is_empty() && lower.contains(host));
    let is_external =
        !is_internal && (lower.starts_with("http://") || lower.starts_with("https://"));
    (is_internal, is_external)
}

/// Extracts every `<link hreflang>`; missing attributes become empty strings.
pub fn extract_hreflang_tags(document: &Html) -> Vec<HreflangTag> {
    document
        .select(&HREFLANG_SELECTOR)
        .map(|element| {
            let link = element.value();
            HreflangTag {
                hreflang: link.attr("hreflang").unwrap_or_default().trim().to_string(),
                href: link.attr("href").unwrap_or_default().trim().to_string(),
            }
        })
        .collect()
}
