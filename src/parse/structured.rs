//! Structured data detection.
//!
//! Two sources are inspected:
//! - JSON-LD (`<script type="application/ld+json">`), parsed with `serde_json`
//! - Microdata `itemtype` attributes
//!
//! A malformed JSON-LD block is logged and skipped. Type names are not
//! deduplicated.

use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

use crate::config::MAX_LOGGED_JSON_LD_CHARS;
use crate::utils::{compile_selector, truncate_chars};

const SCRIPT_SELECTOR_STR: &str = "script[type]";
const ITEMTYPE_SELECTOR_STR: &str = "[itemtype]";
const JSON_LD_MIME: &str = "application/ld+json";

static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(SCRIPT_SELECTOR_STR, "SCRIPT_SELECTOR"));
static ITEMTYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(ITEMTYPE_SELECTOR_STR, "ITEMTYPE_SELECTOR"));

/// Structured data markers found in a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredData {
    /// At least one JSON-LD block parsed or one `itemtype` is present
    pub has_structured_data: bool,
    /// Schema types from JSON-LD `@type` and microdata `itemtype`
    pub types: Vec<String>,
}

pub fn extract_structured_data(document: &Html) -> StructuredData {
    let mut data = StructuredData::default();

    for script in document.select(&SCRIPT_SELECTOR) {
        let is_json_ld = script
            .value()
            .attr("type")
            .is_some_and(is_json_ld_mime);
        if !is_json_ld {
            continue;
        }

        let raw: String = script.text().collect();
        match serde_json::from_str::<Value>(strip_wrappers(&raw)) {
            Ok(value) => {
                data.has_structured_data = true;
                collect_schema_types(&value, &mut data.types);
            }
            Err(e) => {
                log::debug!(
                    "Skipping malformed JSON-LD block ({e}): {}",
                    truncate_chars(raw.trim(), MAX_LOGGED_JSON_LD_CHARS)
                );
            }
        }
    }

    for element in document.select(&ITEMTYPE_SELECTOR) {
        let Some(itemtype) = element.value().attr("itemtype") else {
            continue;
        };
        for type_url in itemtype.split_whitespace() {
            data.has_structured_data = true;
            if let Some(name) = schema_type_name(type_url) {
                data.types.push(name);
            }
        }
    }

    data
}

/// `type` attribute names JSON-LD; media-type parameters are ignored.
fn is_json_ld_mime(mime: &str) -> bool {
    mime.split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON_LD_MIME))
}

/// Removes the HTML comment / CDATA wrappers some CMSs put around JSON-LD,
/// plus a trailing semicolon.
fn strip_wrappers(raw: &str) -> &str {
    let mut json = raw.trim();
    for (open, close) in [("<!--", "-->"), ("<![CDATA[", "]]>"), ("//<![CDATA[", "//]]>")] {
        if let Some(inner) = json.strip_prefix(open).and_then(|s| s.strip_suffix(close)) {
            json = inner.trim();
        }
    }
    json.trim_end_matches(';').trim_end()
}

/// Collects `@type` values, descending into arrays and `@graph`.
fn collect_schema_types(value: &Value, types: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_schema_types(item, types);
            }
        }
        Value::Object(map) => {
            match map.get("@type") {
                Some(Value::String(type_name)) => types.push(type_name.clone()),
                Some(Value::Array(type_names)) => types.extend(
                    type_names
                        .iter()
                        .filter_map(Value::as_str)
                        .map(String::from),
                ),
                _ => {}
            }
            if let Some(graph) = map.get("@graph") {
                collect_schema_types(graph, types);
            }
        }
        _ => {}
    }
}

/// `https://schema.org/Product` → `Product`
fn schema_type_name(type_url: &str) -> Option<String> {
    type_url
        .trim_end_matches('/')
        .rsplit(['/', '#'])
        .next()
        .filter(|name| !name.is_empty())
        .map(String::from)
}
