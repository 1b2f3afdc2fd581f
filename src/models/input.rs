//! Fetcher output consumed by the audit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fetched page as produced by the (external) fetcher.
///
/// Headers are kept in an ordered map so that an audit of the same value always
/// serializes identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedContent {
    /// Raw HTML body
    pub html: String,
    /// HTTP status of the final response
    pub status_code: u16,
    /// URL after redirects; used as the base URL of the document
    pub final_url: String,
    /// Response headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ScrapedContent {
    pub fn new(html: impl Into<String>, status_code: u16, final_url: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            status_code,
            final_url: final_url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Adds a response header, replacing any previous value under the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Looks up a header by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
