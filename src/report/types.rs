//! Report record types.

use serde::Serialize;

use crate::models::{AnalysisResult, ScrapedContent};

/// One audited page as written to a report: the audit result plus the URL
/// and status it was fetched with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditedPage {
    pub url: String,
    pub status_code: u16,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl AuditedPage {
    pub fn new(scraped: &ScrapedContent, result: AnalysisResult) -> Self {
        Self {
            url: scraped.final_url.clone(),
            status_code: scraped.status_code,
            result,
        }
    }
}
