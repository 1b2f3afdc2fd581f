//! Audit output: scores, recommendations and the top-level result.

use serde::{Deserialize, Serialize};

use super::content::ParsedContent;
use super::validation::Validations;

/// Overall score plus the four category sub-scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoScoreBreakdown {
    pub overall: u8,
    pub meta: u8,
    pub content: u8,
    pub technical: u8,
    pub on_page: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meta,
    Content,
    Technical,
    Links,
    Images,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// One actionable fix (or confirmation) for the audited page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// `rec-<n>`, unique within one audit only
    pub id: String,
    pub category: Category,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub action: String,
    /// 1 (lowest) to 10 (highest)
    pub priority: u8,
}

/// HTTP status signals that bypass the validators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorFlags {
    #[serde(rename = "has404")]
    pub has_404: bool,
    #[serde(rename = "hasServer")]
    pub has_server: bool,
}

impl HttpErrorFlags {
    pub fn from_status(status_code: u16) -> Self {
        Self {
            has_404: status_code == crate::config::HTTP_STATUS_NOT_FOUND,
            has_server: status_code >= crate::config::HTTP_STATUS_SERVER_ERROR_MIN,
        }
    }
}

/// Complete result of one audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub parsed_content: ParsedContent,
    pub validations: Validations,
    pub scores: SeoScoreBreakdown,
    pub recommendations: Vec<Recommendation>,
    pub h1s: Vec<String>,
    pub errors: HttpErrorFlags,
}

impl AnalysisResult {
    pub fn critical_count(&self) -> usize {
        self.recommendations
            .iter()
            .filter(|rec| rec.severity == Severity::Critical)
            .count()
    }
}

/// Flat persistence view of an audit: the five score columns plus the
/// ordered recommendation array encoded as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub url: String,
    pub status_code: u16,
    pub overall: u8,
    pub meta: u8,
    pub content: u8,
    pub technical: u8,
    pub on_page: u8,
    pub recommendations: String,
}

impl ScoreRow {
    pub fn from_result(
        url: &str,
        status_code: u16,
        result: &AnalysisResult,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            url: url.to_string(),
            status_code,
            overall: result.scores.overall,
            meta: result.scores.meta,
            content: result.scores.content,
            technical: result.scores.technical,
            on_page: result.scores.on_page,
            recommendations: serde_json::to_string(&result.recommendations)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_flags_from_status() {
        assert_eq!(HttpErrorFlags::from_status(200), HttpErrorFlags::default());
        assert!(HttpErrorFlags::from_status(404).has_404);
        assert!(!HttpErrorFlags::from_status(404).has_server);
        assert!(HttpErrorFlags::from_status(500).has_server);
        assert!(HttpErrorFlags::from_status(503).has_server);
        assert!(!HttpErrorFlags::from_status(499).has_server);
    }

    #[test]
    fn test_error_flags_wire_names() {
        let json = serde_json::to_value(HttpErrorFlags::from_status(404)).expect("serializable");
        assert_eq!(json["has404"], true);
        assert_eq!(json["hasServer"], false);
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Technical).expect("serializable"),
            "\"technical\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::Critical).expect("serializable"),
            "\"critical\""
        );
    }
}
