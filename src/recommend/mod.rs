//! Recommendation generation.
//!
//! Turns HTTP error flags, validation results and page-level signals into an
//! ordered list of [`Recommendation`]s. Candidates are collected in a fixed
//! evaluation order, stably sorted by priority (highest first), then numbered
//! `rec-1..rec-n` in output order.

mod catalog;

use std::cmp::Reverse;

use log::debug;

use crate::config::{
    OK_SCORE_THRESHOLD, PRIORITY_CANONICAL_MISSING, PRIORITY_FEW_INTERNAL_LINKS,
    PRIORITY_HTTP_ERROR, PRIORITY_ISSUE, PRIORITY_NO_EXTERNAL_LINKS, PRIORITY_OK,
    PRIORITY_STRUCTURED_DATA_MISSING, PRIORITY_WARNING, RECOMMENDED_MIN_INTERNAL_LINKS,
};
use crate::models::{
    Category, HttpErrorFlags, LinkCounts, ParsedContent, Recommendation, Severity,
    ValidationKind, ValidationResult, Validations,
};

use catalog::{action_for, context_for};

/// A recommendation before it is ordered and numbered.
#[derive(Debug)]
struct Candidate {
    category: Category,
    severity: Severity,
    title: String,
    description: String,
    action: String,
    priority: u8,
}

impl Candidate {
    fn new(
        category: Category,
        severity: Severity,
        priority: u8,
        title: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            title: title.into(),
            description: description.into(),
            action: action.into(),
            priority,
        }
    }

    fn into_recommendation(self, position: usize) -> Recommendation {
        Recommendation {
            id: format!("rec-{}", position + 1),
            category: self.category,
            severity: self.severity,
            title: self.title,
            description: self.description,
            action: self.action,
            priority: self.priority,
        }
    }
}

/// Builds the ordered recommendation list for one audited page.
///
/// `h1s` and `link_counts` must be the values the validators saw.
pub fn generate(
    validations: &Validations,
    parsed: &ParsedContent,
    h1s: &[String],
    link_counts: LinkCounts,
    errors: HttpErrorFlags,
) -> Vec<Recommendation> {
    let mut candidates = Vec::new();

    http_error_candidates(errors, &mut candidates);

    if !validations.contains(ValidationKind::Canonical) {
        candidates.push(Candidate::new(
            Category::Technical,
            Severity::Critical,
            PRIORITY_CANONICAL_MISSING,
            "Add a canonical tag",
            "The page declares no canonical URL, so search engines may index duplicate versions of it.",
            "Add <link rel=\"canonical\" href=\"...\"> pointing at the preferred URL of this page.",
        ));
    }

    for (kind, result) in validations.iter() {
        validation_candidates(kind, result, parsed, h1s, &mut candidates);
    }

    structured_data_candidate(parsed, &mut candidates);
    link_candidates(link_counts, &mut candidates);

    // sort_by_key is stable: equal priorities keep evaluation order
    candidates.sort_by_key(|candidate| Reverse(candidate.priority));

    let recommendations: Vec<Recommendation> = candidates
        .into_iter()
        .enumerate()
        .map(|(position, candidate)| candidate.into_recommendation(position))
        .collect();

    debug!(
        "Generated {} recommendations ({} critical)",
        recommendations.len(),
        recommendations
            .iter()
            .filter(|rec| rec.severity == Severity::Critical)
            .count()
    );

    recommendations
}

fn http_error_candidates(errors: HttpErrorFlags, candidates: &mut Vec<Candidate>) {
    if errors.has_404 {
        candidates.push(Candidate::new(
            Category::Technical,
            Severity::Critical,
            PRIORITY_HTTP_ERROR,
            "Page returns 404 Not Found",
            "The URL responds with HTTP 404, so it cannot be indexed and links to it are wasted.",
            "Restore the page or 301-redirect the URL to its closest live replacement, then update internal links.",
        ));
    }
    if errors.has_server {
        candidates.push(Candidate::new(
            Category::Technical,
            Severity::Critical,
            PRIORITY_HTTP_ERROR,
            "Page returns a server error",
            "The URL responds with an HTTP 5xx status; repeated server errors get pages dropped from the index.",
            "Check server logs and fix the failing handler or upstream dependency.",
        ));
    }
}

fn validation_candidates(
    kind: ValidationKind,
    result: &ValidationResult,
    parsed: &ParsedContent,
    h1s: &[String],
    candidates: &mut Vec<Candidate>,
) {
    let label = kind.label();
    let describe = |finding: &str| match context_for(kind, parsed, h1s) {
        Some(context) => format!("{finding}. {context}"),
        None => format!("{finding}."),
    };

    if !result.issues.is_empty() {
        for issue in &result.issues {
            candidates.push(Candidate::new(
                kind.category(),
                Severity::Critical,
                PRIORITY_ISSUE,
                format!("Fix {}", label.to_lowercase()),
                describe(issue),
                action_for(kind),
            ));
        }
    } else if !result.warnings.is_empty() {
        for warning in &result.warnings {
            candidates.push(Candidate::new(
                kind.category(),
                Severity::Warning,
                PRIORITY_WARNING,
                format!("Improve {}", label.to_lowercase()),
                describe(warning),
                action_for(kind),
            ));
        }
    } else if result.is_valid && result.score >= OK_SCORE_THRESHOLD {
        candidates.push(Candidate::new(
            kind.category(),
            Severity::Info,
            PRIORITY_OK,
            format!("{label} OK"),
            format!("{label} passed with a score of {}.", result.score),
            "No action needed.",
        ));
    }
}

fn structured_data_candidate(parsed: &ParsedContent, candidates: &mut Vec<Candidate>) {
    if parsed.has_structured_data {
        let types = if parsed.structured_data_types.is_empty() {
            "untyped markup".to_string()
        } else {
            parsed.structured_data_types.join(", ")
        };
        candidates.push(Candidate::new(
            Category::Technical,
            Severity::Info,
            PRIORITY_OK,
            "Structured data OK",
            format!("Structured data found: {types}."),
            "No action needed.",
        ));
    } else {
        candidates.push(Candidate::new(
            Category::Technical,
            Severity::Warning,
            PRIORITY_STRUCTURED_DATA_MISSING,
            "Add structured data",
            "No JSON-LD or microdata was found, so the page is not eligible for rich results.",
            "Describe the page with schema.org JSON-LD (for example Article, Product or Organization).",
        ));
    }
}

fn link_candidates(link_counts: LinkCounts, candidates: &mut Vec<Candidate>) {
    if link_counts.internal < RECOMMENDED_MIN_INTERNAL_LINKS {
        candidates.push(Candidate::new(
            Category::Links,
            Severity::Warning,
            PRIORITY_FEW_INTERNAL_LINKS,
            "Add more internal links",
            format!(
                "The page has {} internal links; at least {RECOMMENDED_MIN_INTERNAL_LINKS} help crawlers and readers find related content.",
                link_counts.internal
            ),
            "Link to related pages on this site with descriptive anchor text.",
        ));
    } else {
        candidates.push(Candidate::new(
            Category::Links,
            Severity::Info,
            PRIORITY_OK,
            "Internal linking OK",
            format!("The page has {} internal links.", link_counts.internal),
            "No action needed.",
        ));
    }

    if link_counts.external == 0 {
        candidates.push(Candidate::new(
            Category::Links,
            Severity::Info,
            PRIORITY_NO_EXTERNAL_LINKS,
            "Consider linking to external sources",
            "The page has no external links.",
            "Cite authoritative external sources where they support the content.",
        ));
    } else {
        candidates.push(Candidate::new(
            Category::Links,
            Severity::Info,
            PRIORITY_OK,
            "External links OK",
            format!("The page has {} external links.", link_counts.external),
            "No action needed.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn all_perfect() -> Validations {
        ValidationKind::iter()
            .map(|kind| (kind, ValidationResult::perfect()))
            .collect()
    }

    fn healthy_page() -> ParsedContent {
        ParsedContent {
            has_structured_data: true,
            structured_data_types: vec!["Article".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_healthy_page_only_gets_ok_notes() {
        let recs = generate(
            &all_perfect(),
            &healthy_page(),
            &[],
            LinkCounts::new(5, 2),
            HttpErrorFlags::default(),
        );
        // 11 checks + structured data + internal + external
        assert_eq!(recs.len(), 14);
        assert!(recs.iter().all(|rec| rec.severity == Severity::Info));
        assert!(recs.iter().all(|rec| rec.priority == PRIORITY_OK));
        assert_eq!(recs[0].title, "Title tag OK");
    }

    #[test]
    fn test_404_comes_first() {
        let recs = generate(
            &Validations::new(),
            &ParsedContent::default(),
            &[],
            LinkCounts::default(),
            HttpErrorFlags::from_status(404),
        );
        assert_eq!(recs[0].priority, 10);
        assert_eq!(recs[0].category, Category::Technical);
        assert_eq!(recs[0].title, "Page returns 404 Not Found");
        // canonical is absent, so it follows at the same priority
        assert_eq!(recs[1].title, "Add a canonical tag");
    }

    #[test]
    fn test_server_error() {
        let recs = generate(
            &all_perfect(),
            &healthy_page(),
            &[],
            LinkCounts::new(5, 2),
            HttpErrorFlags::from_status(503),
        );
        assert_eq!(recs[0].severity, Severity::Critical);
        assert_eq!(recs[0].title, "Page returns a server error");
    }

    #[test]
    fn test_issues_outrank_warnings_and_keep_kind_order() {
        let mut validations = all_perfect();
        validations.insert(
            ValidationKind::Robots,
            ValidationResult::new(vec!["robots issue".into()], vec![], 50),
        );
        validations.insert(
            ValidationKind::Title,
            ValidationResult::new(vec!["title issue".into()], vec!["ignored".into()], 50),
        );
        validations.insert(
            ValidationKind::Url,
            ValidationResult::new(vec![], vec!["url warning".into()], 90),
        );
        let recs = generate(
            &validations,
            &healthy_page(),
            &[],
            LinkCounts::new(5, 2),
            HttpErrorFlags::default(),
        );
        assert_eq!(recs[0].description, "title issue.");
        assert_eq!(recs[0].category, Category::Meta);
        assert_eq!(recs[1].description, "robots issue.");
        assert_eq!(recs[2].description, "url warning.");
        assert_eq!(recs[2].severity, Severity::Warning);
        assert!(recs.iter().all(|rec| rec.description != "ignored."));
    }

    #[test]
    fn test_low_scoring_clean_check_gets_no_ok() {
        let mut validations = all_perfect();
        validations.insert(
            ValidationKind::Images,
            ValidationResult::new(vec![], vec![], 70),
        );
        let recs = generate(
            &validations,
            &healthy_page(),
            &[],
            LinkCounts::new(5, 2),
            HttpErrorFlags::default(),
        );
        assert!(recs.iter().all(|rec| rec.category != Category::Images));
    }

    #[test]
    fn test_link_and_structured_data_signals() {
        let recs = generate(
            &all_perfect(),
            &ParsedContent::default(),
            &[],
            LinkCounts::new(1, 0),
            HttpErrorFlags::default(),
        );
        let by_title = |title: &str| {
            recs.iter()
                .find(|rec| rec.title == title)
                .unwrap_or_else(|| panic!("missing {title}"))
        };
        assert_eq!(by_title("Add structured data").priority, 5);
        assert_eq!(by_title("Add more internal links").priority, 4);
        assert_eq!(by_title("Consider linking to external sources").priority, 2);
    }

    #[test]
    fn test_ids_are_sequential_and_priorities_non_increasing() {
        let mut validations = all_perfect();
        validations.insert(ValidationKind::H1, ValidationResult::failed("H1 heading is missing"));
        let recs = generate(
            &validations,
            &ParsedContent::default(),
            &[],
            LinkCounts::default(),
            HttpErrorFlags::from_status(500),
        );
        for (index, rec) in recs.iter().enumerate() {
            assert_eq!(rec.id, format!("rec-{}", index + 1));
        }
        assert!(recs.windows(2).all(|pair| pair[0].priority >= pair[1].priority));
    }

    #[test]
    fn test_descriptions_quote_page_context() {
        let mut validations = all_perfect();
        validations.insert(
            ValidationKind::H1,
            ValidationResult::new(vec!["Page has multiple H1 headings (2); use exactly one".into()], vec![], 60),
        );
        let h1s = vec!["First".to_string(), "Second".to_string()];
        let recs = generate(
            &validations,
            &healthy_page(),
            &h1s,
            LinkCounts::new(5, 2),
            HttpErrorFlags::default(),
        );
        assert_eq!(
            recs[0].description,
            "Page has multiple H1 headings (2); use exactly one. Current H1 headings: \"First\", \"Second\""
        );
    }
}
