//! Audit orchestration.
//!
//! Wires the pipeline together for one fetched page:
//! parse → validate → aggregate → flag HTTP errors → recommend.

use log::info;

use crate::config::AuditOptions;
use crate::models::{AnalysisResult, HttpErrorFlags, ScrapedContent};
use crate::parse::parse_document;
use crate::recommend::generate;
use crate::score::aggregate;
use crate::validate::validate_all;

/// Audits a fetched page with default options.
///
/// # Examples
///
/// ```
/// use seo_audit::{run_audit, ScrapedContent};
///
/// let page = ScrapedContent::new("<html><head><title>Hi</title></head></html>", 404, "https://example.com/x");
/// let result = run_audit(&page);
/// assert!(result.errors.has_404);
/// assert_eq!(result.recommendations[0].priority, 10);
/// ```
pub fn run_audit(scraped: &ScrapedContent) -> AnalysisResult {
    run_audit_with(scraped, &AuditOptions::default())
}

/// Audits a fetched page.
///
/// Never fails and performs no I/O; the same input always produces the same
/// result.
pub fn run_audit_with(scraped: &ScrapedContent, options: &AuditOptions) -> AnalysisResult {
    let parsed_content = parse_document(&scraped.html, &scraped.final_url);

    let h1s = parsed_content.h1s();
    let link_counts = parsed_content.link_counts();

    let validations = validate_all(&parsed_content, scraped, &h1s, link_counts, options);
    let scores = aggregate(
        &validations,
        parsed_content.has_structured_data,
        link_counts.internal,
        link_counts.external,
    );
    let errors = HttpErrorFlags::from_status(scraped.status_code);
    let recommendations = generate(&validations, &parsed_content, &h1s, link_counts, errors);

    info!(
        "Audited {} (HTTP {}): overall {}, {} recommendations",
        scraped.final_url,
        scraped.status_code,
        scores.overall,
        recommendations.len()
    );

    AnalysisResult {
        parsed_content,
        validations,
        scores,
        recommendations,
        h1s,
        errors,
    }
}
