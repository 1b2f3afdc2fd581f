//! Validator battery.
//!
//! Eleven independent checks, each a pure function that starts from a perfect
//! score, subtracts penalties and clamps into `0..=100`:
//! - Title and meta description
//! - URL structure
//! - H1 and heading hierarchy
//! - Image alt text and content length
//! - Canonical, links, hreflang and robots directives
//!
//! [`validate_all`] runs the battery the way an audit needs it. Canonical,
//! hreflang and robots only run when the page carries the relevant markup
//! (robots also runs under [`RobotsPolicy::Fail`] so the failure is reported).

mod canonical;
mod content;
mod headings;
mod hreflang;
mod images;
mod links;
mod meta;
mod robots;
mod scorecard;
mod url;

use log::debug;
use strum::IntoEnumIterator;

use crate::config::{AuditOptions, RobotsPolicy, ROBOTS_HEADER};
use crate::models::{LinkCounts, ParsedContent, ScrapedContent, ValidationKind, Validations};

// Re-export public API
pub use canonical::validate_canonical;
pub use content::validate_content_length;
pub use headings::{validate_h1, validate_heading_hierarchy};
pub use hreflang::validate_hreflang;
pub use images::validate_images;
pub use links::validate_links;
pub use meta::{validate_description, validate_title};
pub use robots::validate_robots;
pub use self::url::validate_url;

/// Runs every applicable check against a parsed page.
///
/// `h1s` and `link_counts` are derived once by the caller and shared with
/// the aggregator and the recommendation generator.
pub fn validate_all(
    parsed: &ParsedContent,
    scraped: &ScrapedContent,
    h1s: &[String],
    link_counts: LinkCounts,
    options: &AuditOptions,
) -> Validations {
    let metadata = &parsed.metadata;
    let mut validations = Validations::new();

    validations.insert(
        ValidationKind::Title,
        validate_title(metadata.title.as_deref()),
    );
    validations.insert(
        ValidationKind::Description,
        validate_description(metadata.description.as_deref()),
    );
    validations.insert(ValidationKind::Url, validate_url(&scraped.final_url));
    validations.insert(ValidationKind::H1, validate_h1(h1s));
    validations.insert(
        ValidationKind::Headings,
        validate_heading_hierarchy(&parsed.headings),
    );
    validations.insert(ValidationKind::Images, validate_images(&parsed.images));
    validations.insert(
        ValidationKind::ContentLength,
        validate_content_length(parsed.word_count),
    );

    let broken_links =
        (!options.broken_links.is_empty()).then_some(options.broken_links.as_slice());
    validations.insert(
        ValidationKind::Links,
        validate_links(link_counts, broken_links),
    );

    if let Some(canonical) = metadata.canonical_url.as_deref() {
        validations.insert(
            ValidationKind::Canonical,
            validate_canonical(Some(canonical), &scraped.final_url),
        );
    }

    if !parsed.hreflang_tags.is_empty() {
        validations.insert(
            ValidationKind::Hreflang,
            validate_hreflang(&parsed.hreflang_tags),
        );
    }

    let directives = robots_directives(
        metadata.robots.as_deref(),
        scraped.header(ROBOTS_HEADER),
    );
    if directives.is_some() || options.robots_policy == RobotsPolicy::Fail {
        validations.insert(
            ValidationKind::Robots,
            validate_robots(directives.as_deref(), options.robots_policy),
        );
    }

    let skipped: Vec<ValidationKind> = ValidationKind::iter()
        .filter(|kind| !validations.contains(*kind))
        .collect();
    debug!(
        "Validated {}: {} checks, {} with findings, skipped {:?}",
        scraped.final_url,
        validations.len(),
        validations
            .iter()
            .filter(|(_, result)| result.has_findings())
            .count(),
        skipped
    );

    validations
}

/// Merges the robots meta tag with the `X-Robots-Tag` header.
fn robots_directives(meta: Option<&str>, header: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [meta, header]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}
