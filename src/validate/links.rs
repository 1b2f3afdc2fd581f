//! Internal/external link balance check.

use crate::config::{
    LINKS_BROKEN_PENALTY, LINKS_FEW_INTERNAL_PENALTY, LINKS_NO_EXTERNAL_PENALTY,
    LINKS_NO_INTERNAL_PENALTY, RECOMMENDED_MIN_INTERNAL_LINKS,
};
use crate::models::{LinkCounts, ValidationResult};

use super::scorecard::Scorecard;

/// Checks link counts and, when the caller knows them, broken links.
///
/// Reachability is never tested here; `broken_links` comes from whoever
/// fetched the page.
pub fn validate_links(counts: LinkCounts, broken_links: Option<&[String]>) -> ValidationResult {
    let mut card = Scorecard::new();

    if counts.internal == 0 {
        card.warning("Page has no internal links", LINKS_NO_INTERNAL_PENALTY);
    } else if counts.internal < RECOMMENDED_MIN_INTERNAL_LINKS {
        card.warning(
            format!(
                "Page has only {} internal links (recommended at least {RECOMMENDED_MIN_INTERNAL_LINKS})",
                counts.internal
            ),
            LINKS_FEW_INTERNAL_PENALTY,
        );
    }

    if counts.external == 0 {
        card.warning("Page has no external links", LINKS_NO_EXTERNAL_PENALTY);
    }

    for link in broken_links.unwrap_or_default() {
        card.issue(format!("Broken link: {link}"), LINKS_BROKEN_PENALTY);
    }

    card.finish()
}
