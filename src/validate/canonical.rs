//! Canonical tag check.

use url::Url;

use crate::config::{
    CANONICAL_MALFORMED_PENALTY, CANONICAL_MISMATCH_PENALTY, CANONICAL_MISSING_PENALTY,
};
use crate::models::ValidationResult;

use super::scorecard::Scorecard;

/// Checks the canonical URL against the URL the page was served from.
///
/// Relative canonicals are resolved against `current_url`. Fragments and a
/// trailing slash do not count as a difference.
pub fn validate_canonical(canonical: Option<&str>, current_url: &str) -> ValidationResult {
    let mut card = Scorecard::new();

    let Some(canonical) = canonical.map(str::trim).filter(|c| !c.is_empty()) else {
        card.warning("Canonical tag is missing", CANONICAL_MISSING_PENALTY);
        return card.finish();
    };

    let current = Url::parse(current_url.trim()).ok();
    let resolved = match &current {
        Some(base) => base.join(canonical),
        None => Url::parse(canonical),
    };

    match resolved {
        Ok(resolved) => {
            let current_key = current
                .map(|url| comparison_key(&url))
                .unwrap_or_else(|| current_url.trim().trim_end_matches('/').to_string());
            if comparison_key(&resolved) != current_key {
                card.warning(
                    format!("Canonical URL points to a different page ({resolved})"),
                    CANONICAL_MISMATCH_PENALTY,
                );
            }
        }
        Err(e) => {
            card.issue(
                format!("Canonical URL \"{canonical}\" is malformed: {e}"),
                CANONICAL_MALFORMED_PENALTY,
            );
        }
    }

    card.finish()
}

fn comparison_key(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.as_str().trim_end_matches('/').to_string()
}
