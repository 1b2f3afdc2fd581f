//! Hreflang annotation check.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    HREFLANG_CODE_PATTERN, HREFLANG_INCOMPLETE_PENALTY, HREFLANG_INVALID_CODE_PENALTY,
    HREFLANG_MISSING_PENALTY, HREFLANG_NO_X_DEFAULT_PENALTY, HREFLANG_X_DEFAULT,
};
use crate::models::{HreflangTag, ValidationResult};

use super::scorecard::Scorecard;

static HREFLANG_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HREFLANG_CODE_PATTERN).unwrap_or_else(|e| {
        panic!("Failed to compile hreflang code regex (programming error): {e}")
    })
});

/// Checks hreflang tags for completeness, valid codes and an `x-default`.
pub fn validate_hreflang(tags: &[HreflangTag]) -> ValidationResult {
    let mut card = Scorecard::new();

    if tags.is_empty() {
        card.warning("No hreflang tags found", HREFLANG_MISSING_PENALTY);
        return card.finish();
    }

    let is_x_default = |code: &str| code.eq_ignore_ascii_case(HREFLANG_X_DEFAULT);

    if !tags.iter().any(|tag| is_x_default(tag.hreflang.trim())) {
        card.warning(
            "Hreflang set has no x-default entry",
            HREFLANG_NO_X_DEFAULT_PENALTY,
        );
    }

    for tag in tags {
        let code = tag.hreflang.trim();
        if code.is_empty() || tag.href.trim().is_empty() {
            card.issue(
                format!(
                    "Hreflang tag is incomplete (hreflang=\"{}\", href=\"{}\")",
                    tag.hreflang, tag.href
                ),
                HREFLANG_INCOMPLETE_PENALTY,
            );
        } else if !is_x_default(code) && !HREFLANG_CODE.is_match(code) {
            card.issue(
                format!("Invalid hreflang code \"{code}\""),
                HREFLANG_INVALID_CODE_PENALTY,
            );
        }
    }

    card.finish()
}
