//! H1 and heading hierarchy checks.

use crate::config::{
    H1_MAX_LENGTH, H1_MIN_LENGTH, H1_MULTIPLE_PENALTY, H1_TOO_LONG_PENALTY, H1_TOO_SHORT_PENALTY,
    HEADING_FIRST_NOT_H1_PENALTY, HEADING_SKIP_PENALTY,
};
use crate::models::{Heading, ValidationResult};
use crate::utils::{char_len, truncate_chars};

use super::scorecard::Scorecard;

const QUOTED_HEADING_CHARS: usize = 40;

/// Checks that the page has exactly one H1 of reasonable length.
pub fn validate_h1(h1s: &[String]) -> ValidationResult {
    let Some(first) = h1s.first() else {
        return ValidationResult::failed("H1 heading is missing");
    };

    let mut card = Scorecard::new();

    if h1s.len() > 1 {
        card.issue(
            format!(
                "Page has multiple H1 headings ({}); use exactly one",
                h1s.len()
            ),
            H1_MULTIPLE_PENALTY,
        );
    }

    let length = char_len(first.trim());
    if length > H1_MAX_LENGTH {
        card.warning(
            format!("H1 is too long ({length} characters, maximum {H1_MAX_LENGTH})"),
            H1_TOO_LONG_PENALTY,
        );
    } else if length < H1_MIN_LENGTH {
        card.warning(
            format!("H1 is too short ({length} characters, minimum {H1_MIN_LENGTH})"),
            H1_TOO_SHORT_PENALTY,
        );
    }

    card.finish()
}

/// Checks that headings start at H1 and never skip a level going down.
pub fn validate_heading_hierarchy(headings: &[Heading]) -> ValidationResult {
    let Some(first) = headings.first() else {
        return ValidationResult::failed("Page has no headings");
    };

    let mut card = Scorecard::new();

    if first.level != 1 {
        card.warning(
            format!("First heading is H{} instead of H1", first.level),
            HEADING_FIRST_NOT_H1_PENALTY,
        );
    }

    for pair in headings.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.level > previous.level.saturating_add(1) {
            card.warning(
                format!(
                    "Heading level skipped: H{} followed by H{} (\"{}\")",
                    previous.level,
                    current.level,
                    truncate_chars(&current.text, QUOTED_HEADING_CHARS)
                ),
                HEADING_SKIP_PENALTY,
            );
        }
    }

    card.finish()
}
