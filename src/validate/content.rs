//! Content length check.

use crate::config::{
    CONTENT_CRITICAL_MIN_WORDS, CONTENT_CRITICAL_PENALTY, CONTENT_MIN_WORDS, CONTENT_THIN_PENALTY,
};
use crate::models::ValidationResult;

use super::scorecard::Scorecard;

/// Checks the body word count against thin-content thresholds.
pub fn validate_content_length(word_count: usize) -> ValidationResult {
    let mut card = Scorecard::new();

    if word_count < CONTENT_MIN_WORDS {
        card.warning(
            format!("Content is thin ({word_count} words, recommended at least {CONTENT_MIN_WORDS})"),
            CONTENT_THIN_PENALTY,
        );
    }
    if word_count < CONTENT_CRITICAL_MIN_WORDS {
        card.issue(
            format!("Content is too short to rank ({word_count} words, minimum {CONTENT_CRITICAL_MIN_WORDS})"),
            CONTENT_CRITICAL_PENALTY,
        );
    }

    card.finish()
}
