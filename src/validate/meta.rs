//! Title and meta description checks.

use crate::config::{
    DESCRIPTION_IDEAL_MIN_LENGTH, DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH,
    DESCRIPTION_SUBOPTIMAL_PENALTY, DESCRIPTION_TOO_LONG_PENALTY, DESCRIPTION_TOO_SHORT_PENALTY,
    GENERIC_TITLES, TITLE_GENERIC_PENALTY, TITLE_IDEAL_MIN_LENGTH, TITLE_MAX_LENGTH,
    TITLE_MIN_LENGTH, TITLE_SUBOPTIMAL_PENALTY, TITLE_TOO_LONG_PENALTY, TITLE_TOO_SHORT_PENALTY,
};
use crate::models::ValidationResult;
use crate::utils::char_len;

use super::scorecard::Scorecard;

/// Checks the `<title>` text.
///
/// Lengths are counted in characters on the trimmed title. A missing or blank
/// title scores 0 with a single issue.
pub fn validate_title(title: Option<&str>) -> ValidationResult {
    let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) else {
        return ValidationResult::failed("Title tag is missing");
    };

    let mut card = Scorecard::new();
    let length = char_len(title);

    if length < TITLE_MIN_LENGTH {
        card.issue(
            format!("Title is too short ({length} characters, minimum {TITLE_MIN_LENGTH})"),
            TITLE_TOO_SHORT_PENALTY,
        );
    } else if length > TITLE_MAX_LENGTH {
        card.issue(
            format!("Title is too long ({length} characters, maximum {TITLE_MAX_LENGTH})"),
            TITLE_TOO_LONG_PENALTY,
        );
    } else if length < TITLE_IDEAL_MIN_LENGTH {
        card.warning(
            format!(
                "Title could be longer ({length} characters, ideally {TITLE_IDEAL_MIN_LENGTH}-{TITLE_MAX_LENGTH})"
            ),
            TITLE_SUBOPTIMAL_PENALTY,
        );
    }

    if GENERIC_TITLES
        .iter()
        .any(|generic| generic.eq_ignore_ascii_case(title))
    {
        card.warning(
            format!("Title \"{title}\" is generic and does not describe the page"),
            TITLE_GENERIC_PENALTY,
        );
    }

    card.finish()
}

/// Checks the meta description text.
pub fn validate_description(description: Option<&str>) -> ValidationResult {
    let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) else {
        return ValidationResult::failed("Meta description is missing");
    };

    let mut card = Scorecard::new();
    let length = char_len(description);

    if length < DESCRIPTION_MIN_LENGTH {
        card.issue(
            format!(
                "Meta description is too short ({length} characters, minimum {DESCRIPTION_MIN_LENGTH})"
            ),
            DESCRIPTION_TOO_SHORT_PENALTY,
        );
    } else if length > DESCRIPTION_MAX_LENGTH {
        card.issue(
            format!(
                "Meta description is too long ({length} characters, maximum {DESCRIPTION_MAX_LENGTH})"
            ),
            DESCRIPTION_TOO_LONG_PENALTY,
        );
    } else if length < DESCRIPTION_IDEAL_MIN_LENGTH {
        card.warning(
            format!(
                "Meta description could be longer ({length} characters, ideally {DESCRIPTION_IDEAL_MIN_LENGTH}-{DESCRIPTION_MAX_LENGTH})"
            ),
            DESCRIPTION_SUBOPTIMAL_PENALTY,
        );
    }

    card.finish()
}
