//! Image alt text check.

use crate::config::{
    IMAGE_ALT_MAX_LENGTH, IMAGE_ALT_TOO_LONG_PENALTY, IMAGE_MISSING_ALT_MAX_PENALTY,
    IMAGE_MISSING_ALT_PENALTY,
};
use crate::models::{Image, ValidationResult};
use crate::utils::char_len;

use super::scorecard::Scorecard;

/// Checks that every image carries useful alt text.
///
/// Missing alt text is reported as one issue for the whole page; its penalty
/// grows with the number of affected images up to a cap.
pub fn validate_images(images: &[Image]) -> ValidationResult {
    let mut card = Scorecard::new();

    let missing = images.iter().filter(|image| !image.has_alt_text()).count();
    if missing > 0 {
        let penalty = (missing as i32)
            .saturating_mul(IMAGE_MISSING_ALT_PENALTY)
            .min(IMAGE_MISSING_ALT_MAX_PENALTY);
        card.issue(
            format!(
                "{missing} of {} images are missing alt text",
                images.len()
            ),
            penalty,
        );
    }

    for image in images {
        let Some(alt) = image.alt.as_deref() else {
            continue;
        };
        let length = char_len(alt.trim());
        if length > IMAGE_ALT_MAX_LENGTH {
            card.warning(
                format!(
                    "Alt text of {} is too long ({length} characters, maximum {IMAGE_ALT_MAX_LENGTH})",
                    image.src
                ),
                IMAGE_ALT_TOO_LONG_PENALTY,
            );
        }
    }

    card.finish()
}
