//! URL structure check.

use url::Url;

use crate::config::{
    URL_MAX_LENGTH, URL_PATH_ALLOWED_CHARS, URL_QUERY_PENALTY, URL_SPECIAL_CHARS_PENALTY,
    URL_TOO_LONG_PENALTY, URL_UNDERSCORE_PENALTY, URL_UPPERCASE_PENALTY,
};
use crate::models::ValidationResult;
use crate::utils::char_len;

use super::scorecard::Scorecard;

/// Checks the page URL for length, query strings and path hygiene.
///
/// Only the path is inspected for characters; the parser has already
/// percent-encoded anything outside ASCII, which is reported as a special
/// character.
pub fn validate_url(url: &str) -> ValidationResult {
    let parsed = match Url::parse(url.trim()) {
        Ok(parsed) => parsed,
        Err(e) => return ValidationResult::failed(format!("URL could not be parsed: {e}")),
    };

    let mut card = Scorecard::new();

    let length = char_len(url.trim());
    if length > URL_MAX_LENGTH {
        card.warning(
            format!("URL is too long ({length} characters, maximum {URL_MAX_LENGTH})"),
            URL_TOO_LONG_PENALTY,
        );
    }

    if parsed.query().is_some_and(|query| !query.is_empty()) {
        card.warning("URL contains query parameters", URL_QUERY_PENALTY);
    }

    let path = parsed.path();
    if path.contains('_') {
        card.warning(
            "URL path uses underscores; prefer hyphens between words",
            URL_UNDERSCORE_PENALTY,
        );
    }
    if path.chars().any(|c| c.is_ascii_uppercase()) {
        card.warning("URL path contains uppercase letters", URL_UPPERCASE_PENALTY);
    }
    if path
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !URL_PATH_ALLOWED_CHARS.contains(&c))
    {
        card.warning(
            "URL path contains special characters",
            URL_SPECIAL_CHARS_PENALTY,
        );
    }

    card.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url() {
        assert_eq!(
            validate_url("https://example.com/guides/rust-ownership"),
            ValidationResult::perfect()
        );
    }

    #[test]
    fn test_unparsable_url() {
        let result = validate_url("not a url");
        assert_eq!(result.score, 0);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].starts_with("URL could not be parsed"));
    }

    #[test]
    fn test_query_and_underscore() {
        let result = validate_url("https://example.com/my_page?ref=nav");
        assert!(result.is_valid);
        assert_eq!(result.score, 85);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_empty_query_is_ignored() {
        assert_eq!(validate_url("https://example.com/page?").score, 100);
    }

    #[test]
    fn test_uppercase_and_special_characters() {
        let result = validate_url("https://example.com/About%20Us");
        assert_eq!(result.score, 80);
        assert!(result.warnings.iter().any(|w| w.contains("uppercase")));
        assert!(result.warnings.iter().any(|w| w.contains("special")));
    }

    #[test]
    fn test_uppercase_host_is_not_flagged() {
        assert_eq!(validate_url("https://EXAMPLE.com/page").score, 100);
    }

    #[test]
    fn test_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(100));
        let result = validate_url(&url);
        assert_eq!(result.score, 90);
        assert!(result.warnings[0].contains("too long"));
    }
}
