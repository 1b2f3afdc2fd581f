//! Fixed wording of recommendations.

use crate::models::{ParsedContent, ValidationKind};
use crate::utils::truncate_chars;

const QUOTED_TEXT_CHARS: usize = 80;

/// What to do about a finding of `kind`.
pub(crate) fn action_for(kind: ValidationKind) -> &'static str {
    match kind {
        ValidationKind::Title => {
            "Write a unique, descriptive title of 50-60 characters with the main topic near the start."
        }
        ValidationKind::Description => {
            "Write a meta description of 150-160 characters that summarizes the page and invites the click."
        }
        ValidationKind::Url => {
            "Use short, lowercase, hyphen-separated paths without query parameters for indexable pages."
        }
        ValidationKind::H1 => {
            "Use exactly one H1 of 10-70 characters that states the page's main topic."
        }
        ValidationKind::Headings => {
            "Start with an H1 and nest headings one level at a time (H1, H2, H3)."
        }
        ValidationKind::Images => {
            "Give every meaningful image a short alt text describing its content; keep it under 125 characters."
        }
        ValidationKind::ContentLength => {
            "Expand the main content to at least 300 words of original, useful text."
        }
        ValidationKind::Canonical => {
            "Point the canonical tag at the preferred, absolute URL of this page."
        }
        ValidationKind::Links => {
            "Link to related pages on this site and cite authoritative external sources; fix broken links."
        }
        ValidationKind::Hreflang => {
            "Declare every language version with a valid code and absolute URL, plus an x-default entry."
        }
        ValidationKind::Robots => {
            "Remove noindex/nofollow unless the page should stay out of search results."
        }
    }
}

/// Page context quoted after a finding, when the check has any.
pub(crate) fn context_for(
    kind: ValidationKind,
    parsed: &ParsedContent,
    h1s: &[String],
) -> Option<String> {
    match kind {
        ValidationKind::Title => parsed
            .metadata
            .title
            .as_deref()
            .map(|title| format!("Current title: \"{}\"", truncate_chars(title, QUOTED_TEXT_CHARS))),
        ValidationKind::Description => parsed.metadata.description.as_deref().map(|description| {
            format!(
                "Current description: \"{}\"",
                truncate_chars(description, QUOTED_TEXT_CHARS)
            )
        }),
        ValidationKind::H1 if !h1s.is_empty() => Some(format!(
            "Current H1 headings: {}",
            h1s.iter()
                .map(|h1| format!("\"{}\"", truncate_chars(h1, QUOTED_TEXT_CHARS)))
                .collect::<Vec<_>>()
                .join(", ")
        )),
        ValidationKind::ContentLength => Some(format!("Word count: {}", parsed.word_count)),
        ValidationKind::Canonical => parsed
            .metadata
            .canonical_url
            .as_deref()
            .map(|canonical| format!("Current canonical: {canonical}")),
        ValidationKind::Robots => parsed
            .metadata
            .robots
            .as_deref()
            .map(|robots| format!("Robots meta: \"{robots}\"")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metadata;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_kind_has_an_action() {
        for kind in ValidationKind::iter() {
            assert!(action_for(kind).ends_with('.'), "{kind:?}");
        }
    }

    #[test]
    fn test_context_quotes_page_values() {
        let parsed = ParsedContent {
            metadata: Metadata {
                title: Some("Home".into()),
                ..Default::default()
            },
            word_count: 42,
            ..Default::default()
        };
        assert_eq!(
            context_for(ValidationKind::Title, &parsed, &[]).as_deref(),
            Some("Current title: \"Home\"")
        );
        assert_eq!(
            context_for(ValidationKind::ContentLength, &parsed, &[]).as_deref(),
            Some("Word count: 42")
        );
        assert_eq!(context_for(ValidationKind::Description, &parsed, &[]), None);
        assert_eq!(context_for(ValidationKind::H1, &parsed, &[]), None);
    }

    #[test]
    fn test_h1_context_lists_all_h1s() {
        let h1s = vec!["One".to_string(), "Two".to_string()];
        assert_eq!(
            context_for(ValidationKind::H1, &ParsedContent::default(), &h1s).as_deref(),
            Some("Current H1 headings: \"One\", \"Two\"")
        );
    }
}
