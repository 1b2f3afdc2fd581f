//! Structured content model derived from a parsed document.

use serde::{Deserialize, Serialize};

/// Page-level metadata. Every field is `None` when the tag is absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
    pub robots: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
    pub viewport: Option<String>,
}

/// A heading element (`h1`..`h6`) in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// 1 through 6
    pub level: u8,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub src: String,
    /// `Some("")` for `alt=""`, `None` when the attribute is missing
    pub alt: Option<String>,
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Image {
    pub fn has_alt_text(&self) -> bool {
        self.alt.as_deref().is_some_and(|alt| !alt.trim().is_empty())
    }
}

/// An anchor with an `href`, classified relative to the page's host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub href: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub is_internal: bool,
    pub is_external: bool,
}

/// `<link rel="alternate" hreflang=".." href="..">`; missing attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HreflangTag {
    pub hreflang: String,
    pub href: String,
}

/// Everything the validators need to know about a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContent {
    pub metadata: Metadata,
    pub headings: Vec<Heading>,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    pub hreflang_tags: Vec<HreflangTag>,
    pub body_text: String,
    pub word_count: usize,
    pub has_structured_data: bool,
    pub structured_data_types: Vec<String>,
}

impl ParsedContent {
    /// Text of every H1, in document order.
    pub fn h1s(&self) -> Vec<String> {
        self.headings
            .iter()
            .filter(|heading| heading.level == 1)
            .map(|heading| heading.text.clone())
            .collect()
    }

    pub fn link_counts(&self) -> LinkCounts {
        LinkCounts::from_links(&self.links)
    }
}

/// Internal/external link totals, computed once per audit and shared by the
/// validators, the aggregator and the recommendation generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

impl LinkCounts {
    pub fn new(internal: usize, external: usize) -> Self {
        Self { internal, external }
    }

    pub fn from_links(links: &[Link]) -> Self {
        links.iter().fold(Self::default(), |mut counts, link| {
            if link.is_internal {
                counts.internal += 1;
            } else if link.is_external {
                counts.external += 1;
            }
            counts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, text: &str) -> Heading {
        Heading {
            level,
            text: text.to_string(),
            id: None,
        }
    }

    #[test]
    fn test_h1s_keeps_document_order() {
        let parsed = ParsedContent {
            headings: vec![
                heading(1, "First"),
                heading(2, "Sub"),
                heading(1, "Second"),
            ],
            ..Default::default()
        };
        assert_eq!(parsed.h1s(), vec!["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn test_link_counts_ignore_unclassified_links() {
        let links = vec![
            Link {
                href: "/about".into(),
                is_internal: true,
                ..Default::default()
            },
            Link {
                href: "https://other.org".into(),
                is_external: true,
                ..Default::default()
            },
            Link {
                href: "mailto:me@example.com".into(),
                ..Default::default()
            },
        ];
        assert_eq!(LinkCounts::from_links(&links), LinkCounts::new(1, 1));
    }

    #[test]
    fn test_image_alt_text() {
        let mut image = Image::default();
        assert!(!image.has_alt_text());
        image.alt = Some("   ".into());
        assert!(!image.has_alt_text());
        image.alt = Some("A red bicycle".into());
        assert!(image.has_alt_text());
    }
}
