//! Score aggregation.
//!
//! Combines validator scores and a few page-level signals into an overall
//! score and four category sub-scores. Weights live in [`weights`].

pub mod weights;

use crate::models::{SeoScoreBreakdown, ValidationKind, Validations};

use weights::*;

/// Per-signal scores in `0.0..=100.0`, with defaults applied.
#[derive(Debug, Clone, Copy)]
struct Signals {
    title: f64,
    description: f64,
    url: f64,
    h1: f64,
    headings: f64,
    images: f64,
    content_length: f64,
    canonical: f64,
    structured_data: f64,
    internal_links: f64,
    external_links: f64,
    links: f64,
    hreflang: f64,
    robots: f64,
}

impl Signals {
    fn collect(
        validations: &Validations,
        has_structured_data: bool,
        internal_links: usize,
        external_links: usize,
    ) -> Self {
        let score_or = |kind: ValidationKind, default: f64| {
            validations.score(kind).map_or(default, f64::from)
        };
        let required = |kind: ValidationKind| score_or(kind, 0.0);

        Self {
            title: required(ValidationKind::Title),
            description: required(ValidationKind::Description),
            url: required(ValidationKind::Url),
            h1: required(ValidationKind::H1),
            headings: required(ValidationKind::Headings),
            images: required(ValidationKind::Images),
            content_length: required(ValidationKind::ContentLength),
            canonical: score_or(ValidationKind::Canonical, DEFAULT_CANONICAL_SCORE),
            structured_data: if has_structured_data {
                STRUCTURED_DATA_PRESENT_SCORE
            } else {
                STRUCTURED_DATA_ABSENT_SCORE
            },
            internal_links: link_ramp(internal_links, INTERNAL_LINK_POINTS),
            external_links: link_ramp(external_links, EXTERNAL_LINK_POINTS),
            links: required(ValidationKind::Links),
            hreflang: score_or(ValidationKind::Hreflang, DEFAULT_HREFLANG_SCORE),
            robots: score_or(ValidationKind::Robots, DEFAULT_ROBOTS_SCORE),
        }
    }
}

/// Aggregates validation results into a [`SeoScoreBreakdown`].
///
/// Checks that did not run fall back to neutral defaults (canonical 85,
/// hreflang 80, robots 100); a missing required check scores 0. Link counts
/// are the same counts the validators and recommendations see.
pub fn aggregate(
    validations: &Validations,
    has_structured_data: bool,
    internal_links: usize,
    external_links: usize,
) -> SeoScoreBreakdown {
    let s = Signals::collect(
        validations,
        has_structured_data,
        internal_links,
        external_links,
    );

    SeoScoreBreakdown {
        overall: weighted(&[
            (s.title, TITLE_WEIGHT),
            (s.description, DESCRIPTION_WEIGHT),
            (s.url, URL_WEIGHT),
            (s.h1, H1_WEIGHT),
            (s.headings, HEADINGS_WEIGHT),
            (s.images, IMAGES_WEIGHT),
            (s.content_length, CONTENT_LENGTH_WEIGHT),
            (s.canonical, CANONICAL_WEIGHT),
            (s.structured_data, STRUCTURED_DATA_WEIGHT),
            (s.internal_links, INTERNAL_LINKS_WEIGHT),
            (s.external_links, EXTERNAL_LINKS_WEIGHT),
            (s.links, LINKS_WEIGHT),
            (s.hreflang, HREFLANG_WEIGHT),
            (s.robots, ROBOTS_WEIGHT),
        ]),
        meta: weighted(&[
            (s.title, META_TITLE_WEIGHT),
            (s.description, META_DESCRIPTION_WEIGHT),
            (s.url, META_URL_WEIGHT),
        ]),
        content: weighted(&[
            (s.content_length, CONTENT_LENGTH_SHARE),
            (s.h1, CONTENT_H1_SHARE),
            (s.headings, CONTENT_HEADINGS_SHARE),
            (s.images, CONTENT_IMAGES_SHARE),
        ]),
        technical: weighted(&[
            (s.canonical, TECHNICAL_CANONICAL_SHARE),
            (s.robots, TECHNICAL_ROBOTS_SHARE),
            (s.structured_data, TECHNICAL_STRUCTURED_DATA_SHARE),
            (s.hreflang, TECHNICAL_HREFLANG_SHARE),
        ]),
        on_page: weighted(&[
            (s.links, ON_PAGE_LINKS_SHARE),
            (s.internal_links, ON_PAGE_INTERNAL_LINKS_SHARE),
            (s.external_links, ON_PAGE_EXTERNAL_LINKS_SHARE),
            (s.images, ON_PAGE_IMAGES_SHARE),
        ]),
    }
}

fn link_ramp(count: usize, points_per_link: f64) -> f64 {
    (count as f64 * points_per_link).min(100.0)
}

fn weighted(terms: &[(f64, f64)]) -> u8 {
    let sum: f64 = terms.iter().map(|(score, weight)| score * weight).sum();
    sum.round().clamp(0.0, 100.0) as u8
}
