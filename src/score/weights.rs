//! Score weights.
//!
//! The overall score is a weighted sum of fourteen signals; each category
//! sub-score is an independent re-weighting of a subset of them. Every table
//! sums to 1.0.

// Overall
pub const TITLE_WEIGHT: f64 = 0.15;
pub const DESCRIPTION_WEIGHT: f64 = 0.10;
pub const URL_WEIGHT: f64 = 0.05;
pub const H1_WEIGHT: f64 = 0.10;
pub const HEADINGS_WEIGHT: f64 = 0.05;
pub const IMAGES_WEIGHT: f64 = 0.08;
pub const CONTENT_LENGTH_WEIGHT: f64 = 0.15;
pub const CANONICAL_WEIGHT: f64 = 0.05;
pub const STRUCTURED_DATA_WEIGHT: f64 = 0.05;
pub const INTERNAL_LINKS_WEIGHT: f64 = 0.06;
pub const EXTERNAL_LINKS_WEIGHT: f64 = 0.03;
pub const LINKS_WEIGHT: f64 = 0.04;
pub const HREFLANG_WEIGHT: f64 = 0.04;
pub const ROBOTS_WEIGHT: f64 = 0.05;

// Meta category
pub const META_TITLE_WEIGHT: f64 = 0.50;
pub const META_DESCRIPTION_WEIGHT: f64 = 0.35;
pub const META_URL_WEIGHT: f64 = 0.15;

// Content category
pub const CONTENT_LENGTH_SHARE: f64 = 0.40;
pub const CONTENT_H1_SHARE: f64 = 0.30;
pub const CONTENT_HEADINGS_SHARE: f64 = 0.20;
pub const CONTENT_IMAGES_SHARE: f64 = 0.10;

// Technical category
pub const TECHNICAL_CANONICAL_SHARE: f64 = 0.30;
pub const TECHNICAL_ROBOTS_SHARE: f64 = 0.25;
pub const TECHNICAL_STRUCTURED_DATA_SHARE: f64 = 0.25;
pub const TECHNICAL_HREFLANG_SHARE: f64 = 0.20;

// On-page category
pub const ON_PAGE_LINKS_SHARE: f64 = 0.35;
pub const ON_PAGE_INTERNAL_LINKS_SHARE: f64 = 0.25;
pub const ON_PAGE_EXTERNAL_LINKS_SHARE: f64 = 0.15;
pub const ON_PAGE_IMAGES_SHARE: f64 = 0.25;

// Scores substituted for checks that did not run
pub const DEFAULT_CANONICAL_SCORE: f64 = 85.0;
pub const DEFAULT_HREFLANG_SCORE: f64 = 80.0;
pub const DEFAULT_ROBOTS_SCORE: f64 = 100.0;

pub const STRUCTURED_DATA_PRESENT_SCORE: f64 = 100.0;
pub const STRUCTURED_DATA_ABSENT_SCORE: f64 = 50.0;

/// Points per internal link, saturating at 100
pub const INTERNAL_LINK_POINTS: f64 = 10.0;
/// Points per external link, saturating at 100
pub const EXTERNAL_LINK_POINTS: f64 = 20.0;
