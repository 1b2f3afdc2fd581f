//! Data model shared by every stage of the audit pipeline.
//!
//! Every value here is created fresh for one audit and never mutated after the
//! stage that produced it returns:
//! - [`ScrapedContent`]: fetcher output, the only input of an audit
//! - [`ParsedContent`]: structured view of the document
//! - [`ValidationResult`] / [`Validations`]: per-check outcomes
//! - [`SeoScoreBreakdown`], [`Recommendation`], [`AnalysisResult`]: audit output

mod analysis;
mod content;
mod input;
mod validation;

pub use analysis::{
    AnalysisResult, Category, HttpErrorFlags, Recommendation, ScoreRow, SeoScoreBreakdown,
    Severity,
};
pub use content::{Heading, HreflangTag, Image, Link, LinkCounts, Metadata, ParsedContent};
pub use input::ScrapedContent;
pub use validation::{ValidationKind, ValidationResult, Validations};
