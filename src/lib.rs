//! seo_audit library: on-page SEO auditing of fetched web pages
//!
//! This library turns the HTML of a single fetched page into a numeric score
//! and a prioritized list of fixes. The pipeline is synchronous and pure:
//!
//! 1. [`parse_document`] builds a structured content model from raw HTML
//! 2. The validator battery ([`validate_all`]) runs eleven independent checks
//! 3. [`aggregate`] combines them into an overall score and four categories
//! 4. [`generate`] turns findings into ordered [`Recommendation`]s
//!
//! [`run_audit`] wires the stages together. Fetching pages, persisting results
//! and rendering them are left to the caller.
//!
//! # Example
//!
//! ```
//! use seo_audit::{run_audit, ScrapedContent, Severity};
//!
//! let page = ScrapedContent::new(
//!     "<html><head><title>Short</title></head><body><h1>Hello</h1></body></html>",
//!     200,
//!     "https://example.com/hello",
//! );
//!
//! let result = run_audit(&page);
//! assert!(result.scores.overall < 100);
//! assert!(result
//!     .recommendations
//!     .iter()
//!     .any(|rec| rec.severity == Severity::Critical));
//! ```

mod audit;
pub mod config;
mod error_handling;
pub mod initialization;
mod models;
pub mod parse;
pub mod recommend;
pub mod report;
mod run;
pub mod score;
mod utils;
pub mod validate;

// Re-export public API
pub use audit::{run_audit, run_audit_with};
pub use config::{AuditOptions, Config, FailOn, LogFormat, LogLevel, OutputFormat, RobotsPolicy};
pub use error_handling::{InitializationError, InputError};
pub use models::{
    AnalysisResult, Category, Heading, HreflangTag, HttpErrorFlags, Image, Link, LinkCounts,
    Metadata, ParsedContent, Recommendation, ScoreRow, ScrapedContent, SeoScoreBreakdown, Severity,
    ValidationKind, ValidationResult, Validations,
};
pub use parse::parse_document;
pub use recommend::generate;
pub use run::{run_cli, AuditReport};
pub use score::aggregate;
pub use validate::{
    validate_all, validate_canonical, validate_content_length, validate_description, validate_h1,
    validate_heading_hierarchy, validate_hreflang, validate_images, validate_links,
    validate_robots, validate_title, validate_url,
};
