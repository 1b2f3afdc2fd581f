//! Error type definitions.
//!
//! The audit core itself never fails; these errors belong to the driver layer
//! (logger setup and reading input).

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while turning CLI input into [`crate::ScrapedContent`] values.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file (or stdin) could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A fetcher record is not valid JSON for the fetcher contract.
    #[error("Malformed fetcher record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A `--header` value without a `NAME:VALUE` shape.
    #[error("Invalid header '{0}' (expected NAME:VALUE)")]
    InvalidHeader(String),

    /// HTML input was given without `--url`.
    #[error("--url is required when auditing an HTML file")]
    MissingUrl,

    /// The input contained no records.
    #[error("No pages to audit in {0}")]
    Empty(String),
}
