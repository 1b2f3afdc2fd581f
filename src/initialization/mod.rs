//! Process-level initialization for the `seo_audit` binary.
//!
//! The audit core needs no shared resources; the only global set up here is
//! the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
