//! Audit configuration and constants.
//!
//! This module provides:
//! - Thresholds, penalties and recommendation priorities
//! - CLI option types and parsing
//! - Library-level audit options

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{AuditOptions, Config, FailOn, LogFormat, LogLevel, OutputFormat, RobotsPolicy};
