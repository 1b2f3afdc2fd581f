//! Error types of the driver layer.
//!
//! The audit pipeline degrades instead of failing: malformed markup, unparsable
//! URLs and missing tags all surface as validator issues or warnings. Only the
//! surrounding driver (logger setup, reading input files) can fail, with:
//! - [`InitializationError`] for logger setup
//! - [`InputError`] for unreadable or malformed input

mod types;

// Re-export public API
pub use types::{InitializationError, InputError};
