//! Shared helpers for parsing and reporting.
//!
//! This module provides:
//! - Compilation of the parser's static CSS selectors
//! - Whitespace normalization and character-based length checks

mod selector;
mod text;

pub use selector::compile_selector;
pub use text::{char_len, non_empty, normalize_whitespace, truncate_chars};
