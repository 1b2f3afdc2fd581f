//! Penalty accumulator shared by all validators.

use crate::config::MAX_SCORE;
use crate::models::ValidationResult;

/// Collects findings and penalties for one check.
///
/// Every check starts at [`MAX_SCORE`]; [`Scorecard::finish`] clamps the
/// result into `0..=100`.
#[derive(Debug)]
pub(crate) struct Scorecard {
    issues: Vec<String>,
    warnings: Vec<String>,
    score: i32,
}

impl Scorecard {
    pub(crate) fn new() -> Self {
        Self {
            issues: Vec::new(),
            warnings: Vec::new(),
            score: MAX_SCORE,
        }
    }

    pub(crate) fn issue(&mut self, message: impl Into<String>, penalty: i32) {
        self.issues.push(message.into());
        self.score -= penalty;
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>, penalty: i32) {
        self.warnings.push(message.into());
        self.score -= penalty;
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult::new(self.issues, self.warnings, self.score)
    }
}
