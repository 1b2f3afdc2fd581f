//! Validation outcomes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::EnumIter;

use super::analysis::Category;

/// Outcome of a single check.
///
/// `is_valid` is true exactly when `issues` is empty and `score` is always in
/// `0..=100`; both hold for every value built through [`ValidationResult::new`],
/// [`ValidationResult::perfect`] or [`ValidationResult::failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub score: u8,
}

impl ValidationResult {
    /// Builds a result from collected problems and a raw (unclamped) score.
    pub fn new(issues: Vec<String>, warnings: Vec<String>, raw_score: i32) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
            warnings,
            score: raw_score.clamp(0, 100) as u8,
        }
    }

    pub fn perfect() -> Self {
        Self::new(Vec::new(), Vec::new(), 100)
    }

    /// A zero-score result carrying a single issue.
    pub fn failed(issue: impl Into<String>) -> Self {
        Self::new(vec![issue.into()], Vec::new(), 0)
    }

    pub fn has_findings(&self) -> bool {
        !self.issues.is_empty() || !self.warnings.is_empty()
    }
}

/// The eleven checks of the validator battery.
///
/// Declaration order is the order in which checks are evaluated when
/// recommendations are generated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ValidationKind {
    Title,
    Description,
    Url,
    H1,
    Headings,
    Images,
    ContentLength,
    Canonical,
    Links,
    Hreflang,
    Robots,
}

impl ValidationKind {
    /// Human-readable name used in recommendation titles.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationKind::Title => "Title tag",
            ValidationKind::Description => "Meta description",
            ValidationKind::Url => "URL structure",
            ValidationKind::H1 => "H1 heading",
            ValidationKind::Headings => "Heading hierarchy",
            ValidationKind::Images => "Image alt text",
            ValidationKind::ContentLength => "Content length",
            ValidationKind::Canonical => "Canonical tag",
            ValidationKind::Links => "Links",
            ValidationKind::Hreflang => "Hreflang tags",
            ValidationKind::Robots => "Robots meta",
        }
    }

    /// Recommendation category a finding of this check belongs to.
    pub fn category(&self) -> Category {
        match self {
            ValidationKind::Title | ValidationKind::Description => Category::Meta,
            ValidationKind::H1 | ValidationKind::Headings | ValidationKind::ContentLength => {
                Category::Content
            }
            ValidationKind::Url
            | ValidationKind::Canonical
            | ValidationKind::Robots
            | ValidationKind::Hreflang => Category::Technical,
            ValidationKind::Images => Category::Images,
            ValidationKind::Links => Category::Links,
        }
    }

    /// Optional checks only run when the page carries the relevant markup;
    /// the aggregator substitutes a neutral score when they are absent.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            ValidationKind::Canonical | ValidationKind::Hreflang | ValidationKind::Robots
        )
    }
}

/// Named map of validation results, ordered by [`ValidationKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Validations(BTreeMap<ValidationKind, ValidationResult>);

impl Validations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ValidationKind, result: ValidationResult) {
        self.0.insert(kind, result);
    }

    pub fn get(&self, kind: ValidationKind) -> Option<&ValidationResult> {
        self.0.get(&kind)
    }

    pub fn contains(&self, kind: ValidationKind) -> bool {
        self.0.contains_key(&kind)
    }

    /// Score of a check, if it ran.
    pub fn score(&self, kind: ValidationKind) -> Option<u8> {
        self.get(kind).map(|result| result.score)
    }

    /// Results in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (ValidationKind, &ValidationResult)> {
        self.0.iter().map(|(kind, result)| (*kind, result))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ValidationKind, ValidationResult)> for Validations {
    fn from_iter<I: IntoIterator<Item = (ValidationKind, ValidationResult)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_clamps_score() {
        assert_eq!(ValidationResult::new(vec![], vec![], 140).score, 100);
        assert_eq!(ValidationResult::new(vec![], vec![], -35).score, 0);
    }

    #[test]
    fn test_validity_follows_issues() {
        let with_issue = ValidationResult::new(vec!["broken".into()], vec![], 90);
        assert!(!with_issue.is_valid);
        let with_warning = ValidationResult::new(vec![], vec!["meh".into()], 90);
        assert!(with_warning.is_valid);
    }

    #[test]
    fn test_failed_has_single_issue_and_zero_score() {
        let result = ValidationResult::failed("missing");
        assert_eq!(result.score, 0);
        assert_eq!(result.issues, vec!["missing".to_string()]);
        assert!(result.warnings.is_empty());
        assert!(!result.is_valid);
    }

    #[test]
    fn test_every_kind_has_a_label() {
        assert_eq!(ValidationKind::iter().count(), 11);
        for kind in ValidationKind::iter() {
            assert!(!kind.label().is_empty());
        }
    }

    #[test]
    fn test_iteration_follows_kind_order() {
        let validations: Validations = [
            (ValidationKind::Robots, ValidationResult::perfect()),
            (ValidationKind::Title, ValidationResult::perfect()),
            (ValidationKind::Images, ValidationResult::perfect()),
        ]
        .into_iter()
        .collect();
        let kinds: Vec<_> = validations.iter().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationKind::Title,
                ValidationKind::Images,
                ValidationKind::Robots
            ]
        );
    }

    #[test]
    fn test_serializes_as_named_map() {
        let mut validations = Validations::new();
        validations.insert(ValidationKind::ContentLength, ValidationResult::perfect());
        let json = serde_json::to_value(&validations).expect("serializable");
        assert_eq!(json["contentLength"]["score"], 100);
        assert_eq!(json["contentLength"]["isValid"], true);
    }
}
