//! Per-question answer validators
//!
//! A validator is a pure predicate bound to exactly one [`AnswerKind`].
//! Dispatch from a validator to an answer is a capability check on the kind
//! tag, not a cast: kind agreement between a question's validator and a
//! submitted answer is not statically guaranteed across the wire boundary,
//! so [`AnswerValidator::is_applicable_to`] is load-bearing.

use crate::answer::{Answer, AnswerKind, AnswerValue};
use serde::{Deserialize, Serialize};

/// Rule deciding whether a single answer passes
///
/// Each variant applies to exactly one answer kind:
/// - `MustBeTrue` / `MustBeFalse`: boolean answers
/// - `MustBeLessThan` / `MustBeGreaterThan`: integer answers, with a
///   configurable threshold
///
/// # Example
///
/// ```
/// use consult_domain::{Answer, AnswerValidator};
///
/// let rule = AnswerValidator::MustBeLessThan(3);
/// assert!(rule.validate(&Answer::integer(1, 2)));
/// assert!(!rule.validate(&Answer::integer(1, 3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerValidator {
    /// Boolean answer must be `true`
    MustBeTrue,
    /// Boolean answer must be `false`
    MustBeFalse,
    /// Integer answer must be strictly below the threshold
    MustBeLessThan(i64),
    /// Integer answer must be strictly above the threshold
    MustBeGreaterThan(i64),
}

impl AnswerValidator {
    /// The single answer kind this validator can judge
    pub fn applicable_kind(&self) -> AnswerKind {
        match self {
            AnswerValidator::MustBeTrue | AnswerValidator::MustBeFalse => AnswerKind::Boolean,
            AnswerValidator::MustBeLessThan(_) | AnswerValidator::MustBeGreaterThan(_) => {
                AnswerKind::Integer
            }
        }
    }

    /// Capability check: does this validator apply to the answer's kind?
    ///
    /// Callers must check this before [`validate`](Self::validate).
    pub fn is_applicable_to(&self, answer: &Answer) -> bool {
        answer.kind() == self.applicable_kind()
    }

    /// Judge an answer, assuming kind agreement
    ///
    /// An answer of the wrong kind evaluates to `false` rather than
    /// panicking; callers that care about the distinction must gate on
    /// [`is_applicable_to`](Self::is_applicable_to) first.
    pub fn validate(&self, answer: &Answer) -> bool {
        match (self, answer.value()) {
            (AnswerValidator::MustBeTrue, AnswerValue::Boolean(value)) => *value,
            (AnswerValidator::MustBeFalse, AnswerValue::Boolean(value)) => !*value,
            (AnswerValidator::MustBeLessThan(threshold), AnswerValue::Integer(value)) => {
                value < threshold
            }
            (AnswerValidator::MustBeGreaterThan(threshold), AnswerValue::Integer(value)) => {
                value > threshold
            }
            _ => false,
        }
    }

    /// Short human-readable description of the rule, for logs
    pub fn description(&self) -> String {
        match self {
            AnswerValidator::MustBeTrue => "must be true".to_string(),
            AnswerValidator::MustBeFalse => "must be false".to_string(),
            AnswerValidator::MustBeLessThan(threshold) => {
                format!("must be less than {}", threshold)
            }
            AnswerValidator::MustBeGreaterThan(threshold) => {
                format!("must be greater than {}", threshold)
            }
        }
    }
}

impl std::fmt::Display for AnswerValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
