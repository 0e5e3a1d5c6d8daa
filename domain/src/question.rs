//! Question entity

use crate::answer::AnswerKind;
use crate::error::DomainError;
use crate::validator::AnswerValidator;
use serde::{Deserialize, Serialize};

/// Identifier of a question
pub type QuestionId = u64;

/// A survey question: prompt text, expected answer kind, and the rule a
/// submitted answer must pass
///
/// Construction enforces that the validator applies to the declared answer
/// kind, so a `Question` that exists is internally consistent.
///
/// # Example
///
/// ```
/// use consult_domain::{AnswerKind, AnswerValidator, Question};
///
/// let question = Question::new(
///     1,
///     "Are you over 18 years old?",
///     AnswerKind::Boolean,
///     AnswerValidator::MustBeTrue,
/// )
/// .unwrap();
/// assert_eq!(question.answer_kind(), AnswerKind::Boolean);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    answer_kind: AnswerKind,
    validator: AnswerValidator,
}

impl Question {
    /// Create a question, failing fast when the validator does not apply to
    /// the declared answer kind
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        answer_kind: AnswerKind,
        validator: AnswerValidator,
    ) -> Result<Self, DomainError> {
        if validator.applicable_kind() != answer_kind {
            return Err(DomainError::ValidatorKindMismatch {
                question_id: id,
                expected: answer_kind,
                actual: validator.applicable_kind(),
            });
        }

        Ok(Self {
            id,
            text: text.into(),
            answer_kind,
            validator,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answer_kind(&self) -> AnswerKind {
        self.answer_kind
    }

    pub fn validator(&self) -> &AnswerValidator {
        &self.validator
    }
}
