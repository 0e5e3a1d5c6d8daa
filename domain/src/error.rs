//! Domain error types

use crate::answer::AnswerKind;
use crate::consultation::ConsultationId;
use crate::question::QuestionId;
use thiserror::Error;

/// Data-integrity errors raised when constructing domain entities
///
/// These fail fast at build time so the evaluation pipeline can treat the
/// corresponding run-time checks as defensive assertions only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "question {question_id} expects {expected} answers but its validator applies to {actual}"
    )]
    ValidatorKindMismatch {
        question_id: QuestionId,
        expected: AnswerKind,
        actual: AnswerKind,
    },

    #[error("consultation {consultation_id} contains question id {question_id} more than once")]
    DuplicateQuestionId {
        consultation_id: ConsultationId,
        question_id: QuestionId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_kind_mismatch_display() {
        let error = DomainError::ValidatorKindMismatch {
            question_id: 1,
            expected: AnswerKind::Boolean,
            actual: AnswerKind::Integer,
        };
        assert_eq!(
            error.to_string(),
            "question 1 expects BOOLEAN answers but its validator applies to INTEGER"
        );
    }

    #[test]
    fn test_duplicate_question_id_display() {
        let error = DomainError::DuplicateQuestionId {
            consultation_id: 9,
            question_id: 2,
        };
        assert_eq!(
            error.to_string(),
            "consultation 9 contains question id 2 more than once"
        );
    }
}
