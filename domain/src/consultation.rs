//! Consultation entity

use crate::error::DomainError;
use crate::question::Question;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of a consultation
pub type ConsultationId = u64;

/// An ordered set of questions answered together in one submission
///
/// Question order is preserved as given; it determines the order in which
/// evaluation reports missing or mismatched question ids. Question ids are
/// unique within one consultation, enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    id: ConsultationId,
    questions: Vec<Question>,
}

impl Consultation {
    /// Create a consultation, failing fast on duplicate question ids
    pub fn new(id: ConsultationId, questions: Vec<Question>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(DomainError::DuplicateQuestionId {
                    consultation_id: id,
                    question_id: question.id(),
                });
            }
        }

        Ok(Self { id, questions })
    }

    pub fn id(&self) -> ConsultationId {
        self.id
    }

    /// Questions in their stored order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
