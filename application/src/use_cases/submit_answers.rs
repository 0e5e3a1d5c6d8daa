//! Submit Answers use case
//!
//! Looks up the consultation, then hands the submitted answers to the
//! domain evaluation pipeline. The store lookup is the only collaborator;
//! everything after it is pure.

use crate::ports::store::ConsultationStore;
use consult_domain::{Answer, ConsultationId, ConsultationOutcome, EvaluationError, evaluate};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when submitting answers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitAnswersError {
    #[error("Consultation not found")]
    NotFound,

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Use case for submitting a full set of answers to a consultation
pub struct SubmitAnswersUseCase {
    consultations: Arc<dyn ConsultationStore>,
}

impl SubmitAnswersUseCase {
    pub fn new(consultations: Arc<dyn ConsultationStore>) -> Self {
        Self { consultations }
    }

    /// Evaluate the submission against the stored consultation
    pub fn execute(
        &self,
        id: ConsultationId,
        answers: &[Answer],
    ) -> Result<ConsultationOutcome, SubmitAnswersError> {
        info!(id, count = answers.len(), "received answers for consultation");

        let consultation = self
            .consultations
            .get(id)
            .ok_or(SubmitAnswersError::NotFound)?;

        let outcome = evaluate(&consultation, answers)?;
        Ok(outcome)
    }
}
