//! Get Consultation use case

use crate::ports::store::ConsultationStore;
use consult_domain::{Consultation, ConsultationId};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when fetching a consultation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GetConsultationError {
    #[error("Consultation not found")]
    NotFound,
}

/// Use case for fetching a consultation by id
pub struct GetConsultationUseCase {
    consultations: Arc<dyn ConsultationStore>,
}

impl GetConsultationUseCase {
    pub fn new(consultations: Arc<dyn ConsultationStore>) -> Self {
        Self { consultations }
    }

    /// Fetch the consultation, failing with `NotFound` when the id is absent
    pub fn execute(&self, id: ConsultationId) -> Result<Consultation, GetConsultationError> {
        info!(id, "fetching consultation");

        self.consultations
            .get(id)
            .ok_or(GetConsultationError::NotFound)
    }
}
