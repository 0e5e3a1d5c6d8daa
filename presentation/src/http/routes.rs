//! API routes for the consultation service
//!
//! Two operations: fetch a consultation's questions, and submit a full set
//! of answers for evaluation. Handlers delegate straight to the use cases;
//! failure mapping lives in [`super::error`].

use super::dto::{ConsultationDto, ConsultationResponseDto, SurveyResponseDto};
use super::error::ApiError;
use super::mapper;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use consult_application::{
    ConsultationStore, GetConsultationUseCase, SubmitAnswersUseCase,
};
use consult_domain::ConsultationId;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    get_consultation: GetConsultationUseCase,
    submit_answers: SubmitAnswersUseCase,
}

impl AppState {
    pub fn new(consultations: Arc<dyn ConsultationStore>) -> Self {
        Self {
            get_consultation: GetConsultationUseCase::new(Arc::clone(&consultations)),
            submit_answers: SubmitAnswersUseCase::new(consultations),
        }
    }
}

pub fn consultation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/consultations/:id", get(get_consultation_by_id))
        .route("/consultations/:id/responses", post(submit_response))
}

async fn get_consultation_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ConsultationId>,
) -> Result<Json<ConsultationDto>, ApiError> {
    info!(id, "received request to get consultation");

    let consultation = state.get_consultation.execute(id)?;
    Ok(Json(mapper::to_consultation_dto(&consultation)))
}

async fn submit_response(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ConsultationId>,
    Json(request): Json<SurveyResponseDto>,
) -> Result<Json<ConsultationResponseDto>, ApiError> {
    info!(id, answers = request.answers.len(), "received submission");

    let answers = mapper::to_answers(request.answers);
    let outcome = state.submit_answers.execute(id, &answers)?;
    Ok(Json(mapper::to_response_dto(outcome)))
}
