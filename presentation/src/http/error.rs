//! API error mapping
//!
//! One place translates use-case failures into HTTP statuses and the
//! `ErrorDto` body. The message text for bad requests is the evaluation
//! error's display text verbatim; anything uncategorized becomes a generic
//! 500 that leaks no detail.

use super::dto::ErrorDto;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use consult_application::{GetConsultationError, SubmitAnswersError};
use tracing::error;

/// Failure classes surfaced to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::NotFound(message) | ApiError::BadRequest(message) => message.clone(),
            ApiError::Internal => "Unexpected error occurred".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.message();
        error!(status = %self.status(), %message, "request failed");

        (self.status(), Json(ErrorDto { message })).into_response()
    }
}

impl From<GetConsultationError> for ApiError {
    fn from(error: GetConsultationError) -> Self {
        match error {
            GetConsultationError::NotFound => ApiError::NotFound(error.to_string()),
        }
    }
}

impl From<SubmitAnswersError> for ApiError {
    fn from(error: SubmitAnswersError) -> Self {
        match &error {
            SubmitAnswersError::NotFound => ApiError::NotFound(error.to_string()),
            SubmitAnswersError::Evaluation(_) => ApiError::BadRequest(error.to_string()),
        }
    }
}
