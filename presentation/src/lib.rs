//! Presentation layer for the consultation service
//!
//! This crate contains the HTTP surface (routes, wire DTOs, error-to-status
//! mapping, server bootstrap) and the CLI argument definitions. It is thin
//! plumbing: every decision with branching logic lives in the domain and
//! application layers.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::Cli;
pub use http::{
    dto::{
        AnswerDto, AnswerTypeDto, ConsultationDto, ConsultationResponseDto, ErrorDto, QuestionDto,
        StatusDto, SurveyResponseDto,
    },
    error::ApiError,
    routes::AppState,
    server::{router, serve},
};
