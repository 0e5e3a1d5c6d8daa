//! Application layer for the consultation service
//!
//! This crate contains use cases and the store port definitions. It depends
//! only on the domain layer; store implementations live in the
//! infrastructure layer and are injected by the binary.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::store::{ConsultationStore, QuestionStore};
pub use use_cases::get_consultation::{GetConsultationError, GetConsultationUseCase};
pub use use_cases::submit_answers::{SubmitAnswersError, SubmitAnswersUseCase};
