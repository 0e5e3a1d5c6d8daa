//! Domain layer for the consultation service
//!
//! This crate contains the core business logic: the typed answer model,
//! per-question validators, and the submission evaluation pipeline.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Answer kinds
//!
//! Answers come in a closed set of kinds (boolean, integer). Every answer,
//! question, and validator carries exactly one kind tag, and the tag is the
//! only thing used to reconcile them - never a cast.
//!
//! ## Evaluation
//!
//! [`evaluate`] matches a full set of submitted answers against a
//! consultation's questions, enforces completeness and type agreement, runs
//! each question's validator, and folds the results into a single
//! [`ConsultationOutcome`]: `Referred` when every answer passes, `Failed`
//! otherwise.

pub mod answer;
pub mod consultation;
pub mod error;
pub mod evaluation;
pub mod outcome;
pub mod question;
pub mod validator;

// Re-export commonly used types
pub use answer::{Answer, AnswerKind, AnswerValue};
pub use consultation::{Consultation, ConsultationId};
pub use error::DomainError;
pub use evaluation::{EvaluationError, evaluate};
pub use outcome::{ConsultationOutcome, OutcomeStatus};
pub use question::{Question, QuestionId};
pub use validator::AnswerValidator;
