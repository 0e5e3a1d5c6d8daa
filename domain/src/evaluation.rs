//! Submission evaluation pipeline
//!
//! [`evaluate`] is a pure function of a consultation and a set of submitted
//! answers. It runs a sequence of short-circuiting gates - completeness,
//! type agreement, validation - and folds the per-question results into one
//! [`ConsultationOutcome`]. A given input always yields the same outcome or
//! the same failure.

use crate::answer::Answer;
use crate::consultation::Consultation;
use crate::outcome::ConsultationOutcome;
use crate::question::{Question, QuestionId};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, error};

/// Hard failures raised before any aggregation happens
///
/// The display text of these errors is surfaced verbatim to callers and is
/// part of the observable contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The submission omitted answers for these question ids, listed in the
    /// consultation's question order
    #[error("Missing answers for questions: [{}]", fmt_ids(.0))]
    MissingAnswers(Vec<QuestionId>),

    /// These answers declared a kind that disagrees with the question's
    /// expected kind, listed in the consultation's question order
    #[error("Wrong answer type for following question ids: [{}]", fmt_ids(.0))]
    TypeMismatch(Vec<QuestionId>),
}

impl EvaluationError {
    /// The offending question ids
    pub fn question_ids(&self) -> &[QuestionId] {
        match self {
            EvaluationError::MissingAnswers(ids) | EvaluationError::TypeMismatch(ids) => ids,
        }
    }
}

fn fmt_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Evaluate a full answer submission against a consultation
///
/// Gates, in order, short-circuiting at each:
///
/// 1. Answers are indexed by question id. A duplicate question id silently
///    overwrites the earlier answer - last one wins.
/// 2. Completeness: every question must have an answer. All missing ids are
///    collected before failing with [`EvaluationError::MissingAnswers`].
/// 3. Type agreement: every answer's kind must equal its question's declared
///    kind. All mismatching ids are collected before failing with
///    [`EvaluationError::TypeMismatch`].
/// 4. Validation: each question's validator judges its matched answer; the
///    results are folded into the outcome. Which validations failed is
///    logged but not reported to the caller.
pub fn evaluate(
    consultation: &Consultation,
    answers: &[Answer],
) -> Result<ConsultationOutcome, EvaluationError> {
    let answers_by_question: HashMap<QuestionId, &Answer> = answers
        .iter()
        .map(|answer| (answer.question_id(), answer))
        .collect();

    let missing: Vec<QuestionId> = consultation
        .questions()
        .iter()
        .map(Question::id)
        .filter(|id| !answers_by_question.contains_key(id))
        .collect();

    if !missing.is_empty() {
        error!(consultation = consultation.id(), ?missing, "missing answers");
        return Err(EvaluationError::MissingAnswers(missing));
    }

    let pairs: Vec<(&Question, &Answer)> = consultation
        .questions()
        .iter()
        .map(|question| (question, answers_by_question[&question.id()]))
        .collect();

    let mismatched: Vec<QuestionId> = pairs
        .iter()
        .filter(|(question, answer)| answer.kind() != question.answer_kind())
        .map(|(question, _)| question.id())
        .collect();

    if !mismatched.is_empty() {
        error!(
            consultation = consultation.id(),
            ?mismatched,
            "answers with non-matching types"
        );
        return Err(EvaluationError::TypeMismatch(mismatched));
    }

    let results: Vec<bool> = pairs
        .iter()
        .map(|(question, answer)| validate_answer(question, answer))
        .collect();

    let failed: Vec<QuestionId> = pairs
        .iter()
        .zip(&results)
        .filter(|(_, valid)| !**valid)
        .map(|((question, _), _)| question.id())
        .collect();

    if !failed.is_empty() {
        // Logged only; individual failures are not returned to the caller
        error!(consultation = consultation.id(), ?failed, "invalid answers");
    }

    Ok(ConsultationOutcome::from_results(results))
}

fn validate_answer(question: &Question, answer: &Answer) -> bool {
    let validator = question.validator();

    // Question construction guarantees kind agreement, so a failure here is
    // a data-integrity anomaly. It degrades to a failed validation instead
    // of aborting the whole evaluation.
    if !validator.is_applicable_to(answer) {
        error!(
            question = question.id(),
            validator = %validator,
            "validator does not apply to the answer kind"
        );
        return false;
    }

    let valid = validator.validate(answer);
    debug!(question = question.id(), valid, "validation result");
    valid
}
