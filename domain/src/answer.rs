//! Answer value objects
//!
//! A submitted answer pairs a question id with a kind-specific value.
//! Answers are created from inbound submission data, consumed by one
//! evaluation run, and never persisted.

use crate::question::QuestionId;
use serde::{Deserialize, Serialize};

/// Kind tag distinguishing the supported answer shapes
///
/// The set is closed: every [`Answer`], question, and validator carries
/// exactly one of these tags, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerKind {
    Boolean,
    Integer,
}

impl AnswerKind {
    /// Wire/display name of the kind (`BOOLEAN`, `INTEGER`)
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKind::Boolean => "BOOLEAN",
            AnswerKind::Integer => "INTEGER",
        }
    }
}

impl std::fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind-specific answer payload
///
/// Exactly one concrete shape exists per [`AnswerKind`]; the tagged union
/// replaces the open class hierarchy a runtime `instanceof` chain would need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerValue {
    Boolean(bool),
    Integer(i64),
}

impl AnswerValue {
    /// Kind tag of this value
    pub fn kind(&self) -> AnswerKind {
        match self {
            AnswerValue::Boolean(_) => AnswerKind::Boolean,
            AnswerValue::Integer(_) => AnswerKind::Integer,
        }
    }
}

/// A single submitted answer, matched to a question by id
///
/// # Example
///
/// ```
/// use consult_domain::{Answer, AnswerKind};
///
/// let answer = Answer::boolean(1, true);
/// assert_eq!(answer.question_id(), 1);
/// assert_eq!(answer.kind(), AnswerKind::Boolean);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    question_id: QuestionId,
    value: AnswerValue,
}

impl Answer {
    /// Create an answer from a question id and a kind-specific value
    pub fn new(question_id: QuestionId, value: AnswerValue) -> Self {
        Self { question_id, value }
    }

    /// Create a boolean answer
    pub fn boolean(question_id: QuestionId, value: bool) -> Self {
        Self::new(question_id, AnswerValue::Boolean(value))
    }

    /// Create an integer answer
    pub fn integer(question_id: QuestionId, value: i64) -> Self {
        Self::new(question_id, AnswerValue::Integer(value))
    }

    /// Id of the question this answer addresses
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    /// The kind-specific payload
    pub fn value(&self) -> &AnswerValue {
        &self.value
    }

    /// Kind tag, derived from the payload so the two can never disagree
    pub fn kind(&self) -> AnswerKind {
        self.value.kind()
    }
}
