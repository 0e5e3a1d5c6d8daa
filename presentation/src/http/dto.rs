//! Wire DTOs
//!
//! The JSON structures exchanged with clients. Field names are camelCase on
//! the wire; enum values are SCREAMING_CASE. Validators never appear in any
//! response - clients only see a question's id, text, and expected answer
//! type.

use serde::{Deserialize, Serialize};

/// Expected answer type of a question, as exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerTypeDto {
    Boolean,
    Integer,
}

/// A question as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: u64,
    pub text: String,
    pub answer_type: AnswerTypeDto,
}

/// A consultation as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationDto {
    pub id: u64,
    pub questions: Vec<QuestionDto>,
}

/// A submitted answer, discriminated by its `type` field
///
/// ```json
/// { "type": "BOOLEAN", "questionId": 1, "value": true }
/// { "type": "INTEGER", "questionId": 3, "value": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnswerDto {
    #[serde(rename = "BOOLEAN", rename_all = "camelCase")]
    Boolean { question_id: u64, value: bool },
    #[serde(rename = "INTEGER", rename_all = "camelCase")]
    Integer { question_id: u64, value: i64 },
}

/// Request body of a full answer submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponseDto {
    pub answers: Vec<AnswerDto>,
}

/// Aggregate status of a submission, as exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusDto {
    Referred,
    Failed,
}

/// Response body of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationResponseDto {
    pub status: StatusDto,
}

/// Error body for every failure class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_dto_wire_format() {
        let answer = AnswerDto::Boolean {
            question_id: 1,
            value: true,
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "BOOLEAN", "questionId": 1, "value": true })
        );
    }

    #[test]
    fn test_answer_dto_parses_integer_variant() {
        let raw = r#"{ "type": "INTEGER", "questionId": 3, "value": 2 }"#;
        let answer: AnswerDto = serde_json::from_str(raw).unwrap();
        assert_eq!(
            answer,
            AnswerDto::Integer {
                question_id: 3,
                value: 2
            }
        );
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ConsultationResponseDto {
                status: StatusDto::Referred
            })
            .unwrap(),
            r#"{"status":"REFERRED"}"#
        );
    }

    #[test]
    fn test_question_dto_camel_case() {
        let question = QuestionDto {
            id: 1,
            text: "Are you over 18?".to_string(),
            answer_type: AnswerTypeDto::Boolean,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["answerType"], "BOOLEAN");
    }
}
