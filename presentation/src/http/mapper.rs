//! Mapping between wire DTOs and domain types

use super::dto::{
    AnswerDto, AnswerTypeDto, ConsultationDto, ConsultationResponseDto, QuestionDto, StatusDto,
};
use consult_domain::{Answer, AnswerKind, Consultation, ConsultationOutcome, OutcomeStatus, Question};

pub fn to_consultation_dto(consultation: &Consultation) -> ConsultationDto {
    ConsultationDto {
        id: consultation.id(),
        questions: consultation.questions().iter().map(to_question_dto).collect(),
    }
}

fn to_question_dto(question: &Question) -> QuestionDto {
    QuestionDto {
        id: question.id(),
        text: question.text().to_string(),
        answer_type: to_answer_type_dto(question.answer_kind()),
    }
}

fn to_answer_type_dto(kind: AnswerKind) -> AnswerTypeDto {
    match kind {
        AnswerKind::Boolean => AnswerTypeDto::Boolean,
        AnswerKind::Integer => AnswerTypeDto::Integer,
    }
}

pub fn to_answers(answers: Vec<AnswerDto>) -> Vec<Answer> {
    answers.into_iter().map(to_answer).collect()
}

fn to_answer(dto: AnswerDto) -> Answer {
    match dto {
        AnswerDto::Boolean { question_id, value } => Answer::boolean(question_id, value),
        AnswerDto::Integer { question_id, value } => Answer::integer(question_id, value),
    }
}

pub fn to_response_dto(outcome: ConsultationOutcome) -> ConsultationResponseDto {
    let status = match outcome.status() {
        OutcomeStatus::Referred => StatusDto::Referred,
        OutcomeStatus::Failed => StatusDto::Failed,
    };
    ConsultationResponseDto { status }
}
