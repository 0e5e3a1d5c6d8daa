//! End-to-end tests of the HTTP surface
//!
//! Drives the full router (handlers, mappers, error mapping) against an
//! in-memory store, one request per test, without binding a socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use consult_application::ConsultationStore;
use consult_domain::{AnswerKind, AnswerValidator, Consultation, Question};
use consult_infrastructure::InMemoryConsultationStore;
use consult_presentation::{AppState, router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(consultations: Vec<Consultation>) -> Router {
    let store = Arc::new(InMemoryConsultationStore::new());
    for consultation in consultations {
        store.put(consultation);
    }
    router(Arc::new(AppState::new(store)))
}

fn age_check_consultation(id: u64) -> Consultation {
    let question = Question::new(
        1,
        "Are you over 18?",
        AnswerKind::Boolean,
        AnswerValidator::MustBeTrue,
    )
    .unwrap();
    Consultation::new(id, vec![question]).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn fetches_consultation_questions() {
    let question = Question::new(
        10,
        "Are you over 18?",
        AnswerKind::Boolean,
        AnswerValidator::MustBeTrue,
    )
    .unwrap();
    let app = app_with(vec![Consultation::new(99, vec![question]).unwrap()]);

    let (status, body) = get(app, "/consultations/99").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 99,
            "questions": [
                { "id": 10, "text": "Are you over 18?", "answerType": "BOOLEAN" }
            ]
        })
    );
}

#[tokio::test]
async fn returns_404_when_consultation_not_found() {
    let app = app_with(vec![]);

    let (status, body) = get(app, "/consultations/100").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Consultation not found" }));
}

#[tokio::test]
async fn returns_referred_when_all_answers_pass() {
    let app = app_with(vec![age_check_consultation(1)]);

    let body = json!({
        "answers": [{ "type": "BOOLEAN", "questionId": 1, "value": true }]
    });
    let (status, body) = post(app, "/consultations/1/responses", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "REFERRED" }));
}

#[tokio::test]
async fn returns_failed_when_an_answer_fails_validation() {
    let app = app_with(vec![age_check_consultation(1)]);

    let body = json!({
        "answers": [{ "type": "BOOLEAN", "questionId": 1, "value": false }]
    });
    let (status, body) = post(app, "/consultations/1/responses", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "FAILED" }));
}

#[tokio::test]
async fn returns_404_when_submitting_to_unknown_consultation() {
    let app = app_with(vec![]);

    let body = json!({
        "answers": [{ "type": "BOOLEAN", "questionId": 1, "value": false }]
    });
    let (status, body) = post(app, "/consultations/1/responses", body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Consultation not found" }));
}

#[tokio::test]
async fn returns_400_when_answers_are_missing() {
    let app = app_with(vec![age_check_consultation(1)]);

    // Answer for an unrelated question; question 1 stays unanswered
    let body = json!({
        "answers": [{ "type": "BOOLEAN", "questionId": 2, "value": false }]
    });
    let (status, body) = post(app, "/consultations/1/responses", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Missing answers for questions: [1]" }));
}

#[tokio::test]
async fn returns_400_when_answer_type_does_not_match() {
    let app = app_with(vec![age_check_consultation(1)]);

    let body = json!({
        "answers": [{ "type": "INTEGER", "questionId": 1, "value": 10 }]
    });
    let (status, body) = post(app, "/consultations/1/responses", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "Wrong answer type for following question ids: [1]" })
    );
}

#[tokio::test]
async fn lists_every_missing_question_in_order() {
    let questions = vec![
        Question::new(1, "Q1", AnswerKind::Boolean, AnswerValidator::MustBeTrue).unwrap(),
        Question::new(2, "Q2", AnswerKind::Boolean, AnswerValidator::MustBeFalse).unwrap(),
        Question::new(5, "Q5", AnswerKind::Integer, AnswerValidator::MustBeLessThan(3)).unwrap(),
    ];
    let app = app_with(vec![Consultation::new(1, questions).unwrap()]);

    let body = json!({
        "answers": [{ "type": "BOOLEAN", "questionId": 1, "value": true }]
    });
    let (status, body) = post(app, "/consultations/1/responses", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "Missing answers for questions: [2, 5]" })
    );
}

#[tokio::test]
async fn mixed_kind_consultation_end_to_end() {
    let questions = vec![
        Question::new(1, "Over 18?", AnswerKind::Boolean, AnswerValidator::MustBeTrue).unwrap(),
        Question::new(
            2,
            "Prior reaction?",
            AnswerKind::Boolean,
            AnswerValidator::MustBeFalse,
        )
        .unwrap(),
        Question::new(
            3,
            "Times taken?",
            AnswerKind::Integer,
            AnswerValidator::MustBeLessThan(3),
        )
        .unwrap(),
    ];
    let app = app_with(vec![Consultation::new(1, questions).unwrap()]);

    let body = json!({
        "answers": [
            { "type": "BOOLEAN", "questionId": 1, "value": true },
            { "type": "BOOLEAN", "questionId": 2, "value": false },
            { "type": "INTEGER", "questionId": 3, "value": 2 }
        ]
    });
    let (status, body) = post(app, "/consultations/1/responses", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "REFERRED" }));
}
