//! Startup seed data
//!
//! Populates the stores with the demo consultation the service ships with,
//! so a freshly started instance is immediately usable.

use consult_application::ports::store::{ConsultationStore, QuestionStore};
use consult_domain::{AnswerKind, AnswerValidator, Consultation, DomainError, Question};
use tracing::info;

/// Seed the demo consultation (id 1) and its questions
pub fn seed_demo_data(
    consultations: &dyn ConsultationStore,
    questions: &dyn QuestionStore,
) -> Result<(), DomainError> {
    let age_check = Question::new(
        1,
        "Are you over 18 years old?",
        AnswerKind::Boolean,
        AnswerValidator::MustBeTrue,
    )?;

    let previous_reaction_check = Question::new(
        2,
        "Have you had a reaction to this medicine before?",
        AnswerKind::Boolean,
        AnswerValidator::MustBeFalse,
    )?;

    // Demonstrates validation of an integer answer
    let previous_medicine_count = Question::new(
        3,
        "How many times have you taken this medicine?",
        AnswerKind::Integer,
        AnswerValidator::MustBeLessThan(3),
    )?;

    let seeded = vec![age_check, previous_reaction_check, previous_medicine_count];
    for question in &seeded {
        questions.put(question.clone());
    }

    let consultation = Consultation::new(1, seeded)?;
    info!(
        id = consultation.id(),
        questions = consultation.questions().len(),
        "seeding demo consultation"
    );
    consultations.put(consultation);

    Ok(())
}
