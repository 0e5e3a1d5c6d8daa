//! Store ports
//!
//! Keyed lookup for consultations and questions. The contract is
//! deliberately small and synchronous: get, put, exists. Implementations
//! must be safe to share across callers (`Send + Sync`) and return
//! self-consistent snapshots, but no transactional or isolation guarantees
//! are required - a missing lookup is handled at the use-case boundary, not
//! inside the store.

use consult_domain::{Consultation, ConsultationId, Question, QuestionId};

/// Keyed storage for consultations
///
/// The store exclusively owns the consultations it holds; callers receive
/// clones and never mutate stored state through them.
pub trait ConsultationStore: Send + Sync {
    /// Look up a consultation by id
    fn get(&self, id: ConsultationId) -> Option<Consultation>;

    /// Insert or replace a consultation under its own id
    fn put(&self, consultation: Consultation);

    /// Whether a consultation with this id exists
    fn exists(&self, id: ConsultationId) -> bool;

    /// Remove all stored consultations
    fn delete_all(&self);
}

/// Keyed storage for standalone questions
pub trait QuestionStore: Send + Sync {
    /// Look up a question by id
    fn get(&self, id: QuestionId) -> Option<Question>;

    /// Insert or replace a question under its own id
    fn put(&self, question: Question);

    /// Whether a question with this id exists
    fn exists(&self, id: QuestionId) -> bool;
}
