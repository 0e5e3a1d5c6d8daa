//! In-memory store adapters
//!
//! Plain `RwLock<HashMap>` maps keyed by id. Reads return cloned snapshots,
//! so concurrent callers never observe a half-written consultation. No
//! durability: contents live and die with the process.

use consult_application::ports::store::{ConsultationStore, QuestionStore};
use consult_domain::{Consultation, ConsultationId, Question, QuestionId};
use std::collections::HashMap;
use std::sync::RwLock;

// A poisoned lock means a writer panicked mid-insert of one entry; the map
// itself is still usable, so recover the guard.
macro_rules! read_lock {
    ($lock:expr) => {
        $lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    };
}

macro_rules! write_lock {
    ($lock:expr) => {
        $lock
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    };
}

/// In-memory consultation store
#[derive(Default)]
pub struct InMemoryConsultationStore {
    consultations: RwLock<HashMap<ConsultationId, Consultation>>,
}

impl InMemoryConsultationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsultationStore for InMemoryConsultationStore {
    fn get(&self, id: ConsultationId) -> Option<Consultation> {
        read_lock!(self.consultations).get(&id).cloned()
    }

    fn put(&self, consultation: Consultation) {
        write_lock!(self.consultations).insert(consultation.id(), consultation);
    }

    fn exists(&self, id: ConsultationId) -> bool {
        read_lock!(self.consultations).contains_key(&id)
    }

    fn delete_all(&self) {
        write_lock!(self.consultations).clear();
    }
}

/// In-memory question store
#[derive(Default)]
pub struct InMemoryQuestionStore {
    questions: RwLock<HashMap<QuestionId, Question>>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionStore for InMemoryQuestionStore {
    fn get(&self, id: QuestionId) -> Option<Question> {
        read_lock!(self.questions).get(&id).cloned()
    }

    fn put(&self, question: Question) {
        write_lock!(self.questions).insert(question.id(), question);
    }

    fn exists(&self, id: QuestionId) -> bool {
        read_lock!(self.questions).contains_key(&id)
    }
}
