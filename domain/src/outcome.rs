//! Consultation outcome aggregation

use serde::{Deserialize, Serialize};

/// Aggregate result status of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    /// Every question's validator passed
    Referred,
    /// At least one validation failed
    Failed,
}

/// The all-or-nothing result of evaluating a full answer submission
///
/// Produced once per submission and returned to the caller; never stored.
/// Which validations failed is deliberately not part of the outcome - the
/// caller only learns the aggregate status.
///
/// # Example
///
/// ```
/// use consult_domain::{ConsultationOutcome, OutcomeStatus};
///
/// let outcome = ConsultationOutcome::from_results([true, true]);
/// assert_eq!(outcome.status(), OutcomeStatus::Referred);
///
/// let outcome = ConsultationOutcome::from_results([true, false]);
/// assert_eq!(outcome.status(), OutcomeStatus::Failed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationOutcome {
    status: OutcomeStatus,
}

impl ConsultationOutcome {
    /// Fold per-question validation results into one status
    ///
    /// Referred iff every result is true; a single false flips the whole
    /// outcome to Failed. No partial credit.
    pub fn from_results(results: impl IntoIterator<Item = bool>) -> Self {
        let status = if results.into_iter().all(|valid| valid) {
            OutcomeStatus::Referred
        } else {
            OutcomeStatus::Failed
        };

        Self { status }
    }

    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    pub fn is_referred(&self) -> bool {
        self.status == OutcomeStatus::Referred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_true_is_referred() {
        let outcome = ConsultationOutcome::from_results([true, true, true]);
        assert!(outcome.is_referred());
    }

    #[test]
    fn test_single_false_fails() {
        let outcome = ConsultationOutcome::from_results([true, false, true]);
        assert_eq!(outcome.status(), OutcomeStatus::Failed);
        assert!(!outcome.is_referred());
    }

    #[test]
    fn test_empty_results_referred() {
        // No questions means nothing failed
        assert!(ConsultationOutcome::from_results([]).is_referred());
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&OutcomeStatus::Referred).unwrap();
        assert_eq!(json, "\"REFERRED\"");
        let json = serde_json::to_string(&OutcomeStatus::Failed).unwrap();
        assert_eq!(json, "\"FAILED\"");
    }
}
