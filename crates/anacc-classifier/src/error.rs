use anacc_core::AdmissionType;
use anacc_instruments::ValidationError;
use anacc_rates::RateError;
use thiserror::Error;

use crate::resolver::BranchKey;
use crate::trace::DecisionTrace;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid assessment: {0}")]
    Validation(#[from] ValidationError),

    #[error("rate table error: {0}")]
    Configuration(#[from] RateError),

    #[error("no {admission} class matches {key}; the class table has a gap")]
    Unclassifiable {
        admission: AdmissionType,
        key: BranchKey,
        trace: DecisionTrace,
    },
}

impl ClassifyError {
    /// True when the caller can fix the problem by correcting the record.
    pub fn is_caller_correctable(&self) -> bool {
        matches!(self, ClassifyError::Validation(_))
    }

    pub fn trace(&self) -> Option<&DecisionTrace> {
        match self {
            ClassifyError::Unclassifiable { trace, .. } => Some(trace),
            _ => None,
        }
    }
}
