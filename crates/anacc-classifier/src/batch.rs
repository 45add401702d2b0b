use anacc_core::{AdmissionType, AssessmentRecord};
use anacc_rates::RateTable;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::classify::classify;
use crate::error::ClassifyError;
use crate::result::ClassificationResult;

/// Classifies every record against one table. Results come back in input
/// order, one per record, so a bad record never hides the others.
#[cfg(feature = "parallel")]
pub fn classify_batch(
    records: &[(AssessmentRecord, AdmissionType)],
    table: &RateTable,
) -> Vec<Result<ClassificationResult, ClassifyError>> {
    tracing::debug!(records = records.len(), "classifying batch in parallel");
    records
        .par_iter()
        .map(|(record, admission)| classify(record, *admission, table))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn classify_batch(
    records: &[(AssessmentRecord, AdmissionType)],
    table: &RateTable,
) -> Vec<Result<ClassificationResult, ClassifyError>> {
    tracing::debug!(records = records.len(), "classifying batch");
    records
        .iter()
        .map(|(record, admission)| classify(record, *admission, table))
        .collect()
}
