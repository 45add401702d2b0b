use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::AssessmentDetails;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::all_instruments;
use crate::instruments::demmi::DemmiConversion;
use crate::instruments::{afm, braden, brua, demmi, rug_adl};
use crate::scoring::{FieldViolation, ValidationError};

/// Per-instrument composite scores derived from one assessment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeScores {
    /// 4–18, lower is less dependent.
    pub rug_adl_total: u8,
    /// 6–23, lower is higher pressure-injury risk.
    pub braden_total: u8,
    /// Raw DEMMI point total before conversion.
    pub demmi_raw: u8,
    /// 0–100 interval mobility score.
    pub demmi_score: u8,
    /// 12–84.
    pub afm_motor_subtotal: u8,
    /// 5–35. Reported, not used for class selection.
    pub afm_cognitive_subtotal: u8,
    /// Lowest BRUA code across the five behaviours; 1–3 qualify as
    /// behavioural complexity.
    pub brua_max_severity: u8,
}

/// Check every field of `record`, collecting all violations rather than
/// stopping at the first.
pub fn validate(record: &AssessmentRecord) -> Result<(), ValidationError> {
    let mut violations = validate_details(&record.details);
    for instrument in all_instruments() {
        violations.extend(instrument.validate(record));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

/// Validate `record` and derive its composite scores.
pub fn normalize(
    record: &AssessmentRecord,
    conversion: &DemmiConversion,
) -> Result<CompositeScores, ValidationError> {
    validate(record)?;

    let demmi_raw = demmi::raw_points(&record.demmi);
    Ok(CompositeScores {
        rug_adl_total: rug_adl::total(&record.rug_adl),
        braden_total: braden::total(&record.braden),
        demmi_raw,
        demmi_score: conversion.interval(demmi_raw),
        afm_motor_subtotal: afm::motor_subtotal(&record.afm),
        afm_cognitive_subtotal: afm::cognitive_subtotal(&record.afm),
        brua_max_severity: brua::max_severity(&record.brua),
    })
}

fn validate_details(details: &AssessmentDetails) -> Vec<FieldViolation> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("details.assessor_id", &details.assessor_id),
        ("details.facility_id", &details.facility_id),
        ("details.resident_id", &details.resident_id),
    ] {
        if value.trim().is_empty() {
            errors.push(FieldViolation::invalid(
                field,
                value.as_str(),
                "non-empty identifier",
                format!("Assessment details: {field} is missing"),
            ));
        }
    }

    if let (Some(start), Some(end)) = (details.start_time, details.end_time)
        && end < start
    {
        errors.push(FieldViolation::invalid(
            "details.end_time",
            end.to_string(),
            format!("not before start_time {start}"),
            format!("Assessment details: end_time={end} is before start_time={start}"),
        ));
    }

    errors
}
