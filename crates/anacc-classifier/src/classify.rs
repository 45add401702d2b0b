//! The classification entry points.

use std::collections::BTreeSet;

use anacc_audit::{AuditEvent, AuditOutcome};
use anacc_core::{AdmissionType, AssessmentRecord, BradenRisk, ClassCode};
use anacc_instruments::{CompositeScores, normalize};
use anacc_rates::{RateSchedule, RateTable};
use serde_json::json;

use crate::branch::{BranchOutcome, classify_branch};
use crate::error::ClassifyError;
use crate::palliative;
use crate::resolver::resolve;
use crate::result::ClassificationResult;
use crate::trace::{DecisionTrace, Rule};

/// Classify one record against `table`.
///
/// Validates every field first and reports all violations together. The
/// palliative override is checked before the branch gates; when it applies
/// the record goes straight to the palliative class. Holds no state between
/// calls, so the same record and table always give the same result.
pub fn classify(
    record: &AssessmentRecord,
    admission: AdmissionType,
    table: &RateTable,
) -> Result<ClassificationResult, ClassifyError> {
    let outcome = run(record, admission, table);
    audit(record, admission, Some(table.version.as_str()), &outcome);
    outcome
}

/// Classify under the table in force on the record's assessment date.
pub fn classify_on_date(
    record: &AssessmentRecord,
    admission: AdmissionType,
    schedule: &RateSchedule,
) -> Result<ClassificationResult, ClassifyError> {
    let table = match schedule.table_for(record.details.date_of_assessment) {
        Ok(table) => table,
        Err(err) => {
            let outcome = Err(ClassifyError::Configuration(err));
            audit(record, admission, None, &outcome);
            return outcome;
        }
    };
    classify(record, admission, table)
}

fn run(
    record: &AssessmentRecord,
    admission: AdmissionType,
    table: &RateTable,
) -> Result<ClassificationResult, ClassifyError> {
    let composites = normalize(record, &table.demmi_conversion)?;
    let mut trace = DecisionTrace::default();
    trace.record(
        Rule::Composites,
        format!(
            "rug_adl_total={}, braden_total={}, demmi_raw={}, demmi_score={}, \
             afm_motor_subtotal={}, afm_cognitive_subtotal={}, brua_max_severity={}",
            composites.rug_adl_total,
            composites.braden_total,
            composites.demmi_raw,
            composites.demmi_score,
            composites.afm_motor_subtotal,
            composites.afm_cognitive_subtotal,
            composites.brua_max_severity
        ),
        Some(format!("table {}", table.version)),
        "derived",
    );

    let bands = &table.thresholds.braden;
    let braden_risk = bands.risk(composites.braden_total);
    trace.record(
        Rule::BradenRisk,
        format!("braden_total={}", composites.braden_total),
        Some(format!(
            "<= {} high; <= {} moderate; <= {} mild",
            bands.high_risk_max, bands.moderate_risk_max, bands.mild_risk_max
        )),
        braden_risk.to_string(),
    );

    if palliative::qualifies(record, admission, &mut trace) {
        return assemble(
            ClassCode::PALLIATIVE,
            admission,
            table,
            None,
            braden_risk,
            composites,
            trace,
        );
    }

    let branch = classify_branch(record, &composites, &table.thresholds, &mut trace);
    let key = branch.key();
    let Some(resolution) = resolve(admission, key) else {
        tracing::error!(
            %admission,
            %key,
            trace = %serde_json::to_string(&trace).unwrap_or_default(),
            "branch outcome has no class"
        );
        return Err(ClassifyError::Unclassifiable {
            admission,
            key,
            trace,
        });
    };
    trace.record(
        Rule::ClassResolution,
        format!("{admission}: {key}"),
        None,
        resolution.code.to_string(),
    );

    let branch = if resolution.compounding_variant {
        branch
    } else {
        BranchOutcome {
            compounding: BTreeSet::new(),
            ..branch
        }
    };
    assemble(
        resolution.code,
        admission,
        table,
        Some(branch),
        braden_risk,
        composites,
        trace,
    )
}

fn assemble(
    code: ClassCode,
    admission: AdmissionType,
    table: &RateTable,
    branch: Option<BranchOutcome>,
    braden_risk: BradenRisk,
    composites: CompositeScores,
    mut trace: DecisionTrace,
) -> Result<ClassificationResult, ClassifyError> {
    let rate = table.class(code)?;
    trace.record(
        Rule::RateLookup,
        code.to_string(),
        Some(format!("table {}", table.version)),
        format!("nwau={}, daily_rate={:.2}", rate.nwau, rate.daily_rate),
    );

    Ok(ClassificationResult {
        class_code: code,
        title: rate.title.clone(),
        nwau: rate.nwau,
        daily_rate: rate.daily_rate,
        admission_type: admission,
        table_version: table.version.clone(),
        mobility_tier: branch.as_ref().map(|b| b.mobility),
        function_tier: branch.as_ref().map(|b| b.function),
        pressure_risk_band: branch.as_ref().and_then(|b| b.pressure_risk_band),
        braden_risk,
        compounding_factors: branch.map(|b| b.compounding).unwrap_or_default(),
        composites,
        decision_trace: trace,
    })
}

fn audit(
    record: &AssessmentRecord,
    admission: AdmissionType,
    table_version: Option<&str>,
    outcome: &Result<ClassificationResult, ClassifyError>,
) {
    let details = &record.details;
    let (action, event_outcome, event_details) = match outcome {
        Ok(result) => (
            "classification.completed",
            AuditOutcome::Success,
            json!({
                "class_code": result.class_code,
                "admission_type": admission,
                "table_version": result.table_version,
            }),
        ),
        Err(ClassifyError::Validation(err)) => (
            "classification.rejected",
            AuditOutcome::Rejected,
            json!({
                "admission_type": admission,
                "fields": err.fields(),
            }),
        ),
        Err(err) => (
            "classification.failed",
            AuditOutcome::Failed,
            json!({
                "admission_type": admission,
                "table_version": table_version,
                "error": err.to_string(),
            }),
        ),
    };

    AuditEvent::new(action, "assessment", &details.resident_id, &details.assessor_id)
        .with_outcome(event_outcome)
        .with_details(event_details)
        .emit();
}
