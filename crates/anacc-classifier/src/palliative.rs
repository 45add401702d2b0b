//! Palliative admission override, evaluated before any branch logic.

use anacc_core::models::assessment::PalliativeCare;
use anacc_core::{AdmissionType, AssessmentRecord};
use anacc_instruments::instruments::palliative::phase_label;

use crate::trace::{DecisionTrace, Rule};

/// AKPS level at or below which the scored performance supports the
/// referral's "AKPS 40 or less" answer.
const AKPS_PALLIATIVE_MAX: u8 = 40;

/// Whether the record qualifies for the palliative class: entered for
/// palliative care and either a prognosis under three months or AKPS 40 or
/// less. Care plan, malignancy, phase and the scored AKPS are traced as
/// evidence but never gate.
pub fn qualifies(
    record: &AssessmentRecord,
    admission: AdmissionType,
    trace: &mut DecisionTrace,
) -> bool {
    let p = &record.palliative;
    let input = format!(
        "entered_for_palliative={}, prognosis_under_3_months={}, akps_40_or_less={}",
        p.entered_for_palliative, p.prognosis_under_3_months, p.akps_40_or_less
    );

    if admission == AdmissionType::Respite {
        trace.record(
            Rule::PalliativeOverride,
            input,
            None,
            "not applicable to respite admission",
        );
        return false;
    }

    let applies = gate(p);
    trace.record(
        Rule::PalliativeOverride,
        input,
        Some("entered AND (prognosis OR akps_40_or_less)".to_string()),
        if applies { "applied" } else { "not applied" },
    );
    if applies {
        record_evidence(record, trace);
    }
    applies
}

fn gate(p: &PalliativeCare) -> bool {
    p.entered_for_palliative && (p.prognosis_under_3_months || p.akps_40_or_less)
}

fn record_evidence(record: &AssessmentRecord, trace: &mut DecisionTrace) {
    let p = &record.palliative;
    trace.record(
        Rule::PalliativeEvidence,
        format!("existing_care_plan={}", p.existing_care_plan),
        None,
        if p.existing_care_plan { "supports" } else { "absent" },
    );
    trace.record(
        Rule::PalliativeEvidence,
        format!("has_malignancy={}", p.has_malignancy),
        None,
        if p.has_malignancy { "supports" } else { "absent" },
    );
    trace.record(
        Rule::PalliativeEvidence,
        "palliative_phase",
        None,
        p.palliative_phase.map(phase_label).unwrap_or("not recorded"),
    );

    let scored_low = record.akps <= AKPS_PALLIATIVE_MAX;
    let outcome = match (scored_low, p.akps_40_or_less) {
        (true, true) => "agrees with referral",
        (false, false) => "consistent with referral",
        (true, false) => "scored level is 40 or less but referral says otherwise",
        (false, true) => "referral says 40 or less but scored level is higher",
    };
    if scored_low != p.akps_40_or_less {
        tracing::debug!(
            akps = record.akps,
            akps_40_or_less = p.akps_40_or_less,
            "AKPS score disagrees with palliative referral"
        );
    }
    trace.record(
        Rule::PalliativeEvidence,
        format!("akps={}", record.akps),
        Some(format!("<= {AKPS_PALLIATIVE_MAX}")),
        outcome,
    );
}
