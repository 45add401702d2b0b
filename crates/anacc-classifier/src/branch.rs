//! Mobility, function and compounding gates.
//!
//! Each gate pushes what it compared onto the trace before the next one
//! runs. The pressure-sore split is its own gate because it changes the base
//! class on the not-mobile, lower-function branch; the Braden compounding
//! factor uses the table's high-risk band and does not feed it.

use std::collections::BTreeSet;

use anacc_core::models::assessment::RugAdl;
use anacc_core::{AssessmentRecord, CompoundingFactor, FunctionTier, MobilityTier, PressureRiskBand};
use anacc_instruments::CompositeScores;
use anacc_instruments::instruments::brua;
use anacc_rates::Thresholds;

use crate::resolver::BranchKey;
use crate::trace::{DecisionTrace, Rule};

/// Lowest (most severe) BRUA level that does not compound.
pub const BEHAVIOUR_COMPOUNDING_MAX: u8 = brua::NOT_APPLICABLE - 1;

/// Everything the branch gates decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchOutcome {
    pub rug_signal: MobilityTier,
    pub demmi_signal: MobilityTier,
    pub mobility: MobilityTier,
    pub function: FunctionTier,
    pub pressure_risk_band: Option<PressureRiskBand>,
    pub compounding: BTreeSet<CompoundingFactor>,
}

impl BranchOutcome {
    pub fn key(&self) -> BranchKey {
        BranchKey {
            mobility: self.mobility,
            function: self.function,
            pressure_risk_band: self.pressure_risk_band,
            compounding: !self.compounding.is_empty(),
        }
    }
}

pub fn classify_branch(
    record: &AssessmentRecord,
    composites: &CompositeScores,
    thresholds: &Thresholds,
    trace: &mut DecisionTrace,
) -> BranchOutcome {
    let rug_signal = rug_adl_signal(&record.rug_adl);
    trace.record(
        Rule::MobilityRugAdl,
        format!(
            "bed_mobility={}, transfer={}",
            record.rug_adl.bed_mobility, record.rug_adl.transfer
        ),
        Some("1 independent; 3-4 assisted; 5 not mobile".to_string()),
        rug_signal.to_string(),
    );

    let demmi_signal = demmi_signal(composites.demmi_score, thresholds);
    trace.record(
        Rule::MobilityDemmi,
        format!("demmi_score={}", composites.demmi_score),
        Some(format!(
            ">= {} independent; < {} not mobile",
            thresholds.demmi_ambulant_min, thresholds.demmi_not_mobile_below
        )),
        demmi_signal.to_string(),
    );

    let mobility = reconcile(rug_signal, demmi_signal);
    trace.record(
        Rule::MobilityTier,
        format!("rug_adl={rug_signal}, demmi={demmi_signal}"),
        Some("more dependent signal wins".to_string()),
        mobility.to_string(),
    );

    let function = function_tier(composites.afm_motor_subtotal, thresholds);
    trace.record(
        Rule::FunctionTier,
        format!("afm_motor_subtotal={}", composites.afm_motor_subtotal),
        Some(format!(">= {} higher", thresholds.afm_motor_higher_min)),
        function.to_string(),
    );

    let pressure_risk_band = match (mobility, function) {
        (MobilityTier::NotMobile, FunctionTier::Lower) => {
            let band = pressure_band(composites.braden_total, thresholds);
            trace.record(
                Rule::PressureRiskBand,
                format!("braden_total={}", composites.braden_total),
                Some(format!("<= {} higher", thresholds.pressure_sore_higher_risk_max)),
                band.to_string(),
            );
            Some(band)
        }
        _ => None,
    };

    let compounding = compounding_factors(record, composites, thresholds, trace);

    BranchOutcome {
        rug_signal,
        demmi_signal,
        mobility,
        function,
        pressure_risk_band,
        compounding,
    }
}

/// Mobility implied by the more dependent of bed mobility and transfer.
pub fn rug_adl_signal(adl: &RugAdl) -> MobilityTier {
    match adl.bed_mobility.max(adl.transfer) {
        0..=2 => MobilityTier::Independent,
        3 | 4 => MobilityTier::Assisted,
        _ => MobilityTier::NotMobile,
    }
}

pub fn demmi_signal(demmi_score: u8, thresholds: &Thresholds) -> MobilityTier {
    if demmi_score >= thresholds.demmi_ambulant_min {
        MobilityTier::Independent
    } else if demmi_score < thresholds.demmi_not_mobile_below {
        MobilityTier::NotMobile
    } else {
        MobilityTier::Assisted
    }
}

/// The more dependent of two signals.
pub fn reconcile(a: MobilityTier, b: MobilityTier) -> MobilityTier {
    a.max(b)
}

pub fn function_tier(afm_motor_subtotal: u8, thresholds: &Thresholds) -> FunctionTier {
    if afm_motor_subtotal >= thresholds.afm_motor_higher_min {
        FunctionTier::Higher
    } else {
        FunctionTier::Lower
    }
}

pub fn pressure_band(braden_total: u8, thresholds: &Thresholds) -> PressureRiskBand {
    if braden_total <= thresholds.pressure_sore_higher_risk_max {
        PressureRiskBand::Higher
    } else {
        PressureRiskBand::Lower
    }
}

fn compounding_factors(
    record: &AssessmentRecord,
    composites: &CompositeScores,
    thresholds: &Thresholds,
    trace: &mut DecisionTrace,
) -> BTreeSet<CompoundingFactor> {
    let mut factors = BTreeSet::new();

    let active = record.nursing.active();
    let nursing_input = if active.is_empty() {
        "no technical nursing requirements".to_string()
    } else {
        let labels: Vec<&str> = active.iter().map(|need| need.label()).collect();
        format!("technical nursing: {}", labels.join(", "))
    };
    let complex_nursing = record.nursing.any();
    trace.record(
        Rule::ComplexNursing,
        nursing_input,
        Some("any requirement".to_string()),
        present(complex_nursing),
    );
    if complex_nursing {
        factors.insert(CompoundingFactor::ComplexNursing);
    }

    let qualifying = brua::qualifying_items(&record.brua);
    let behaviour = composites.brua_max_severity <= BEHAVIOUR_COMPOUNDING_MAX;
    let behaviour_input = if qualifying.is_empty() {
        format!("brua_max_severity={}", composites.brua_max_severity)
    } else {
        format!(
            "brua_max_severity={} ({})",
            composites.brua_max_severity,
            qualifying.join(", ")
        )
    };
    trace.record(
        Rule::BehaviouralComplexity,
        behaviour_input,
        Some(format!("<= {BEHAVIOUR_COMPOUNDING_MAX}")),
        present(behaviour),
    );
    if behaviour {
        factors.insert(CompoundingFactor::BehaviouralComplexity);
    }

    // High pressure-injury risk is the table's high Braden band.
    let high_risk_max = thresholds.braden.high_risk_max;
    let pressure = composites.braden_total <= high_risk_max;
    trace.record(
        Rule::PressureInjuryRisk,
        format!("braden_total={}", composites.braden_total),
        Some(format!("<= {high_risk_max} (braden high_risk_max)")),
        present(pressure),
    );
    if pressure {
        factors.insert(CompoundingFactor::HighPressureInjuryRisk);
    }

    factors
}

fn present(found: bool) -> &'static str {
    if found { "present" } else { "absent" }
}
