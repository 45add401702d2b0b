use std::collections::BTreeSet;

use anacc_core::{
    AdmissionType, BradenRisk, ClassCode, CompoundingFactor, FunctionTier, MobilityTier,
    PressureRiskBand,
};
use anacc_instruments::CompositeScores;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::trace::DecisionTrace;

/// The resolved class, its funding, and how it was reached.
///
/// Tiers are `None` when the palliative override bypassed the branch gates.
/// `compounding_factors` is non-empty only for "with compounding" classes;
/// factors observed on other branches are still in the trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    pub class_code: ClassCode,
    pub title: String,
    pub nwau: f64,
    pub daily_rate: f64,
    pub admission_type: AdmissionType,
    pub table_version: String,
    pub mobility_tier: Option<MobilityTier>,
    pub function_tier: Option<FunctionTier>,
    pub pressure_risk_band: Option<PressureRiskBand>,
    pub braden_risk: BradenRisk,
    pub compounding_factors: BTreeSet<CompoundingFactor>,
    pub composites: CompositeScores,
    pub decision_trace: DecisionTrace,
}

impl ClassificationResult {
    /// One line for reports, e.g.
    /// "Class 2: Independent without compounding factors ($62.08/day, NWAU 0.21)".
    pub fn summary(&self) -> String {
        format!(
            "{}: {} (${:.2}/day, NWAU {})",
            self.class_code, self.title, self.daily_rate, self.nwau
        )
    }

    pub fn is_palliative(&self) -> bool {
        self.class_code == ClassCode::PALLIATIVE
    }
}
