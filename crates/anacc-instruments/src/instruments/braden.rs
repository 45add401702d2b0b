use anacc_core::models::assessment::Braden;
use anacc_core::{AssessmentRecord, BradenRisk};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::scoring::{ItemScore, ScoreDomain, ScoreType};

pub const FOUR_POINT: ScoreDomain = ScoreDomain::Range { min: 1, max: 4 };
pub const THREE_POINT: ScoreDomain = ScoreDomain::Range { min: 1, max: 3 };

/// Lowest and highest possible Braden totals.
pub const TOTAL_MIN: u8 = 6;
pub const TOTAL_MAX: u8 = 23;

/// Braden Scale for predicting pressure-injury risk. Six domains, total
/// 6–23; lower totals mean higher risk.
pub struct BradenScale;

impl Instrument for BradenScale {
    fn id(&self) -> &str {
        "braden"
    }

    fn name(&self) -> &str {
        "Braden Scale"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        let b = &record.braden;
        vec![
            item(
                "braden.sensory_perception",
                "Sensory perception",
                FOUR_POINT,
                b.sensory_perception,
            ),
            item("braden.moisture", "Moisture", FOUR_POINT, b.moisture),
            item("braden.activity", "Activity", FOUR_POINT, b.activity),
            item("braden.mobility", "Mobility", FOUR_POINT, b.mobility),
            item("braden.nutrition", "Nutrition", FOUR_POINT, b.nutrition),
            item(
                "braden.friction_shear",
                "Friction & shear",
                THREE_POINT,
                b.friction_shear,
            ),
        ]
    }
}

fn item(field: &'static str, name: &'static str, domain: ScoreDomain, value: u8) -> ItemScore {
    ItemScore::new(field, name, ScoreType::Ordinal, domain, value)
}

/// Sum of the six sub-scores, 6–23 for a validated record. Out-of-domain
/// items saturate at 255 rather than overflow.
pub fn total(braden: &Braden) -> u8 {
    [
        braden.sensory_perception,
        braden.moisture,
        braden.activity,
        braden.mobility,
        braden.nutrition,
        braden.friction_shear,
    ]
    .into_iter()
    .fold(0, u8::saturating_add)
}

/// Upper bounds (inclusive) of each risk band. Totals above `mild_risk_max`
/// are low risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BradenBands {
    pub high_risk_max: u8,
    pub moderate_risk_max: u8,
    pub mild_risk_max: u8,
}

impl BradenBands {
    pub fn risk(&self, total: u8) -> BradenRisk {
        if total <= self.high_risk_max {
            BradenRisk::High
        } else if total <= self.moderate_risk_max {
            BradenRisk::Moderate
        } else if total <= self.mild_risk_max {
            BradenRisk::Mild
        } else {
            BradenRisk::Low
        }
    }

    /// Bands must rise strictly and fall inside the possible totals.
    pub fn is_well_formed(&self) -> bool {
        TOTAL_MIN <= self.high_risk_max
            && self.high_risk_max < self.moderate_risk_max
            && self.moderate_risk_max < self.mild_risk_max
            && self.mild_risk_max < TOTAL_MAX
    }
}
