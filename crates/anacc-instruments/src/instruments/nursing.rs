use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::NursingRequirement;

use crate::Instrument;
use crate::scoring::ItemScore;

/// Technical nursing requirements: nine Yes/No flags.
pub struct TechnicalNursingInstrument;

impl Instrument for TechnicalNursingInstrument {
    fn id(&self) -> &str {
        "nursing"
    }

    fn name(&self) -> &str {
        "Technical Nursing Requirements"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        record
            .nursing
            .flags()
            .into_iter()
            .map(|(req, on)| ItemScore::flag(field(req), req.label(), on))
            .collect()
    }
}

fn field(req: NursingRequirement) -> &'static str {
    match req {
        NursingRequirement::Bariatric => "nursing.bariatric",
        NursingRequirement::Oxygen => "nursing.oxygen",
        NursingRequirement::EnteralFeeding => "nursing.enteral_feeding",
        NursingRequirement::Tracheostomy => "nursing.tracheostomy",
        NursingRequirement::Catheter => "nursing.catheter",
        NursingRequirement::Stoma => "nursing.stoma",
        NursingRequirement::PeritonealDialysis => "nursing.peritoneal_dialysis",
        NursingRequirement::DailyInjections => "nursing.daily_injections",
        NursingRequirement::ComplexWoundManagement => "nursing.complex_wound_management",
    }
}
