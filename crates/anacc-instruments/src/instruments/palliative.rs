use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::PalliativePhase;

use crate::Instrument;
use crate::scoring::ItemScore;

/// Palliative care referral questions.
pub struct PalliativeInstrument;

impl Instrument for PalliativeInstrument {
    fn id(&self) -> &str {
        "palliative"
    }

    fn name(&self) -> &str {
        "Palliative Care"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        let p = &record.palliative;
        vec![
            ItemScore::flag(
                "palliative.entered_for_palliative",
                "Entered for palliative care",
                p.entered_for_palliative,
            ),
            ItemScore::flag(
                "palliative.prognosis_under_3_months",
                "Prognosis under 3 months",
                p.prognosis_under_3_months,
            ),
            ItemScore::flag(
                "palliative.existing_care_plan",
                "Existing palliative care plan",
                p.existing_care_plan,
            ),
            ItemScore::flag(
                "palliative.akps_40_or_less",
                "AKPS 40 or less",
                p.akps_40_or_less,
            ),
            ItemScore::flag(
                "palliative.has_malignancy",
                "Malignancy",
                p.has_malignancy,
            ),
        ]
    }

    fn to_structured_input(&self, record: &AssessmentRecord) -> String {
        let mut output = format!("### {}\n", self.name());
        for item in self.items(record) {
            output.push_str(&format!("- {}: {}\n", item.name, item.display_value()));
        }
        let phase = record
            .palliative
            .palliative_phase
            .map(phase_label)
            .unwrap_or("Not recorded");
        output.push_str(&format!("- Palliative phase: {phase}\n"));
        output
    }
}

pub fn phase_label(phase: PalliativePhase) -> &'static str {
    match phase {
        PalliativePhase::Stable => "Stable",
        PalliativePhase::Unstable => "Unstable",
        PalliativePhase::Deteriorating => "Deteriorating",
        PalliativePhase::Terminal => "Terminal",
    }
}
