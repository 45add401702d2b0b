use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::Afm;

use crate::Instrument;
use crate::scoring::{ItemScore, ScoreDomain, ScoreType};

pub const AFM_LEVELS: ScoreDomain = ScoreDomain::Range { min: 1, max: 7 };

/// Australian Functional Measure. Twelve motor items (self-care, sphincter
/// control, transfers, locomotion) and five cognitive items (communication,
/// social cognition), each rated 1 (total assistance) to 7 (complete
/// independence).
pub struct AfmInstrument;

impl Instrument for AfmInstrument {
    fn id(&self) -> &str {
        "afm"
    }

    fn name(&self) -> &str {
        "AFM"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        let afm = &record.afm;
        afm.motor_items()
            .into_iter()
            .chain(afm.cognitive_items())
            .map(|(field, value)| {
                let item =
                    ItemScore::new(field, item_name(field), ScoreType::Ordinal, AFM_LEVELS, value);
                match level_label(value) {
                    Some(label) => item.with_label(label),
                    None => item,
                }
            })
            .collect()
    }
}

fn item_name(field: &str) -> &'static str {
    match field {
        "afm.self_care.eating" => "Eating",
        "afm.self_care.grooming" => "Grooming",
        "afm.self_care.bathing" => "Bathing",
        "afm.self_care.dressing_upper" => "Dressing (upper body)",
        "afm.self_care.dressing_lower" => "Dressing (lower body)",
        "afm.self_care.toileting" => "Toileting",
        "afm.sphincter_control.bladder" => "Bladder management",
        "afm.sphincter_control.bowel" => "Bowel management",
        "afm.transfers.bed_chair_wheelchair" => "Transfer: bed, chair, wheelchair",
        "afm.transfers.toilet" => "Transfer: toilet",
        "afm.transfers.tub_shower" => "Transfer: tub, shower",
        "afm.locomotion.walk_wheelchair" => "Walk/wheelchair",
        "afm.communication.comprehension" => "Comprehension",
        "afm.communication.expression" => "Expression",
        "afm.social_cognition.social_interaction" => "Social interaction",
        "afm.social_cognition.problem_solving" => "Problem solving",
        "afm.social_cognition.memory" => "Memory",
        _ => "Unknown item",
    }
}

pub fn level_label(level: u8) -> Option<&'static str> {
    Some(match level {
        7 => "Complete independence",
        6 => "Modified independence",
        5 => "Supervision",
        4 => "Minimal assistance",
        3 => "Moderate assistance",
        2 => "Maximal assistance",
        1 => "Total assistance",
        _ => return None,
    })
}

/// Sum of the twelve motor items, 12–84 for a validated record.
pub fn motor_subtotal(afm: &Afm) -> u8 {
    afm.motor_items()
        .iter()
        .map(|(_, value)| *value)
        .fold(0, u8::saturating_add)
}

/// Sum of the five cognitive items, 5–35 for a validated record.
pub fn cognitive_subtotal(afm: &Afm) -> u8 {
    afm.cognitive_items()
        .iter()
        .map(|(_, value)| *value)
        .fold(0, u8::saturating_add)
}
