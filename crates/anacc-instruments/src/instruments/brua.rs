use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::Brua;

use crate::Instrument;
use crate::scoring::{ItemScore, ScoreDomain, ScoreType};

pub const BRUA_LEVELS: ScoreDomain = ScoreDomain::Range { min: 1, max: 4 };

/// Code for "not applicable": the only level that does not count towards
/// behavioural complexity.
pub const NOT_APPLICABLE: u8 = 4;

/// BRUA: Behaviour Resource Utilisation Assessment. Five behaviours, each
/// coded 1 (extensive supervision) to 4 (not applicable).
pub struct BruaInstrument;

impl Instrument for BruaInstrument {
    fn id(&self) -> &str {
        "brua"
    }

    fn name(&self) -> &str {
        "BRUA"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        record
            .brua
            .items()
            .into_iter()
            .map(|(field, value)| {
                let item =
                    ItemScore::new(field, item_name(field), ScoreType::Ordinal, BRUA_LEVELS, value);
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
        "brua.wandering" => "Wandering",
        "brua.verbally_disruptive" => "Verbally disruptive or noisy",
        "brua.physically_aggressive" => "Physically aggressive",
        "brua.emotional_dependence" => "Emotional dependence",
        "brua.danger_to_self_or_others" => "Danger to self or others",
        _ => "Unknown behaviour",
    }
}

pub fn level_label(level: u8) -> Option<&'static str> {
    Some(match level {
        1 => "Extensively",
        2 => "Intermittently",
        3 => "Occasionally",
        4 => "Not applicable",
        _ => return None,
    })
}

/// The most severe (lowest-coded) behaviour level.
pub fn max_severity(brua: &Brua) -> u8 {
    brua.items()
        .iter()
        .map(|(_, value)| *value)
        .min()
        .unwrap_or(NOT_APPLICABLE)
}

pub fn is_qualifying(level: u8) -> bool {
    level < NOT_APPLICABLE
}

/// Field paths of behaviours coded below "not applicable".
pub fn qualifying_items(brua: &Brua) -> Vec<&'static str> {
    brua.items()
        .into_iter()
        .filter(|(_, value)| is_qualifying(*value))
        .map(|(field, _)| field)
        .collect()
}
