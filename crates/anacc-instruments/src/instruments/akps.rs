use anacc_core::AssessmentRecord;

use crate::Instrument;
use crate::scoring::{ItemScore, ScoreDomain, ScoreType};

pub const AKPS_LEVELS: ScoreDomain = ScoreDomain::Stepped {
    min: 10,
    max: 100,
    step: 10,
};

/// AKPS: Australia-modified Karnofsky Performance Status, 10–100 in tens.
pub struct Akps;

impl Instrument for Akps {
    fn id(&self) -> &str {
        "akps"
    }

    fn name(&self) -> &str {
        "AKPS"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        let item = ItemScore::new(
            "akps",
            "AKPS score",
            ScoreType::Performance,
            AKPS_LEVELS,
            record.akps,
        );
        match label(record.akps) {
            Some(text) => vec![item.with_label(text)],
            None => vec![item],
        }
    }
}

pub fn label(score: u8) -> Option<&'static str> {
    Some(match score {
        100 => "Normal; no complaints; no evidence of disease",
        90 => "Able to carry on normal activity; minor sign of symptoms of disease",
        80 => "Normal activity with effort; some signs or symptoms of disease",
        70 => "Cares for self; unable to carry on normal activity or to do active work",
        60 => "Able to care for most needs; but requires occasional assistance",
        50 => "Considerable assistance and frequent medical care required",
        40 => "In bed more than 50% of the time",
        30 => "Almost completely bedfast",
        20 => "Totally bedfast and requiring extensive nursing care",
        10 => "Comatose or barely rousable",
        _ => return None,
    })
}
