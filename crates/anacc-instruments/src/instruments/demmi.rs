use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::{
    Achievement, AssistanceLevel, Demmi, TimedHold, WalkingDistance, WalkingIndependence,
};
use serde::{Deserialize, Serialize};

use crate::Instrument;
use crate::error::InstrumentError;
use crate::scoring::{ItemScore, ScoreDomain, ScoreType};

/// Highest raw point total the modified form can reach.
pub const MAX_RAW: u8 = 16;

/// Modified de Morton Mobility Index: bed, chair, static balance and
/// walking. Twelve items, each answer worth 0–2 points; the raw total is
/// converted to a 0–100 interval score by a published table.
pub struct DemmiInstrument;

impl Instrument for DemmiInstrument {
    fn id(&self) -> &str {
        "demmi"
    }

    fn name(&self) -> &str {
        "DEMMI"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        demmi_items(&record.demmi)
    }
}

fn demmi_items(d: &Demmi) -> Vec<ItemScore> {
    vec![
        achievement("demmi.bed.bridge", "Bridge", d.bed.bridge),
        achievement("demmi.bed.roll_onto_side", "Roll onto side", d.bed.roll_onto_side),
        assistance("demmi.bed.lying_to_sitting", "Lying to sitting", d.bed.lying_to_sitting),
        timed("demmi.chair.sit_unsupported", "Sit unsupported in chair", d.chair.sit_unsupported),
        assistance("demmi.chair.sit_to_stand", "Sit to stand from chair", d.chair.sit_to_stand),
        achievement(
            "demmi.chair.sit_to_stand_no_arms",
            "Sit to stand without using arms",
            d.chair.sit_to_stand_no_arms,
        ),
        timed(
            "demmi.balance.stand_unsupported",
            "Stand unsupported",
            d.balance.stand_unsupported,
        ),
        timed(
            "demmi.balance.stand_feet_together",
            "Stand feet together",
            d.balance.stand_feet_together,
        ),
        timed("demmi.balance.stand_on_toes", "Stand on toes", d.balance.stand_on_toes),
        timed(
            "demmi.balance.tandem_stand_eyes_closed",
            "Tandem stand with eyes closed",
            d.balance.tandem_stand_eyes_closed,
        ),
        walking_distance(d.walking.distance),
        walking_independence(d.walking.independence),
    ]
}

fn points(
    field: &'static str,
    name: &'static str,
    max: u8,
    value: u8,
    label: &'static str,
) -> ItemScore {
    let domain = ScoreDomain::Range { min: 0, max };
    ItemScore::new(field, name, ScoreType::Points, domain, value).with_label(label)
}

fn achievement(field: &'static str, name: &'static str, answer: Achievement) -> ItemScore {
    match answer {
        Achievement::Unable => points(field, name, 1, 0, "unable"),
        Achievement::Able => points(field, name, 1, 1, "able"),
    }
}

fn timed(field: &'static str, name: &'static str, answer: TimedHold) -> ItemScore {
    match answer {
        TimedHold::Unable => points(field, name, 1, 0, "unable"),
        TimedHold::TenSeconds => points(field, name, 1, 1, "10 sec"),
    }
}

fn assistance(field: &'static str, name: &'static str, answer: AssistanceLevel) -> ItemScore {
    match answer {
        AssistanceLevel::Unable => points(field, name, 2, 0, "unable"),
        AssistanceLevel::MinAssist => points(field, name, 2, 1, "min assist/supervision"),
        AssistanceLevel::Independent => points(field, name, 2, 2, "independent"),
    }
}

fn walking_distance(answer: WalkingDistance) -> ItemScore {
    let (value, label) = match answer {
        WalkingDistance::Unable => (0, "unable"),
        WalkingDistance::FiveMetres => (0, "5m"),
        WalkingDistance::TenMetres => (1, "10m"),
        WalkingDistance::TwentyMetres => (1, "20m"),
        WalkingDistance::FiftyMetres => (2, "50m"),
    };
    points("demmi.walking.distance", "Walking distance", 2, value, label)
}

fn walking_independence(answer: WalkingIndependence) -> ItemScore {
    let (value, label) = match answer {
        WalkingIndependence::Unable => (0, "unable"),
        WalkingIndependence::MinAssist => (0, "min assist/supervision"),
        WalkingIndependence::IndependentWithAid => (1, "independent with aid"),
        WalkingIndependence::IndependentWithoutAid => (2, "independent without aid"),
    };
    points("demmi.walking.independence", "Walking independence", 2, value, label)
}

/// Raw point total across all four domains, 0..=`MAX_RAW`.
pub fn raw_points(demmi: &Demmi) -> u8 {
    demmi_items(demmi).iter().map(|item| item.value).sum()
}

/// Raw-total to interval-score table. Entry `n` is the 0–100 score for a raw
/// total of `n` points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DemmiConversion(Vec<u8>);

impl DemmiConversion {
    pub fn new(scores: Vec<u8>) -> Result<Self, InstrumentError> {
        let expected = usize::from(MAX_RAW) + 1;
        if scores.len() != expected {
            return Err(InstrumentError::InvalidConversion(format!(
                "expected {expected} entries (raw 0..={MAX_RAW}), found {}",
                scores.len()
            )));
        }
        if scores.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(InstrumentError::InvalidConversion(
                "interval scores must not decrease as raw points rise".to_string(),
            ));
        }
        if scores.first() != Some(&0) || scores.last() != Some(&100) {
            return Err(InstrumentError::InvalidConversion(
                "interval scores must run from 0 to 100".to_string(),
            ));
        }
        Ok(Self(scores))
    }

    /// Interval score for a raw point total. Totals above `MAX_RAW` cannot
    /// come from a record and read as the top of the scale.
    pub fn interval(&self, raw: u8) -> u8 {
        self.0
            .get(usize::from(raw))
            .or(self.0.last())
            .copied()
            .unwrap_or(100)
    }
}

impl TryFrom<Vec<u8>> for DemmiConversion {
    type Error = InstrumentError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DemmiConversion> for Vec<u8> {
    fn from(table: DemmiConversion) -> Self {
        table.0
    }
}
