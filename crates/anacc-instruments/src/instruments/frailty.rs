use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::FallHistory;

use crate::Instrument;
use crate::scoring::{FieldViolation, ItemScore, ScoreDomain, ScoreType};

pub const ROCKWOOD_LEVELS: ScoreDomain = ScoreDomain::Range { min: 1, max: 9 };
pub const RECENT_FALLS: ScoreDomain = ScoreDomain::Range { min: 0, max: 50 };

/// Falls history, weight loss and the Rockwood Clinical Frailty Scale.
pub struct FrailtyInstrument;

impl Instrument for FrailtyInstrument {
    fn id(&self) -> &str {
        "frailty"
    }

    fn name(&self) -> &str {
        "Frailty"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        let f = &record.frailty;
        let (falls, falls_label) = match f.fall_history {
            FallHistory::None => (0, "No"),
            FallHistory::OnceIn12Months => (1, "Yes, once"),
            FallHistory::MultipleIn12Months => (2, "Yes, more than once"),
        };
        let mut items = vec![
            ItemScore::new(
                "frailty.fall_history",
                "Fallen in last 12 months",
                ScoreType::Ordinal,
                ScoreDomain::Range { min: 0, max: 2 },
                falls,
            )
            .with_label(falls_label),
            ItemScore::flag(
                "frailty.fallen_in_last_4_weeks",
                "Fallen in last 4 weeks",
                f.fallen_in_last_4_weeks,
            ),
            ItemScore::new(
                "frailty.falls_in_last_4_weeks",
                "Falls in last 4 weeks",
                ScoreType::Count,
                RECENT_FALLS,
                f.falls_in_last_4_weeks,
            ),
            ItemScore::flag(
                "frailty.weight_loss_over_10_pct",
                "Lost more than 10% body weight",
                f.weight_loss_over_10_pct,
            ),
        ];
        let rockwood = ItemScore::new(
            "frailty.rockwood",
            "Rockwood Clinical Frailty Scale",
            ScoreType::Ordinal,
            ROCKWOOD_LEVELS,
            f.rockwood,
        );
        items.push(match rockwood_label(f.rockwood) {
            Some(label) => rockwood.with_label(label),
            None => rockwood,
        });
        items
    }

    fn cross_checks(&self, record: &AssessmentRecord) -> Vec<FieldViolation> {
        let f = &record.frailty;
        let mut errors = Vec::new();

        if f.falls_in_last_4_weeks > 0 && !f.fallen_in_last_4_weeks {
            errors.push(FieldViolation::invalid(
                "frailty.falls_in_last_4_weeks",
                f.falls_in_last_4_weeks.to_string(),
                "0 when no fall in last 4 weeks",
                format!(
                    "Frailty: falls_in_last_4_weeks={} but fallen_in_last_4_weeks is No",
                    f.falls_in_last_4_weeks
                ),
            ));
        }
        if f.fallen_in_last_4_weeks && f.falls_in_last_4_weeks == 0 {
            errors.push(FieldViolation::invalid(
                "frailty.falls_in_last_4_weeks",
                "0",
                "at least 1 when fallen in last 4 weeks",
                "Frailty: falls_in_last_4_weeks missing for a fall in the last 4 weeks",
            ));
        }
        if f.fallen_in_last_4_weeks && f.fall_history == FallHistory::None {
            errors.push(FieldViolation::invalid(
                "frailty.fall_history",
                "none",
                "once or more when fallen in last 4 weeks",
                "Frailty: fall_history=none contradicts a fall in the last 4 weeks",
            ));
        }
        errors
    }
}

pub fn rockwood_label(score: u8) -> Option<&'static str> {
    Some(match score {
        1 => "Very fit",
        2 => "Well",
        3 => "Managing well",
        4 => "Living with very mild frailty",
        5 => "Living with mild frailty",
        6 => "Living with moderate frailty",
        7 => "Living with severe frailty",
        8 => "Living with very severe frailty",
        9 => "Terminally ill",
        _ => return None,
    })
}
