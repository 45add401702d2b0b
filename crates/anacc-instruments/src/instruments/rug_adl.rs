use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::RugAdl;

use crate::Instrument;
use crate::scoring::{ItemScore, ScoreDomain, ScoreType};

/// Bed mobility, toileting and transfer skip 2: the form has no
/// "limited assistance" level for them.
pub const ADL_LEVELS: ScoreDomain = ScoreDomain::OneOf(&[1, 3, 4, 5]);
pub const EATING_LEVELS: ScoreDomain = ScoreDomain::Range { min: 1, max: 3 };

/// RUG-ADL: Resource Utilization Groups – Activities of Daily Living.
/// Four domains; higher scores mean more dependency, total 4–18.
pub struct RugAdlInstrument;

impl Instrument for RugAdlInstrument {
    fn id(&self) -> &str {
        "rug_adl"
    }

    fn name(&self) -> &str {
        "RUG-ADL"
    }

    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore> {
        let adl = &record.rug_adl;
        vec![
            item("rug_adl.bed_mobility", "Bed mobility", ADL_LEVELS, adl.bed_mobility),
            item("rug_adl.toileting", "Toileting", ADL_LEVELS, adl.toileting),
            item("rug_adl.transfer", "Transfer", ADL_LEVELS, adl.transfer),
            item("rug_adl.eating", "Eating", EATING_LEVELS, adl.eating),
        ]
    }
}

fn item(field: &'static str, name: &'static str, domain: ScoreDomain, value: u8) -> ItemScore {
    ItemScore::new(field, name, ScoreType::Ordinal, domain, value)
}

/// Sum of the four domains. Lower totals mean less dependency. Totals of
/// unvalidated records saturate rather than overflow.
pub fn total(adl: &RugAdl) -> u8 {
    [adl.bed_mobility, adl.toileting, adl.transfer, adl.eating]
        .into_iter()
        .fold(0, u8::saturating_add)
}
