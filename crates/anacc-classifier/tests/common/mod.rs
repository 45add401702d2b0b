#![allow(dead_code)]

use anacc_core::{AssessmentRecord, ClassCode};
use anacc_core::models::assessment::*;
use std::sync::{Arc, Mutex};

use anacc_rates::RateTable;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// A resident who is independent on every instrument.
pub fn independent_resident() -> AssessmentRecord {
    AssessmentRecord {
        details: AssessmentDetails {
            assessor_id: "A-100".to_string(),
            facility_id: "F-7".to_string(),
            resident_id: "R-42".to_string(),
            place_of_assessment: PlaceOfAssessment::Racf,
            date_of_assessment: jiff::civil::date(2025, 11, 14),
            start_time: None,
            end_time: None,
        },
        nursing: TechnicalNursing::default(),
        rug_adl: RugAdl {
            bed_mobility: 1,
            toileting: 1,
            transfer: 1,
            eating: 1,
        },
        akps: 90,
        palliative: PalliativeCare {
            entered_for_palliative: false,
            prognosis_under_3_months: false,
            existing_care_plan: false,
            akps_40_or_less: false,
            has_malignancy: false,
            palliative_phase: None,
        },
        frailty: Frailty {
            fall_history: FallHistory::None,
            fallen_in_last_4_weeks: false,
            falls_in_last_4_weeks: 0,
            weight_loss_over_10_pct: false,
            rockwood: 2,
        },
        braden: Braden {
            sensory_perception: 4,
            moisture: 4,
            activity: 4,
            mobility: 4,
            nutrition: 3,
            friction_shear: 3,
        },
        demmi: Demmi {
            bed: DemmiBed {
                bridge: Achievement::Able,
                roll_onto_side: Achievement::Able,
                lying_to_sitting: AssistanceLevel::Independent,
            },
            chair: DemmiChair {
                sit_unsupported: TimedHold::TenSeconds,
                sit_to_stand: AssistanceLevel::Independent,
                sit_to_stand_no_arms: Achievement::Able,
            },
            balance: DemmiBalance {
                stand_unsupported: TimedHold::TenSeconds,
                stand_feet_together: TimedHold::TenSeconds,
                stand_on_toes: TimedHold::TenSeconds,
                tandem_stand_eyes_closed: TimedHold::TenSeconds,
            },
            walking: DemmiWalking {
                distance: WalkingDistance::FiftyMetres,
                independence: WalkingIndependence::IndependentWithoutAid,
            },
        },
        afm: Afm {
            self_care: AfmSelfCare {
                eating: 7,
                grooming: 7,
                bathing: 6,
                dressing_upper: 7,
                dressing_lower: 6,
                toileting: 7,
            },
            sphincter_control: AfmSphincterControl {
                bladder: 7,
                bowel: 7,
            },
            transfers: AfmTransfers {
                bed_chair_wheelchair: 7,
                toilet: 7,
                tub_shower: 6,
            },
            locomotion: AfmLocomotion { walk_wheelchair: 7 },
            communication: AfmCommunication {
                comprehension: 7,
                expression: 7,
            },
            social_cognition: AfmSocialCognition {
                social_interaction: 7,
                problem_solving: 6,
                memory: 6,
            },
        },
        brua: Brua {
            wandering: 4,
            verbally_disruptive: 4,
            physically_aggressive: 4,
            emotional_dependence: 4,
            danger_to_self_or_others: 4,
        },
    }
}

pub fn code(value: u16) -> ClassCode {
    ClassCode::new(value).unwrap()
}

pub fn table() -> RateTable {
    RateTable::bundled().unwrap()
}

/// Entered for palliative care with a short prognosis.
pub fn palliative_resident() -> AssessmentRecord {
    let mut record = independent_resident();
    record.palliative.entered_for_palliative = true;
    record.palliative.prognosis_under_3_months = true;
    record.akps = 30;
    record
}

/// RUG-ADL 3/4 and a DEMMI raw total of 11 (interval 56).
pub fn assisted_resident() -> AssessmentRecord {
    let mut record = independent_resident();
    record.rug_adl.bed_mobility = 3;
    record.rug_adl.transfer = 4;
    record.demmi.balance.stand_on_toes = TimedHold::Unable;
    record.demmi.balance.tandem_stand_eyes_closed = TimedHold::Unable;
    record.demmi.walking = DemmiWalking {
        distance: WalkingDistance::TenMetres,
        independence: WalkingIndependence::MinAssist,
    };
    record
}

/// Two-person transfers and no DEMMI item achieved.
pub fn not_mobile_resident() -> AssessmentRecord {
    let mut record = independent_resident();
    record.rug_adl.bed_mobility = 5;
    record.rug_adl.transfer = 5;
    record.demmi = Demmi {
        bed: DemmiBed {
            bridge: Achievement::Unable,
            roll_onto_side: Achievement::Unable,
            lying_to_sitting: AssistanceLevel::Unable,
        },
        chair: DemmiChair {
            sit_unsupported: TimedHold::Unable,
            sit_to_stand: AssistanceLevel::Unable,
            sit_to_stand_no_arms: Achievement::Unable,
        },
        balance: DemmiBalance {
            stand_unsupported: TimedHold::Unable,
            stand_feet_together: TimedHold::Unable,
            stand_on_toes: TimedHold::Unable,
            tandem_stand_eyes_closed: TimedHold::Unable,
        },
        walking: DemmiWalking {
            distance: WalkingDistance::Unable,
            independence: WalkingIndependence::Unable,
        },
    };
    record
}

/// AFM motor items summing to 20.
pub fn lower_motor_function(record: &mut AssessmentRecord) {
    record.afm.self_care = AfmSelfCare {
        eating: 2,
        grooming: 2,
        bathing: 1,
        dressing_upper: 2,
        dressing_lower: 1,
        toileting: 2,
    };
    record.afm.sphincter_control = AfmSphincterControl {
        bladder: 2,
        bowel: 2,
    };
    record.afm.transfers = AfmTransfers {
        bed_chair_wheelchair: 2,
        toilet: 1,
        tub_shower: 1,
    };
    record.afm.locomotion = AfmLocomotion { walk_wheelchair: 2 };
}

/// Braden items summing to `total`, between 6 and 23.
pub fn braden_total(record: &mut AssessmentRecord, total: u8) {
    let mut remaining = total - 6;
    let mut raise = |max: u8| {
        let extra = remaining.min(max - 1);
        remaining -= extra;
        1 + extra
    };
    record.braden = Braden {
        sensory_perception: raise(4),
        moisture: raise(4),
        activity: raise(4),
        mobility: raise(4),
        nutrition: raise(4),
        friction_shear: raise(3),
    };
}

/// Collects the `audit.action` field of every event, with its level.
#[derive(Clone, Default)]
struct AuditCapture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

struct ActionField(Option<String>);

impl Visit for ActionField {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "audit.action" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl Subscriber for AuditCapture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut action = ActionField(None);
        event.record(&mut action);
        if let Some(action) = action.0 {
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), action));
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Runs `f` and returns what it produced along with the audit actions it
/// emitted on this thread.
pub fn audit_actions<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    let capture = AuditCapture::default();
    let value = tracing::subscriber::with_default(capture.clone(), f);
    let events = capture.events.lock().unwrap().clone();
    (value, events)
}
