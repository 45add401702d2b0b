#![allow(dead_code)]

use anacc_core::AssessmentRecord;
use anacc_core::models::assessment::*;
use anacc_instruments::DemmiConversion;

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

pub fn conversion() -> DemmiConversion {
    DemmiConversion::new(vec![
        0, 9, 16, 21, 26, 30, 34, 38, 42, 46, 51, 56, 62, 69, 77, 87, 100,
    ])
    .unwrap()
}
