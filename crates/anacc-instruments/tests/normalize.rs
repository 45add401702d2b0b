mod common;

use anacc_core::BradenRisk;
use anacc_core::models::assessment::{AssistanceLevel, TimedHold, WalkingDistance, WalkingIndependence};
use anacc_instruments::instruments::braden::BradenBands;
use anacc_instruments::instruments::{afm, braden, brua, demmi, rug_adl};
use anacc_instruments::{DemmiConversion, InstrumentError, normalize};
use common::{conversion, independent_resident};

#[test]
fn composites_for_an_independent_resident() {
    let scores = normalize(&independent_resident(), &conversion()).unwrap();

    assert_eq!(scores.rug_adl_total, 4);
    assert_eq!(scores.braden_total, 22);
    assert_eq!(scores.demmi_raw, demmi::MAX_RAW);
    assert_eq!(scores.demmi_score, 100);
    assert_eq!(scores.afm_motor_subtotal, 81);
    assert_eq!(scores.afm_cognitive_subtotal, 33);
    assert_eq!(scores.brua_max_severity, 4);
}

#[test]
fn normalizing_twice_gives_identical_composites() {
    let record = independent_resident();
    let table = conversion();
    assert_eq!(
        normalize(&record, &table).unwrap(),
        normalize(&record, &table).unwrap()
    );
}

#[test]
fn demmi_points_follow_item_scoring() {
    let mut record = independent_resident();
    // 2-point items drop to their middle answer
    record.demmi.bed.lying_to_sitting = AssistanceLevel::MinAssist;
    record.demmi.chair.sit_to_stand = AssistanceLevel::MinAssist;
    record.demmi.walking.distance = WalkingDistance::TwentyMetres;
    record.demmi.walking.independence = WalkingIndependence::IndependentWithAid;
    record.demmi.balance.tandem_stand_eyes_closed = TimedHold::Unable;

    let scores = normalize(&record, &conversion()).unwrap();
    assert_eq!(scores.demmi_raw, 11);
    assert_eq!(scores.demmi_score, 56);

    record.demmi.walking.distance = WalkingDistance::FiveMetres;
    record.demmi.walking.independence = WalkingIndependence::MinAssist;
    assert_eq!(demmi::raw_points(&record.demmi), 9);
}

#[test]
fn invalid_record_yields_no_composites() {
    let mut record = independent_resident();
    record.braden.moisture = 7;
    assert!(normalize(&record, &conversion()).is_err());
}

#[test]
fn brua_severity_is_the_lowest_code() {
    let mut record = independent_resident();
    record.brua.verbally_disruptive = 3;
    record.brua.danger_to_self_or_others = 2;

    let scores = normalize(&record, &conversion()).unwrap();
    assert_eq!(scores.brua_max_severity, 2);
    assert!(brua::is_qualifying(scores.brua_max_severity));
    assert_eq!(
        brua::qualifying_items(&record.brua),
        vec!["brua.verbally_disruptive", "brua.danger_to_self_or_others"]
    );
    assert!(!brua::is_qualifying(4));
}

#[test]
fn braden_bands_use_inclusive_upper_bounds() {
    let bands = BradenBands {
        high_risk_max: 12,
        moderate_risk_max: 14,
        mild_risk_max: 18,
    };
    assert!(bands.is_well_formed());
    assert_eq!(bands.risk(6), BradenRisk::High);
    assert_eq!(bands.risk(12), BradenRisk::High);
    assert_eq!(bands.risk(13), BradenRisk::Moderate);
    assert_eq!(bands.risk(18), BradenRisk::Mild);
    assert_eq!(bands.risk(19), BradenRisk::Low);

    let inverted = BradenBands {
        high_risk_max: 14,
        moderate_risk_max: 12,
        mild_risk_max: 18,
    };
    assert!(!inverted.is_well_formed());
}

#[test]
fn conversion_table_shape_is_checked() {
    assert!(matches!(
        DemmiConversion::new(vec![0, 50, 100]),
        Err(InstrumentError::InvalidConversion(_))
    ));

    let mut decreasing: Vec<u8> = (0..=16).map(|n| n * 6).collect();
    decreasing[16] = 100;
    decreasing[5] = 90;
    assert!(DemmiConversion::new(decreasing).is_err());

    let parsed: Result<DemmiConversion, _> = serde_json::from_str("[0, 100]");
    assert!(parsed.is_err());
}

#[test]
fn totals_of_unvalidated_records_saturate() {
    let mut record = independent_resident();
    record.braden.sensory_perception = 250;
    record.braden.moisture = 250;
    record.rug_adl.bed_mobility = 200;
    record.rug_adl.toileting = 200;
    record.afm.self_care.eating = 255;
    record.afm.communication.comprehension = 255;

    assert_eq!(braden::total(&record.braden), u8::MAX);
    assert_eq!(rug_adl::total(&record.rug_adl), u8::MAX);
    assert_eq!(afm::motor_subtotal(&record.afm), u8::MAX);
    assert_eq!(afm::cognitive_subtotal(&record.afm), u8::MAX);
    assert_eq!(braden::total(&independent_resident().braden), 22);
}
