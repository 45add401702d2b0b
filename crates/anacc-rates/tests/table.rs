use std::path::Path;

use anacc_core::ClassCode;
use anacc_rates::{RateError, RateSchedule, RateTable};
use serde_json::{Value, json};

fn bundled_json() -> Value {
    serde_json::to_value(RateTable::bundled().unwrap()).unwrap()
}

fn table_from(value: &Value) -> Result<RateTable, RateError> {
    RateTable::from_json(&value.to_string())
}

#[test]
fn bundled_table_has_all_sixteen_classes() {
    let table = RateTable::bundled().unwrap();
    assert_eq!(table.version, "2025-11");
    assert_eq!(table.classes.len(), 16);

    let palliative = table.class(ClassCode::PALLIATIVE).unwrap();
    assert_eq!(palliative.title, "Admit for palliative care");
    assert_eq!(palliative.nwau, 0.73);
    assert_eq!(palliative.daily_rate, 215.82);

    let respite = table.class(ClassCode::RESPITE_NOT_MOBILE).unwrap();
    assert_eq!(respite.daily_rate, 211.09);
}

#[test]
fn missing_class_row_is_a_configuration_error() {
    let mut value = bundled_json();
    value["classes"]
        .as_array_mut()
        .unwrap()
        .retain(|row| row["code"] != json!(12));

    let err = table_from(&value).unwrap_err();
    assert!(matches!(
        err,
        RateError::MissingClass { code, .. } if code.get() == 12
    ));
}

#[test]
fn duplicate_class_row_is_rejected() {
    let mut value = bundled_json();
    let first = value["classes"][0].clone();
    value["classes"].as_array_mut().unwrap().push(first);

    assert!(matches!(
        table_from(&value),
        Err(RateError::DuplicateClass { .. })
    ));
}

#[test]
fn class_rows_need_positive_funding() {
    let mut value = bundled_json();
    value["classes"][3]["daily_rate"] = json!(0.0);

    let err = table_from(&value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "rate table 2025-11: Class 4 needs a positive daily rate"
    );
}

#[test]
fn unknown_class_code_fails_to_parse() {
    let mut value = bundled_json();
    value["classes"][0]["code"] = json!(14);
    assert!(matches!(table_from(&value), Err(RateError::Parse(_))));
}

#[test]
fn missing_threshold_fails_to_parse() {
    let mut value = bundled_json();
    value["thresholds"]
        .as_object_mut()
        .unwrap()
        .remove("afm_motor_higher_min");
    assert!(matches!(table_from(&value), Err(RateError::Parse(_))));
}

#[test]
fn thresholds_are_checked_for_order() {
    let mut value = bundled_json();
    value["thresholds"]["demmi_not_mobile_below"] = json!(70);
    assert!(matches!(
        table_from(&value),
        Err(RateError::InvalidThreshold { name: "demmi_not_mobile_below", .. })
    ));

    let mut value = bundled_json();
    value["thresholds"]["braden"]["moderate_risk_max"] = json!(12);
    assert!(matches!(
        table_from(&value),
        Err(RateError::InvalidThreshold { name: "braden", .. })
    ));

    let mut value = bundled_json();
    value["thresholds"]["afm_motor_higher_min"] = json!(90);
    assert!(matches!(
        table_from(&value),
        Err(RateError::InvalidThreshold { name: "afm_motor_higher_min", .. })
    ));
}

#[test]
fn short_demmi_conversion_fails_to_parse() {
    let mut value = bundled_json();
    value["demmi_conversion"] = json!([0, 20, 40, 60, 80, 100]);
    assert!(matches!(table_from(&value), Err(RateError::Parse(_))));
}

#[test]
fn newer_schema_is_reported_before_shape_errors() {
    let value = json!({ "schema_version": 2, "rates": [] });
    assert!(matches!(
        table_from(&value),
        Err(RateError::UnsupportedSchemaVersion { found: 2, supported: 1 })
    ));
}

fn table_effective(from: &str, version: &str, rate: f64) -> RateTable {
    let mut value = bundled_json();
    value["effective_from"] = json!(from);
    value["version"] = json!(version);
    value["classes"][1]["daily_rate"] = json!(rate);
    table_from(&value).unwrap()
}

#[test]
fn schedule_picks_table_in_force_on_date() {
    let schedule = RateSchedule::new(vec![
        table_effective("2025-11-01", "2025-11", 62.08),
        table_effective("2024-10-01", "2024-10", 59.10),
    ])
    .unwrap();

    let old = schedule.table_for(jiff::civil::date(2025, 3, 9)).unwrap();
    assert_eq!(old.version, "2024-10");
    let boundary = schedule.table_for(jiff::civil::date(2025, 11, 1)).unwrap();
    assert_eq!(boundary.version, "2025-11");

    let err = schedule.table_for(jiff::civil::date(2024, 1, 1)).unwrap_err();
    assert_eq!(err.to_string(), "no rate table in force on 2024-01-01");
}

#[test]
fn schedule_rejects_duplicate_effective_dates() {
    let result = RateSchedule::new(vec![
        table_effective("2025-11-01", "a", 62.08),
        table_effective("2025-11-01", "b", 63.00),
    ]);
    assert!(matches!(result, Err(RateError::DuplicateEffectiveDate(_))));
}

#[test]
fn tables_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let older = table_effective("2024-10-01", "2024-10", 59.10);
    let older = serde_json::to_string_pretty(&older).unwrap();
    std::fs::write(dir.path().join("2024-10.json"), older).unwrap();
    std::fs::write(
        dir.path().join("2025-11.json"),
        serde_json::to_string(&bundled_json()).unwrap(),
    )
    .unwrap();
    std::fs::write(dir.path().join("README.txt"), "not a table").unwrap();

    let schedule = RateSchedule::load_dir(dir.path()).unwrap();
    assert_eq!(schedule.tables().len(), 2);
    assert_eq!(schedule.tables()[0].version, "2024-10");

    let single = RateTable::load(&dir.path().join("2025-11.json")).unwrap();
    assert_eq!(single, RateTable::bundled().unwrap());
}

#[test]
fn unreadable_path_is_an_io_error() {
    let err = RateTable::load(Path::new("/nonexistent/an_acc.json")).unwrap_err();
    assert!(matches!(err, RateError::Io { .. }));
}
