use anacc_audit::{AuditEvent, AuditOutcome};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Outcome {
    class_code: u16,
    table_version: &'static str,
}

#[test]
fn new_event_defaults_to_success_without_details() {
    let event = AuditEvent::new("classification.completed", "assessment", "R-42", "A-100");
    assert_eq!(event.outcome, AuditOutcome::Success);
    assert!(event.details.is_none());
    event.emit();
}

#[test]
fn serialized_details_are_attached() {
    let event = AuditEvent::new("classification.completed", "assessment", "R-42", "A-100")
        .with_serialized_details(&Outcome {
            class_code: 13,
            table_version: "2025-11",
        })
        .unwrap();

    assert_eq!(
        event.details,
        Some(json!({ "class_code": 13, "table_version": "2025-11" }))
    );
}

#[test]
fn failed_event_serializes_outcome_in_snake_case() {
    let event = AuditEvent::new("classification.failed", "assessment", "R-42", "A-100")
        .with_outcome(AuditOutcome::Failed)
        .with_details(json!({ "reason": "unclassifiable" }));
    event.emit();

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["outcome"], "failed");
    assert_eq!(value["details"]["reason"], "unclassifiable");
}
