mod common;

use anacc_classifier::{NarrativeInput, classify};
use anacc_core::AdmissionType;
use common::*;

#[test]
fn prompt_block_carries_record_classification_and_trace() {
    let mut record = not_mobile_resident();
    lower_motor_function(&mut record);
    braden_total(&mut record, 10);
    record.nursing.oxygen = true;
    let result = classify(&record, AdmissionType::Permanent, &table()).unwrap();

    let block = NarrativeInput::new(&record, &result).to_prompt_block();

    assert!(block.starts_with("<assessment resident=\"R-42\" facility=\"F-7\" date=\"2025-11-14\">\n"));
    assert!(block.contains("### Braden Scale\n"));
    assert!(block.contains("<classification admission=\"permanent\" table=\"2025-11\">\n"));
    assert!(block.contains("Class 13: Not mobile"));
    assert!(block.contains("Mobility tier: not_mobile\n"));
    assert!(block.contains("Pressure sore risk: higher\n"));
    assert!(block.contains("Compounding factors: complex nursing need, high pressure-injury risk\n"));
    assert!(block.contains("- function_tier: afm_motor_subtotal=20 against >= 50 higher -> lower\n"));
    assert!(block.ends_with("</decision_trace>"));
}

#[test]
fn palliative_block_omits_tiers() {
    let record = palliative_resident();
    let result = classify(&record, AdmissionType::Permanent, &table()).unwrap();

    let block = NarrativeInput::new(&record, &result).to_prompt_block();
    assert!(block.contains("Class 1: Admit for palliative care ($215.82/day, NWAU 0.73)\n"));
    assert!(!block.contains("Mobility tier"));
    assert!(!block.contains("Compounding factors"));
    assert!(block.contains("- palliative_override: "));
}

#[test]
fn assessment_text_lists_instruments_in_form_order() {
    let record = independent_resident();
    let result = classify(&record, AdmissionType::Respite, &table()).unwrap();
    let text = NarrativeInput::new(&record, &result).assessment_text();

    let braden = text.find("### Braden Scale").unwrap();
    let demmi = text.find("### DEMMI").unwrap();
    let brua = text.find("### BRUA").unwrap();
    assert!(braden < demmi && demmi < brua);
}
