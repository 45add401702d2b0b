//! Input for the narrative writer.
//!
//! Bundles the structured text of every instrument with the classification
//! and its trace. Nothing in the engine consumes this; it is handed to
//! whatever writes the funding justification.

use anacc_core::AssessmentRecord;
use anacc_instruments::all_instruments;

use crate::result::ClassificationResult;

/// A classified record, ready to be rendered as model context.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeInput<'a> {
    record: &'a AssessmentRecord,
    result: &'a ClassificationResult,
}

impl<'a> NarrativeInput<'a> {
    pub fn new(record: &'a AssessmentRecord, result: &'a ClassificationResult) -> Self {
        Self { record, result }
    }

    /// Markdown sections for each instrument, in form order.
    pub fn assessment_text(&self) -> String {
        all_instruments()
            .iter()
            .map(|instrument| instrument.to_structured_input(self.record))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// XML-style block with `<assessment>`, `<classification>` and
    /// `<decision_trace>` sections.
    pub fn to_prompt_block(&self) -> String {
        let result = self.result;
        let details = &self.record.details;

        let mut block = format!(
            "<assessment resident=\"{}\" facility=\"{}\" date=\"{}\">\n",
            details.resident_id, details.facility_id, details.date_of_assessment
        );
        let text = self.assessment_text();
        block.push_str(&text);
        if !text.ends_with('\n') {
            block.push('\n');
        }
        block.push_str("</assessment>\n");

        block.push_str(&format!(
            "<classification admission=\"{}\" table=\"{}\">\n",
            result.admission_type, result.table_version
        ));
        block.push_str(&format!("{}\n", result.summary()));
        if let Some(mobility) = result.mobility_tier {
            block.push_str(&format!("Mobility tier: {mobility}\n"));
        }
        if let Some(function) = result.function_tier {
            block.push_str(&format!("Function tier: {function}\n"));
        }
        if let Some(band) = result.pressure_risk_band {
            block.push_str(&format!("Pressure sore risk: {band}\n"));
        }
        block.push_str(&format!("Braden risk: {}\n", result.braden_risk));
        if !result.compounding_factors.is_empty() {
            let labels: Vec<&str> = result
                .compounding_factors
                .iter()
                .map(|factor| factor.label())
                .collect();
            block.push_str(&format!("Compounding factors: {}\n", labels.join(", ")));
        }
        block.push_str("</classification>\n");

        block.push_str("<decision_trace>\n");
        for entry in result.decision_trace.entries() {
            block.push_str(&format!("- {entry}\n"));
        }
        block.push_str("</decision_trace>");
        block
    }
}
