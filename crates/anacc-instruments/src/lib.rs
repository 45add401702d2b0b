//! anacc-instruments
//!
//! Clinical instrument definitions for AN-ACC assessments. Pure data and
//! arithmetic with no configuration loading or I/O. Each instrument knows the
//! legal domain of its items, validates them, and contributes to the
//! composite scores the classifier consumes.

pub mod error;
pub mod instruments;
pub mod normalize;
pub mod scoring;

use anacc_core::AssessmentRecord;

pub use error::InstrumentError;
pub use instruments::demmi::DemmiConversion;
pub use normalize::{CompositeScores, normalize, validate};
pub use scoring::{FieldViolation, ItemScore, ScoreDomain, ScoreType, ValidationError};

/// Trait implemented by each clinical assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "braden", "afm").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Braden Scale").
    fn name(&self) -> &str;

    /// This instrument's items as recorded in `record`, in form order.
    fn items(&self, record: &AssessmentRecord) -> Vec<ItemScore>;

    /// Rules spanning more than one item. Empty for most instruments.
    fn cross_checks(&self, _record: &AssessmentRecord) -> Vec<FieldViolation> {
        Vec::new()
    }

    /// Every violation in this instrument's part of the record.
    fn validate(&self, record: &AssessmentRecord) -> Vec<FieldViolation> {
        let mut errors: Vec<FieldViolation> = self
            .items(record)
            .iter()
            .filter(|item| !item.domain.contains(item.value))
            .map(|item| FieldViolation::out_of_domain(self.name(), item))
            .collect();
        errors.extend(self.cross_checks(record));
        errors
    }

    /// Format this instrument's answers as structured text for the narrative
    /// generator.
    fn to_structured_input(&self, record: &AssessmentRecord) -> String {
        let mut output = format!("### {}\n", self.name());
        for item in self.items(record) {
            output.push_str(&format!("- {}: {}\n", item.name, item.display_value()));
        }
        output
    }
}

/// Return all registered instruments, in assessment-form order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::nursing::TechnicalNursingInstrument),
        Box::new(instruments::rug_adl::RugAdlInstrument),
        Box::new(instruments::akps::Akps),
        Box::new(instruments::palliative::PalliativeInstrument),
        Box::new(instruments::frailty::FrailtyInstrument),
        Box::new(instruments::braden::BradenScale),
        Box::new(instruments::demmi::DemmiInstrument),
        Box::new(instruments::afm::AfmInstrument),
        Box::new(instruments::brua::BruaInstrument),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
