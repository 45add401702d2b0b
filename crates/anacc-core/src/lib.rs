//! anacc-core
//!
//! Pure domain types for AN-ACC classification: the assessment record as the
//! data-collection wizard supplies it, admission types, tiers, and class codes.
//! No I/O. This is the shared vocabulary of the other anacc crates.

pub mod error;
pub mod models;

pub use error::CoreError;
pub use models::admission::AdmissionType;
pub use models::assessment::AssessmentRecord;
pub use models::class::ClassCode;
pub use models::tiers::{
    BradenRisk, CompoundingFactor, FunctionTier, MobilityTier, PressureRiskBand,
};
