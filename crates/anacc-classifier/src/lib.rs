//! anacc-classifier
//!
//! Deterministic AN-ACC classification. Takes a validated assessment record
//! and a rate table, and returns the funding class with its rate and the
//! trace of every gate that led there.

pub mod batch;
pub mod branch;
pub mod classify;
pub mod error;
pub mod narrative;
pub mod palliative;
pub mod resolver;
pub mod result;
pub mod trace;

pub use batch::classify_batch;
pub use branch::BranchOutcome;
pub use classify::{classify, classify_on_date};
pub use error::ClassifyError;
pub use narrative::NarrativeInput;
pub use resolver::{BranchKey, Resolution, resolve};
pub use result::ClassificationResult;
pub use trace::{DecisionTrace, Rule, TraceEntry};
