//! anacc-audit
//!
//! Structured audit events for classification activity, emitted through
//! `tracing`. The decision trace attached to each result is the audit record
//! of *why*; these events record *that* a classification ran and how it ended.

pub mod error;
pub mod events;

pub use error::AuditError;
pub use events::{AuditEvent, AuditOutcome};
