//! anacc-rates
//!
//! The versioned Rate/Threshold Table: per-class title, NWAU and daily
//! subsidy rate, plus every numeric cut-point the classifier compares
//! against. Tables are loaded from JSON, checked once at load time, and then
//! passed by reference into each classification as an immutable snapshot.

pub mod error;
pub mod schedule;
pub mod table;

pub use error::RateError;
pub use schedule::RateSchedule;
pub use table::{ClassRate, RateTable, SCHEMA_VERSION, Thresholds};
