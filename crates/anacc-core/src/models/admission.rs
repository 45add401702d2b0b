use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The care program a resident is entering. Selects between the permanent
/// class table (1–13) and the respite table (101–103); never inferred from
/// clinical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdmissionType {
    Permanent,
    Respite,
}

impl std::fmt::Display for AdmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdmissionType::Permanent => f.write_str("permanent"),
            AdmissionType::Respite => f.write_str("respite"),
        }
    }
}
