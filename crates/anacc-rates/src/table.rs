use std::collections::BTreeSet;
use std::path::Path;

use anacc_core::ClassCode;
use anacc_instruments::DemmiConversion;
use anacc_instruments::instruments::braden::{self, BradenBands};
use serde::{Deserialize, Serialize};

use crate::error::RateError;

/// Current table schema version. Bump this when the JSON shape changes.
pub const SCHEMA_VERSION: u32 = 1;

const BUNDLED_2025_11: &str = include_str!("../tables/an_acc_2025_11.json");

/// Title and funding for one AN-ACC class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRate {
    pub code: ClassCode,
    pub title: String,
    pub nwau: f64,
    pub daily_rate: f64,
}

/// Cut-points used by the branch classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// DEMMI interval score at or above which a resident is ambulant.
    pub demmi_ambulant_min: u8,
    /// DEMMI interval score below which a resident is not mobile.
    pub demmi_not_mobile_below: u8,
    /// AFM motor subtotal at or above which function is higher.
    pub afm_motor_higher_min: u8,
    pub braden: BradenBands,
    /// Braden total at or below which a not-mobile, lower-function resident
    /// is in the higher pressure-sore risk class.
    pub pressure_sore_higher_risk_max: u8,
}

/// One effective-dated snapshot of classes, rates and thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub schema_version: u32,
    pub version: String,
    pub effective_from: jiff::civil::Date,
    pub classes: Vec<ClassRate>,
    pub thresholds: Thresholds,
    pub demmi_conversion: DemmiConversion,
}

impl RateTable {
    /// The November 2025 table compiled into this build.
    pub fn bundled() -> Result<Self, RateError> {
        Self::from_json(BUNDLED_2025_11)
    }

    pub fn from_json(json: &str) -> Result<Self, RateError> {
        // Parse as raw JSON first so a newer schema is reported as such
        // instead of as whatever field it no longer matches.
        let value: serde_json::Value = serde_json::from_str(json)?;
        let found = value
            .get("schema_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        if found > SCHEMA_VERSION {
            return Err(RateError::UnsupportedSchemaVersion {
                found,
                supported: SCHEMA_VERSION,
            });
        }

        let table: RateTable = serde_json::from_value(value)?;
        table.check()?;
        tracing::debug!(
            version = %table.version,
            effective_from = %table.effective_from,
            "rate table loaded"
        );
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, RateError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), version = %table.version, "rate table read");
        Ok(table)
    }

    /// The row for `code`.
    pub fn class(&self, code: ClassCode) -> Result<&ClassRate, RateError> {
        self.classes
            .iter()
            .find(|row| row.code == code)
            .ok_or_else(|| RateError::MissingClass {
                version: self.version.clone(),
                code,
            })
    }

    /// Integrity check run on every load path.
    fn check(&self) -> Result<(), RateError> {
        let mut seen = BTreeSet::new();
        for row in &self.classes {
            if !seen.insert(row.code) {
                return Err(RateError::DuplicateClass {
                    version: self.version.clone(),
                    code: row.code,
                });
            }
            let problem = if row.title.trim().is_empty() {
                Some("has no title")
            } else if !(row.nwau.is_finite() && row.nwau > 0.0) {
                Some("needs a positive NWAU")
            } else if !(row.daily_rate.is_finite() && row.daily_rate > 0.0) {
                Some("needs a positive daily rate")
            } else {
                None
            };
            if let Some(detail) = problem {
                return Err(RateError::InvalidClassRow {
                    version: self.version.clone(),
                    code: row.code,
                    detail: detail.to_string(),
                });
            }
        }
        for code in ClassCode::all() {
            self.class(code)?;
        }

        let t = &self.thresholds;
        if t.demmi_not_mobile_below >= t.demmi_ambulant_min {
            return Err(self.threshold(
                "demmi_not_mobile_below",
                format!(
                    "({}) must be below demmi_ambulant_min ({})",
                    t.demmi_not_mobile_below, t.demmi_ambulant_min
                ),
            ));
        }
        if t.demmi_ambulant_min > 100 {
            return Err(self.threshold(
                "demmi_ambulant_min",
                format!("({}) exceeds the DEMMI scale maximum 100", t.demmi_ambulant_min),
            ));
        }
        if !(12..=84).contains(&t.afm_motor_higher_min) {
            return Err(self.threshold(
                "afm_motor_higher_min",
                format!("({}) is outside the AFM motor range 12–84", t.afm_motor_higher_min),
            ));
        }
        if !t.braden.is_well_formed() {
            return Err(self.threshold(
                "braden",
                format!(
                    "bands {}/{}/{} must rise strictly within {}–{}",
                    t.braden.high_risk_max,
                    t.braden.moderate_risk_max,
                    t.braden.mild_risk_max,
                    braden::TOTAL_MIN,
                    braden::TOTAL_MAX
                ),
            ));
        }
        if !(braden::TOTAL_MIN..=braden::TOTAL_MAX).contains(&t.pressure_sore_higher_risk_max) {
            return Err(self.threshold(
                "pressure_sore_higher_risk_max",
                format!(
                    "({}) is outside the Braden range {}–{}",
                    t.pressure_sore_higher_risk_max,
                    braden::TOTAL_MIN,
                    braden::TOTAL_MAX
                ),
            ));
        }

        Ok(())
    }

    fn threshold(&self, name: &'static str, detail: String) -> RateError {
        RateError::InvalidThreshold {
            version: self.version.clone(),
            name,
            detail,
        }
    }
}
