use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::admission::AdmissionType;

/// An AN-ACC funding class: 1–13 for permanent care, 101–103 for respite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u16", into = "u16")]
#[ts(export)]
pub struct ClassCode(u16);

impl ClassCode {
    pub const PALLIATIVE: ClassCode = ClassCode(1);
    pub const INDEPENDENT: ClassCode = ClassCode(2);
    pub const INDEPENDENT_COMPOUNDING: ClassCode = ClassCode(3);
    pub const ASSISTED_HIGH_COGNITION: ClassCode = ClassCode(4);
    pub const ASSISTED_HIGH_COGNITION_COMPOUNDING: ClassCode = ClassCode(5);
    pub const ASSISTED_MEDIUM_COGNITION: ClassCode = ClassCode(6);
    pub const ASSISTED_MEDIUM_COGNITION_COMPOUNDING: ClassCode = ClassCode(7);
    pub const ASSISTED_LOW_COGNITION: ClassCode = ClassCode(8);
    pub const NOT_MOBILE_HIGHER_FUNCTION: ClassCode = ClassCode(9);
    pub const NOT_MOBILE_HIGHER_FUNCTION_COMPOUNDING: ClassCode = ClassCode(10);
    pub const NOT_MOBILE_LOWER_FUNCTION_LOWER_RISK: ClassCode = ClassCode(11);
    pub const NOT_MOBILE_LOWER_FUNCTION_HIGHER_RISK: ClassCode = ClassCode(12);
    pub const NOT_MOBILE_LOWER_FUNCTION_HIGHER_RISK_COMPOUNDING: ClassCode = ClassCode(13);
    pub const RESPITE_INDEPENDENT: ClassCode = ClassCode(101);
    pub const RESPITE_ASSISTED: ClassCode = ClassCode(102);
    pub const RESPITE_NOT_MOBILE: ClassCode = ClassCode(103);

    /// Build a class code, rejecting numbers outside both tables.
    pub fn new(code: u16) -> Result<Self, CoreError> {
        if (1..=13).contains(&code) || (101..=103).contains(&code) {
            Ok(Self(code))
        } else {
            Err(CoreError::InvalidClassCode(code))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn is_permanent(self) -> bool {
        (1..=13).contains(&self.0)
    }

    pub fn is_respite(self) -> bool {
        (101..=103).contains(&self.0)
    }

    pub fn admission_type(self) -> AdmissionType {
        if self.is_respite() {
            AdmissionType::Respite
        } else {
            AdmissionType::Permanent
        }
    }

    /// Every defined code, permanent classes first.
    pub fn all() -> impl Iterator<Item = ClassCode> {
        (1..=13).chain(101..=103).map(ClassCode)
    }
}

impl TryFrom<u16> for ClassCode {
    type Error = CoreError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClassCode> for u16 {
    fn from(code: ClassCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for ClassCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Class {}", self.0)
    }
}
