//! Exhaustive lookup from branch outcome to class code.
//!
//! Every tier variant is spelled out so a new variant fails to compile until
//! each of its combinations has a row.

use anacc_core::{AdmissionType, ClassCode, FunctionTier, MobilityTier, PressureRiskBand};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The tuple the resolver is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BranchKey {
    pub mobility: MobilityTier,
    pub function: FunctionTier,
    pub pressure_risk_band: Option<PressureRiskBand>,
    pub compounding: bool,
}

impl std::fmt::Display for BranchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mobility={}, function={}", self.mobility, self.function)?;
        if let Some(band) = self.pressure_risk_band {
            write!(f, ", pressure_risk={band}")?;
        }
        write!(f, ", compounding={}", self.compounding)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub code: ClassCode,
    /// Whether `code` is a "with compounding" class.
    pub compounding_variant: bool,
}

impl Resolution {
    fn base(code: ClassCode) -> Self {
        Self {
            code,
            compounding_variant: false,
        }
    }

    fn compounding(code: ClassCode) -> Self {
        Self {
            code,
            compounding_variant: true,
        }
    }
}

/// Class for `key`, or `None` when no row matches. Respite classes depend on
/// mobility alone.
pub fn resolve(admission: AdmissionType, key: BranchKey) -> Option<Resolution> {
    use FunctionTier::{Higher, Lower};
    use MobilityTier::{Assisted, Independent, NotMobile};

    match admission {
        AdmissionType::Respite => Some(Resolution::base(match key.mobility {
            Independent => ClassCode::RESPITE_INDEPENDENT,
            Assisted => ClassCode::RESPITE_ASSISTED,
            NotMobile => ClassCode::RESPITE_NOT_MOBILE,
        })),
        AdmissionType::Permanent => {
            let tuple = (
                key.mobility,
                key.function,
                key.pressure_risk_band,
                key.compounding,
            );
            let resolution = match tuple {
                (Independent, Higher | Lower, None, false) => {
                    Resolution::base(ClassCode::INDEPENDENT)
                }
                (Independent, Higher | Lower, None, true) => {
                    Resolution::compounding(ClassCode::INDEPENDENT_COMPOUNDING)
                }
                (Assisted, Higher, None, false) => {
                    Resolution::base(ClassCode::ASSISTED_HIGH_COGNITION)
                }
                (Assisted, Higher, None, true) => {
                    Resolution::compounding(ClassCode::ASSISTED_HIGH_COGNITION_COMPOUNDING)
                }
                (Assisted, Lower, None, false) => {
                    Resolution::base(ClassCode::ASSISTED_MEDIUM_COGNITION)
                }
                (Assisted, Lower, None, true) => {
                    Resolution::compounding(ClassCode::ASSISTED_MEDIUM_COGNITION_COMPOUNDING)
                }
                (NotMobile, Higher, None, false) => {
                    Resolution::base(ClassCode::NOT_MOBILE_HIGHER_FUNCTION)
                }
                (NotMobile, Higher, None, true) => {
                    Resolution::compounding(ClassCode::NOT_MOBILE_HIGHER_FUNCTION_COMPOUNDING)
                }
                (NotMobile, Lower, Some(PressureRiskBand::Lower), false | true) => {
                    Resolution::base(ClassCode::NOT_MOBILE_LOWER_FUNCTION_LOWER_RISK)
                }
                (NotMobile, Lower, Some(PressureRiskBand::Higher), false) => {
                    Resolution::base(ClassCode::NOT_MOBILE_LOWER_FUNCTION_HIGHER_RISK)
                }
                (NotMobile, Lower, Some(PressureRiskBand::Higher), true) => Resolution::compounding(
                    ClassCode::NOT_MOBILE_LOWER_FUNCTION_HIGHER_RISK_COMPOUNDING,
                ),
                // The pressure split belongs to not-mobile, lower function only.
                (NotMobile, Lower, None, false | true)
                | (
                    Independent | Assisted | NotMobile,
                    Higher | Lower,
                    Some(PressureRiskBand::Lower | PressureRiskBand::Higher),
                    false | true,
                ) => return None,
            };
            Some(resolution)
        }
    }
}
