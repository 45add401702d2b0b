use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Mobility tier. Variants are ordered from least to most dependent, so the
/// more conservative of two tiers is their `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MobilityTier {
    Independent,
    Assisted,
    NotMobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FunctionTier {
    Higher,
    Lower,
}

/// Pressure-sore risk split applied only to not-mobile, lower-function
/// residents. Changes the base class (11 vs 12/13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PressureRiskBand {
    Lower,
    Higher,
}

/// Clinical Braden risk band, from the configured cut-points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BradenRisk {
    High,
    Moderate,
    Mild,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompoundingFactor {
    ComplexNursing,
    BehaviouralComplexity,
    HighPressureInjuryRisk,
}

impl CompoundingFactor {
    pub fn label(&self) -> &'static str {
        match self {
            CompoundingFactor::ComplexNursing => "complex nursing need",
            CompoundingFactor::BehaviouralComplexity => "behavioural complexity",
            CompoundingFactor::HighPressureInjuryRisk => "high pressure-injury risk",
        }
    }
}

impl std::fmt::Display for MobilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MobilityTier::Independent => "independent",
            MobilityTier::Assisted => "assisted",
            MobilityTier::NotMobile => "not_mobile",
        })
    }
}

impl std::fmt::Display for FunctionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FunctionTier::Higher => "higher",
            FunctionTier::Lower => "lower",
        })
    }
}

impl std::fmt::Display for PressureRiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PressureRiskBand::Lower => "lower",
            PressureRiskBand::Higher => "higher",
        })
    }
}

impl std::fmt::Display for BradenRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BradenRisk::High => "high",
            BradenRisk::Moderate => "moderate",
            BradenRisk::Mild => "mild",
            BradenRisk::Low => "low",
        })
    }
}
