use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifies the rule that produced a trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Rule {
    Composites,
    BradenRisk,
    PalliativeOverride,
    PalliativeEvidence,
    MobilityRugAdl,
    MobilityDemmi,
    MobilityTier,
    FunctionTier,
    PressureRiskBand,
    ComplexNursing,
    BehaviouralComplexity,
    PressureInjuryRisk,
    ClassResolution,
    RateLookup,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rule::Composites => "composites",
            Rule::BradenRisk => "braden_risk",
            Rule::PalliativeOverride => "palliative_override",
            Rule::PalliativeEvidence => "palliative_evidence",
            Rule::MobilityRugAdl => "mobility_rug_adl",
            Rule::MobilityDemmi => "mobility_demmi",
            Rule::MobilityTier => "mobility_tier",
            Rule::FunctionTier => "function_tier",
            Rule::PressureRiskBand => "pressure_risk_band",
            Rule::ComplexNursing => "complex_nursing",
            Rule::BehaviouralComplexity => "behavioural_complexity",
            Rule::PressureInjuryRisk => "pressure_injury_risk",
            Rule::ClassResolution => "class_resolution",
            Rule::RateLookup => "rate_lookup",
        };
        f.write_str(name)
    }
}

/// One rule evaluation: what was compared, against what, and the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TraceEntry {
    pub rule: Rule,
    pub input: String,
    pub threshold: Option<String>,
    pub outcome: String,
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.threshold {
            Some(threshold) => write!(
                f,
                "{}: {} against {} -> {}",
                self.rule, self.input, threshold, self.outcome
            ),
            None => write!(f, "{}: {} -> {}", self.rule, self.input, self.outcome),
        }
    }
}

/// Append-only log of rule evaluations in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct DecisionTrace(Vec<TraceEntry>);

impl DecisionTrace {
    pub fn record(
        &mut self,
        rule: Rule,
        input: impl Into<String>,
        threshold: Option<String>,
        outcome: impl Into<String>,
    ) {
        self.0.push(TraceEntry {
            rule,
            input: input.into(),
            threshold,
            outcome: outcome.into(),
        });
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.0
    }

    /// The first entry produced by `rule`.
    pub fn find(&self, rule: Rule) -> Option<&TraceEntry> {
        self.0.iter().find(|entry| entry.rule == rule)
    }

    pub fn rules(&self) -> Vec<Rule> {
        self.0.iter().map(|entry| entry.rule).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
