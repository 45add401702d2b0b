use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// How an item's value should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Yes/No answer stored as 0/1.
    Flag,
    /// Ordinal rating; direction depends on the instrument.
    Ordinal,
    /// Points awarded for a DEMMI answer.
    Points,
    /// Performance status in steps of 10 (AKPS).
    Performance,
    /// Plain event count.
    Count,
}

/// The set of values an item may legally take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDomain {
    Range { min: u8, max: u8 },
    Stepped { min: u8, max: u8, step: u8 },
    OneOf(&'static [u8]),
}

impl ScoreDomain {
    pub fn contains(&self, value: u8) -> bool {
        match *self {
            ScoreDomain::Range { min, max } => (min..=max).contains(&value),
            ScoreDomain::Stepped { min, max, step } => {
                (min..=max).contains(&value) && (value - min) % step == 0
            }
            ScoreDomain::OneOf(values) => values.contains(&value),
        }
    }

    /// Describe why `value` falls outside this domain.
    pub fn describe_violation(&self, value: u8) -> String {
        match *self {
            ScoreDomain::Range { max, .. } | ScoreDomain::Stepped { max, .. } if value > max => {
                format!("exceeds max {max}")
            }
            ScoreDomain::Range { min, .. } | ScoreDomain::Stepped { min, .. } if value < min => {
                format!("is below min {min}")
            }
            ScoreDomain::Stepped { min, step, .. } => {
                format!("is not {min} plus a multiple of {step}")
            }
            _ => format!("is not one of {self}"),
        }
    }
}

impl std::fmt::Display for ScoreDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreDomain::Range { min, max } => write!(f, "[{min}, {max}]"),
            ScoreDomain::Stepped { min, max, step } => {
                write!(f, "[{min}, {max}] in steps of {step}")
            }
            ScoreDomain::OneOf(values) => {
                let listed: Vec<String> = values.iter().map(u8::to_string).collect();
                write!(f, "{{{}}}", listed.join(", "))
            }
        }
    }
}

/// One scored item of an instrument, read out of an assessment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemScore {
    /// Dotted path of the field in the assessment record.
    pub field: &'static str,
    pub name: &'static str,
    pub score_type: ScoreType,
    pub domain: ScoreDomain,
    pub value: u8,
    /// Answer label for items recorded as a choice rather than a number.
    pub label: Option<&'static str>,
}

impl ItemScore {
    pub fn new(
        field: &'static str,
        name: &'static str,
        score_type: ScoreType,
        domain: ScoreDomain,
        value: u8,
    ) -> Self {
        Self {
            field,
            name,
            score_type,
            domain,
            value,
            label: None,
        }
    }

    pub fn flag(field: &'static str, name: &'static str, on: bool) -> Self {
        Self::new(
            field,
            name,
            ScoreType::Flag,
            ScoreDomain::Range { min: 0, max: 1 },
            u8::from(on),
        )
    }

    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Human-readable answer for structured output.
    pub fn display_value(&self) -> String {
        match (self.score_type, self.label) {
            (_, Some(label)) => format!("{label} ({})", self.value),
            (ScoreType::Flag, None) if self.value == 1 => "Yes".to_string(),
            (ScoreType::Flag, None) => "No".to_string(),
            _ => self.value.to_string(),
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldViolation {
    pub field: String,
    pub value: String,
    pub expected: String,
    pub message: String,
}

impl FieldViolation {
    pub fn out_of_domain(instrument: &str, item: &ItemScore) -> Self {
        let short = item.field.rsplit('.').next().unwrap_or(item.field);
        Self {
            field: item.field.to_string(),
            value: item.value.to_string(),
            expected: item.domain.to_string(),
            message: format!(
                "{instrument}: {short}={} {}",
                item.value,
                item.domain.describe_violation(item.value)
            ),
        }
    }

    pub fn invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
            message: message.into(),
        }
    }
}

/// Every violation found in one assessment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{} invalid field(s): {}", .violations.len(), summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
