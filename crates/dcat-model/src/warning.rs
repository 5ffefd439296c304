//! Per-field warnings emitted during conversion.
//!
//! Warnings never abort a conversion. They are collected per record and
//! returned next to the produced document.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a warning was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Source key has no mapping table entry; the field was dropped.
    UnmappedProperty,
    /// A date-typed value matched no accepted date form; the field was omitted.
    InvalidDateValue,
    /// A date-typed value holds a duration or repeating interval; the field was omitted.
    FrequencyInDateField,
    /// A field required by the target shapes was synthesized.
    DefaultInjected,
    /// A value had the wrong JSON shape for its property; the field was omitted.
    UnexpectedValueType,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnmappedProperty => "UNMAPPED_PROPERTY",
            Self::InvalidDateValue => "INVALID_DATE_VALUE",
            Self::FrequencyInDateField => "FREQUENCY_IN_DATE_FIELD",
            Self::DefaultInjected => "DEFAULT_INJECTED",
            Self::UnexpectedValueType => "UNEXPECTED_VALUE_TYPE",
        }
    }

    /// Informational codes describe additions, not data loss.
    pub fn is_informational(self) -> bool {
        matches!(self, Self::DefaultInjected)
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversion warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Identifier of the record the field belongs to.
    pub record_id: String,
    /// Source-side path of the field, e.g. `dataset[0].modified`.
    pub field: String,
    pub reason: ReasonCode,
    pub message: String,
}

impl Warning {
    pub fn new(
        record_id: impl Into<String>,
        field: impl Into<String>,
        reason: ReasonCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            field: field.into(),
            reason,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.reason, self.field, self.record_id, self.message
        )
    }
}

/// Counts warnings per reason code.
pub fn count_by_reason(warnings: &[Warning]) -> BTreeMap<ReasonCode, usize> {
    let mut counts = BTreeMap::new();
    for warning in warnings {
        *counts.entry(warning.reason).or_insert(0) += 1;
    }
    counts
}
