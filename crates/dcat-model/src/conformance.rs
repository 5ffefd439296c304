use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A conformance issue found in a produced document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceIssue {
    /// Check code (e.g., "DCAT003").
    pub code: String,
    /// Human-readable message describing the issue.
    pub message: String,
    pub severity: IssueSeverity,
    /// JSON path of the offending node or property in the output document.
    pub path: String,
}

/// Conformance report for a single output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceReport {
    #[serde(rename = "record")]
    pub record_id: String,
    pub issues: Vec<ConformanceIssue>,
}

impl ConformanceReport {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            issues: Vec::new(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn conforms(&self) -> bool {
        self.issues.is_empty()
    }
}
