//! Conformance issue types.
//!
//! Each variant carries only the data it needs; the check code, severity
//! and message are derived from the variant.

use serde::Serialize;

use dcat_model::{ConformanceIssue, IssueSeverity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Issue {
    /// Top-level `@context` missing or different from the fixed header.
    ContextMismatch,
    /// Property key not written with one of the context prefixes.
    UnknownPrefix { path: String, key: String },
    /// IRI-ranged property holding something other than `{"@id": ..}`.
    NotANodeReference { path: String, property: String },
    OrganizationWithoutName { path: String },
    OrganizationWithoutPrefLabel { path: String },
    DistributionWithoutLicense { path: String },
    MissingPublisher { path: String, node_type: String },
    MissingTitle { path: String, node_type: String },
    /// Date-typed literal failing date classification.
    InvalidDate {
        path: String,
        property: String,
        value: String,
    },
}

impl Issue {
    pub fn code(&self) -> &'static str {
        match self {
            Issue::ContextMismatch => "DCAT001",
            Issue::UnknownPrefix { .. } => "DCAT002",
            Issue::NotANodeReference { .. } => "DCAT003",
            Issue::OrganizationWithoutName { .. } => "DCAT004",
            Issue::OrganizationWithoutPrefLabel { .. } => "DCAT005",
            Issue::DistributionWithoutLicense { .. } => "DCAT006",
            Issue::MissingPublisher { .. } => "DCAT007",
            Issue::MissingTitle { .. } => "DCAT008",
            Issue::InvalidDate { .. } => "DCAT009",
        }
    }

    pub fn severity(&self) -> IssueSeverity {
        match self {
            Issue::MissingTitle { .. } => IssueSeverity::Warning,
            _ => IssueSeverity::Error,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Issue::ContextMismatch => "$.@context",
            Issue::UnknownPrefix { path, .. }
            | Issue::NotANodeReference { path, .. }
            | Issue::OrganizationWithoutName { path }
            | Issue::OrganizationWithoutPrefLabel { path }
            | Issue::DistributionWithoutLicense { path }
            | Issue::MissingPublisher { path, .. }
            | Issue::MissingTitle { path, .. }
            | Issue::InvalidDate { path, .. } => path,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::ContextMismatch => {
                "@context is missing or differs from the DCAT-US 3.0 header".to_string()
            }
            Issue::UnknownPrefix { key, .. } => {
                format!("property '{key}' does not use a context prefix")
            }
            Issue::NotANodeReference { property, .. } => {
                format!("{property} must be an {{\"@id\": ..}} node reference")
            }
            Issue::OrganizationWithoutName { .. } => {
                "org:Organization has no foaf:name".to_string()
            }
            Issue::OrganizationWithoutPrefLabel { .. } => {
                "org:Organization has no skos:prefLabel".to_string()
            }
            Issue::DistributionWithoutLicense { .. } => {
                "dcat:Distribution has no dcterms:license".to_string()
            }
            Issue::MissingPublisher { node_type, .. } => {
                format!("{node_type} has no dcterms:publisher")
            }
            Issue::MissingTitle { node_type, .. } => format!("{node_type} has no dcterms:title"),
            Issue::InvalidDate {
                property, value, ..
            } => format!("{property} value '{value}' is not a valid date literal"),
        }
    }

    pub fn to_conformance_issue(&self) -> ConformanceIssue {
        ConformanceIssue {
            code: self.code().to_string(),
            message: self.message(),
            severity: self.severity(),
            path: self.path().to_string(),
        }
    }
}
