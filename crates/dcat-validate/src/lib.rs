//! Lightweight conformance self-check for produced DCAT-US 3.0 documents.
//!
//! Not a SHACL engine: the checks cover the typing and mandatory-field
//! constraints the converter itself promises, so regressions show up in a
//! run summary instead of in the downstream validator.

mod checks;
pub mod issue;

use std::collections::BTreeSet;

use dcat_model::{ConformanceReport, TargetDocument};

pub use issue::Issue;

/// Checks one document and reports every issue found.
pub fn validate_document(document: &TargetDocument, record_id: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new(record_id);
    report.issues = checks::run_all(document)
        .iter()
        .map(Issue::to_conformance_issue)
        .collect();
    report
}

/// Whether a strict run must fail, and because of which records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrictGate {
    pub blocked: bool,
    pub blocking_records: Vec<String>,
}

/// Decides whether conformance errors should fail the run.
///
/// Without `strict`, conformance issues are reported but never block.
pub fn gate_strict(strict: bool, reports: &[ConformanceReport]) -> StrictGate {
    if !strict {
        return StrictGate::default();
    }
    let blocking: BTreeSet<String> = reports
        .iter()
        .filter(|report| report.has_errors())
        .map(|report| report.record_id.clone())
        .collect();
    StrictGate {
        blocked: !blocking.is_empty(),
        blocking_records: blocking.into_iter().collect(),
    }
}
