use std::path::PathBuf;

use dcat_model::{ConformanceReport, RecordKind, Warning};

#[derive(Debug)]
pub struct RunResult {
    pub files: Vec<FileSummary>,
    pub warnings_file: Option<PathBuf>,
    pub dry_run: bool,
    /// Records whose conformance errors fail a `--strict` run.
    pub strict_blocking: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub input: PathBuf,
    pub kind: Option<RecordKind>,
    pub record_id: Option<String>,
    pub output: Option<PathBuf>,
    pub warnings: Vec<Warning>,
    pub conformance: Option<ConformanceReport>,
    pub error: Option<String>,
}

impl RunResult {
    pub fn failed_files(&self) -> usize {
        self.files.iter().filter(|file| file.error.is_some()).count()
    }

    pub fn all_warnings(&self) -> Vec<Warning> {
        self.files
            .iter()
            .flat_map(|file| file.warnings.iter().cloned())
            .collect()
    }
}
