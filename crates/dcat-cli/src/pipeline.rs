//! Per-file conversion: read, convert, self-check, write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use dcat_ingest::{ConversionJob, read_record, write_document};
use dcat_model::{ConformanceReport, IssueSeverity, RecordKind};
use dcat_transform::{Conversion, Converter};
use dcat_validate::validate_document;

/// Result of converting one input file.
#[derive(Debug)]
pub struct FileConversion {
    pub conversion: Conversion,
    pub conformance: ConformanceReport,
    /// Path written, `None` on a dry run.
    pub written: Option<PathBuf>,
}

/// Label identifying a file's record when it carries no identifier.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Converts one file.
///
/// Fails only for this file: unreadable input, invalid JSON, a record-level
/// conversion failure, or an unwritable output.
pub fn convert_file(
    job: &ConversionJob,
    converter: &Converter,
    hint: Option<RecordKind>,
    dry_run: bool,
) -> Result<FileConversion> {
    let record = read_record(&job.input)?;
    let label = file_label(&job.input);
    let conversion = converter
        .convert(&record, hint, Some(&label))
        .with_context(|| format!("convert {}", job.input.display()))?;

    let conformance = validate_document(&conversion.document, &conversion.record_id);
    for issue in conformance
        .issues
        .iter()
        .filter(|issue| issue.severity == IssueSeverity::Error)
    {
        warn!(
            record_id = %conversion.record_id,
            code = %issue.code,
            path = %issue.path,
            "{}",
            issue.message
        );
    }

    let written = if dry_run {
        debug!(path = %job.output.display(), "dry run, output not written");
        None
    } else {
        write_document(&job.output, &conversion.document)?;
        Some(job.output.clone())
    };

    Ok(FileConversion {
        conversion,
        conformance,
        written,
    })
}
