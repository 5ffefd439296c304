//! Input discovery and output path derivation.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Suffix replacing `.json` in output file names.
pub const OUTPUT_SUFFIX: &str = "-v3.jsonld";

/// One file to convert and where its document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Lists all JSON files in a directory.
///
/// Returns files sorted by filename. The extension match is
/// case-insensitive; subdirectories are not searched.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && has_json_extension(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// `catalog.json` → `catalog-v3.jsonld`.
pub fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    format!("{stem}{OUTPUT_SUFFIX}")
}

/// Output path for a single-file conversion: next to the input.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_file_name(output_file_name(input))
}

/// Resolves the input argument into conversion jobs.
///
/// A directory (or any input with `batch`) converts every JSON file in it
/// into `output_dir`, defaulting to the input directory. A single file
/// converts into `output`, defaulting to [`derive_output_path`].
pub fn plan_jobs(input: &Path, output: Option<&Path>, batch: bool) -> Result<Vec<ConversionJob>> {
    if !input.exists() {
        return Err(IngestError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    if batch || input.is_dir() {
        let output_dir = output.unwrap_or(input);
        let jobs = list_json_files(input)?
            .into_iter()
            .map(|file| ConversionJob {
                output: output_dir.join(output_file_name(&file)),
                input: file,
            })
            .collect();
        return Ok(jobs);
    }

    Ok(vec![ConversionJob {
        input: input.to_path_buf(),
        output: output.map_or_else(|| derive_output_path(input), Path::to_path_buf),
    }])
}
