//! Reading source records and writing output documents.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use dcat_model::TargetDocument;

use crate::error::{IngestError, Result};

/// Reads and parses one source file.
///
/// Any JSON value is returned; whether it is a usable record is decided by
/// the converter.
pub fn read_record(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);
    serde_json::from_str(contents).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serializes a document as pretty-printed UTF-8 JSON.
///
/// Non-ASCII characters are written as-is, not escaped.
pub fn render_document(document: &TargetDocument, path: &Path) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(document).map_err(|e| IngestError::JsonWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    rendered.push('\n');
    Ok(rendered)
}

/// Writes a document to `path`, creating the parent directory if needed.
pub fn write_document(path: &Path, document: &TargetDocument) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IngestError::DirectoryCreate {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let rendered = render_document(document, path)?;
    std::fs::write(path, rendered).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "wrote document");
    Ok(())
}

/// Writes any serializable value (e.g. an aggregated warning list) as JSON.
pub fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| IngestError::JsonWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, rendered + "\n").map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
