//! Error types for reading source records and writing documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering, reading or writing files.
///
/// A file-level error fails only that file; batch runs report it and move on.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path does not exist.
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Batch mode was requested for something that is not a directory.
    #[error("batch input is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === JSON Errors ===
    /// File is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document could not be serialized.
    #[error("failed to serialize {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
