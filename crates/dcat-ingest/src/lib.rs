//! File plumbing around the converter.
//!
//! Resolves file or directory input into conversion jobs, reads source
//! records, and writes pretty-printed JSON-LD documents. Nothing here knows
//! about DCAT semantics.

mod discovery;
mod document;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Discovery ===
pub use discovery::{
    ConversionJob, OUTPUT_SUFFIX, derive_output_path, list_json_files, output_file_name,
    plan_jobs,
};

// === Reading and Writing ===
pub use document::{read_record, render_document, write_document, write_json};
