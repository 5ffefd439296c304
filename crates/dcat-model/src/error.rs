use std::path::PathBuf;

use thiserror::Error;

/// Record-level conversion failure.
///
/// Aborts only the current record; a batch run reports it and continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("record {record_id} is not a JSON object (found {found})")]
    NotAnObject {
        record_id: String,
        found: &'static str,
    },

    #[error("cannot determine record type of {record_id}")]
    UndeterminedRecordType { record_id: String },
}

impl ConvertError {
    pub fn record_id(&self) -> &str {
        match self {
            Self::NotAnObject { record_id, .. } | Self::UndeterminedRecordType { record_id } => {
                record_id
            }
        }
    }
}

/// Errors loading [`ConversionOptions`](crate::ConversionOptions) from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Short name of a JSON value's type, for diagnostics.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
