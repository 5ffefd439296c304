//! Shared types for DCAT-US 1.1 to 3.0 conversion.

#![deny(unsafe_code)]

pub mod conformance;
pub mod error;
pub mod namespace;
pub mod options;
pub mod record;
pub mod warning;

pub use conformance::{ConformanceIssue, ConformanceReport, IssueSeverity};
pub use error::{ConfigError, ConvertError, json_type_name};
pub use namespace::{ContextHeader, NAMESPACES, Namespace, is_known_compact_key, split_compact};
pub use options::ConversionOptions;
pub use record::{RecordKind, SourceRecord, record_identifier};
pub use warning::{ReasonCode, Warning, count_by_reason};

/// Output document: a JSON-LD object keyed by `@context`, `@type`, `@id`
/// and prefixed DCAT-US 3.0 property names.
pub type TargetDocument = serde_json::Map<String, serde_json::Value>;
