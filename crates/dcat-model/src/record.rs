//! Record kinds and source-record helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A DCAT-US 1.1 source record: the parsed JSON object of one input file
/// (or one nested catalog entry).
pub type SourceRecord = Map<String, Value>;

/// The kind of top-level node a record converts into.
///
/// The structure of the output differs slightly per kind: only catalogs and
/// datasets receive a default publisher, only distributions a default license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Catalog,
    Dataset,
    Distribution,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [Self::Catalog, Self::Dataset, Self::Distribution];

    /// The `@type` value written to the output node.
    pub fn target_type(self) -> &'static str {
        match self {
            Self::Catalog => "dcat:Catalog",
            Self::Dataset => "dcat:Dataset",
            Self::Distribution => "dcat:Distribution",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Dataset => "dataset",
            Self::Distribution => "distribution",
        }
    }

    /// Whether the target shape requires a `dcterms:publisher`.
    pub fn requires_publisher(self) -> bool {
        matches!(self, Self::Catalog | Self::Dataset)
    }

    /// Parses a source `@type` value such as `dcat:Dataset` or `Catalog`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let local = name.trim();
        let local = local.strip_prefix("dcat:").unwrap_or(local);
        let local = local
            .strip_prefix("http://www.w3.org/ns/dcat#")
            .unwrap_or(local);
        match local {
            "Catalog" => Some(Self::Catalog),
            "Dataset" => Some(Self::Dataset),
            "Distribution" => Some(Self::Distribution),
            _ => None,
        }
    }

    /// Detects the kind of a record without an explicit hint.
    ///
    /// An explicit `@type` wins; otherwise the presence of characteristic
    /// keys decides. Returns `None` when nothing identifies the record.
    pub fn detect(record: &SourceRecord) -> Option<Self> {
        if let Some(kind) = record
            .get("@type")
            .and_then(Value::as_str)
            .and_then(Self::from_type_name)
        {
            return Some(kind);
        }
        if record.contains_key("dataset") {
            return Some(Self::Catalog);
        }
        if ["accessURL", "downloadURL", "mediaType"]
            .iter()
            .any(|key| record.contains_key(*key))
        {
            return Some(Self::Distribution);
        }
        if ["distribution", "identifier", "accessLevel", "keyword", "title"]
            .iter()
            .any(|key| record.contains_key(*key))
        {
            return Some(Self::Dataset);
        }
        None
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" => Ok(Self::Catalog),
            "dataset" => Ok(Self::Dataset),
            "distribution" => Ok(Self::Distribution),
            other => Err(format!("unknown record kind: {other}")),
        }
    }
}

/// Best-effort identifier for a record, used to label warnings.
///
/// Prefers `identifier`, then `@id`, then `title`.
pub fn record_identifier(record: &SourceRecord) -> Option<String> {
    ["identifier", "@id", "title"]
        .iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> SourceRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn explicit_type_wins() {
        let r = record(json!({"@type": "dcat:Distribution", "dataset": []}));
        assert_eq!(RecordKind::detect(&r), Some(RecordKind::Distribution));
    }

    #[test]
    fn detects_by_keys() {
        assert_eq!(
            RecordKind::detect(&record(json!({"dataset": []}))),
            Some(RecordKind::Catalog)
        );
        assert_eq!(
            RecordKind::detect(&record(json!({"downloadURL": "https://x"}))),
            Some(RecordKind::Distribution)
        );
        assert_eq!(
            RecordKind::detect(&record(json!({"identifier": "abc"}))),
            Some(RecordKind::Dataset)
        );
        assert_eq!(RecordKind::detect(&record(json!({"foo": 1}))), None);
    }

    #[test]
    fn identifier_prefers_identifier_field() {
        let r = record(json!({"title": "T", "@id": "https://x/1", "identifier": "ID-1"}));
        assert_eq!(record_identifier(&r).as_deref(), Some("ID-1"));
        let r = record(json!({"title": "  ", "identifier": ""}));
        assert_eq!(record_identifier(&r), None);
    }
}
