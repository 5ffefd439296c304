//! Namespace prefixes and the fixed JSON-LD `@context` header.
//!
//! Every DCAT-US 3.0 document produced by the converter carries the same
//! ten-entry context. Property keys in the output are always written in
//! compact `prefix:localName` form using one of these prefixes.

use serde_json::{Map, Value};

/// A namespace prefix and the IRI it abbreviates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: &'static str,
    pub iri: &'static str,
}

/// The ten namespaces of the DCAT-US 3.0 context, in header order.
pub const NAMESPACES: [Namespace; 10] = [
    Namespace {
        prefix: "dcat",
        iri: "http://www.w3.org/ns/dcat#",
    },
    Namespace {
        prefix: "dcterms",
        iri: "http://purl.org/dc/terms/",
    },
    Namespace {
        prefix: "foaf",
        iri: "http://xmlns.com/foaf/0.1/",
    },
    Namespace {
        prefix: "vcard",
        iri: "http://www.w3.org/2006/vcard/ns#",
    },
    Namespace {
        prefix: "dcat-us",
        iri: "http://data.resources.gov/ontology/dcat-us#",
    },
    Namespace {
        prefix: "schema",
        iri: "https://schema.org/",
    },
    Namespace {
        prefix: "org",
        iri: "http://www.w3.org/ns/org#",
    },
    Namespace {
        prefix: "rdfs",
        iri: "http://www.w3.org/2000/01/rdf-schema#",
    },
    Namespace {
        prefix: "xsd",
        iri: "http://www.w3.org/2001/XMLSchema#",
    },
    Namespace {
        prefix: "skos",
        iri: "http://www.w3.org/2004/02/skos/core#",
    },
];

/// The constant `@context` attached to every output document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextHeader;

impl ContextHeader {
    /// Returns the namespace IRI for a prefix, if it belongs to the header.
    pub fn resolve(prefix: &str) -> Option<&'static str> {
        NAMESPACES
            .iter()
            .find(|ns| ns.prefix == prefix)
            .map(|ns| ns.iri)
    }

    /// Builds the JSON object written under `@context`.
    pub fn to_value() -> Value {
        let mut context = Map::new();
        for ns in &NAMESPACES {
            context.insert(ns.prefix.to_string(), Value::String(ns.iri.to_string()));
        }
        Value::Object(context)
    }
}

/// Splits a compact `prefix:local` key into its parts.
///
/// Returns `None` for keywords (`@type`), unprefixed keys, and keys whose
/// local part is empty.
pub fn split_compact(key: &str) -> Option<(&str, &str)> {
    if key.starts_with('@') {
        return None;
    }
    let (prefix, local) = key.split_once(':')?;
    if prefix.is_empty() || local.is_empty() {
        return None;
    }
    Some((prefix, local))
}

/// True if `key` is written with one of the context prefixes.
pub fn is_known_compact_key(key: &str) -> bool {
    split_compact(key).is_some_and(|(prefix, _)| ContextHeader::resolve(prefix).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_has_ten_entries() {
        let value = ContextHeader::to_value();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 10);
        assert_eq!(
            object.get("dcat-us").and_then(Value::as_str),
            Some("http://data.resources.gov/ontology/dcat-us#")
        );
    }

    #[test]
    fn compact_keys() {
        assert!(is_known_compact_key("dcterms:title"));
        assert!(is_known_compact_key("dcat-us:bureauCode"));
        assert!(!is_known_compact_key("dqv:hasQualityMeasurement"));
        assert!(!is_known_compact_key("title"));
        assert!(!is_known_compact_key("@type"));
        assert!(!is_known_compact_key("dcat:"));
    }
}
