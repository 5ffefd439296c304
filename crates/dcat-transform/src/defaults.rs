//! Default injection for fields the DCAT-US 3.0 shapes require.
//!
//! Runs after the key-by-key transform and walks every node of the document
//! by its `@type`:
//!
//! - `dcat:Catalog` / `dcat:Dataset` without `dcterms:publisher` get the
//!   configured fallback organization; catalogs also get a title and a
//!   description when absent.
//! - `dcat:Distribution` without `dcterms:license` gets the fallback license.
//! - `org:Organization` with `foaf:name` but no `skos:prefLabel` gets the
//!   label mirrored from the name.
//!
//! Injection is additive only, so running it twice changes nothing the
//! second time.

use serde_json::{Map, Value};

use dcat_model::{ConversionOptions, ReasonCode, RecordKind, TargetDocument, Warning};

use crate::coerce::iri;
use crate::entities::mirror_pref_label;

const ORGANIZATION: &str = "org:Organization";

const PUBLISHER: &str = "dcterms:publisher";
const LICENSE: &str = "dcterms:license";
const TITLE: &str = "dcterms:title";
const DESCRIPTION: &str = "dcterms:description";

/// Adds required-but-absent fields to `document` and returns one
/// `DEFAULT_INJECTED` warning per synthesized field.
///
/// `record_id` labels warnings for the top-level node; nested datasets are
/// labelled with their own `dcterms:identifier`, `@id` or `dcterms:title`.
pub fn inject_defaults(
    document: &mut TargetDocument,
    options: &ConversionOptions,
    record_id: &str,
) -> Vec<Warning> {
    let mut injector = Injector {
        options,
        path: Vec::new(),
        warnings: Vec::new(),
    };
    injector.visit(document, record_id);
    injector.warnings
}

struct Injector<'a> {
    options: &'a ConversionOptions,
    path: Vec<String>,
    warnings: Vec<Warning>,
}

impl Injector<'_> {
    fn visit(&mut self, node: &mut TargetDocument, record_id: &str) {
        let node_type = node
            .get("@type")
            .and_then(Value::as_str)
            .map(str::to_string);

        let kind = node_type.as_deref().and_then(output_kind);

        let record_id = match kind {
            Some(RecordKind::Dataset) if !self.path.is_empty() => {
                nested_record_id(node).unwrap_or_else(|| record_id.to_string())
            }
            _ => record_id.to_string(),
        };

        if let Some(kind) = kind {
            if kind.requires_publisher() {
                self.ensure_publisher(node, &record_id);
            }
            match kind {
                RecordKind::Catalog => {
                    let title = self.options.default_catalog_title.clone();
                    self.ensure_literal(node, TITLE, title, &record_id);
                    let description = self.options.default_catalog_description.clone();
                    self.ensure_literal(node, DESCRIPTION, description, &record_id);
                }
                RecordKind::Distribution => self.ensure_license(node, &record_id),
                RecordKind::Dataset => {}
            }
        } else if node_type.as_deref() == Some(ORGANIZATION) && mirror_pref_label(node) {
            self.injected(
                &record_id,
                "prefLabel",
                "skos:prefLabel mirrored from foaf:name".to_string(),
            );
        }

        for (key, child) in node.iter_mut() {
            if key.starts_with('@') {
                continue;
            }
            let segment = local_name(key);
            match child {
                Value::Object(object) => {
                    self.path.push(segment.to_string());
                    self.visit(object, &record_id);
                    self.path.pop();
                }
                Value::Array(items) => {
                    for (index, item) in items.iter_mut().enumerate() {
                        if let Value::Object(object) = item {
                            self.path.push(format!("{segment}[{index}]"));
                            self.visit(object, &record_id);
                            self.path.pop();
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn ensure_publisher(&mut self, node: &mut TargetDocument, record_id: &str) {
        if has_value(node, PUBLISHER) {
            return;
        }
        let name = &self.options.default_publisher_name;
        let mut publisher = Map::new();
        publisher.insert("@type".to_string(), Value::String(ORGANIZATION.to_string()));
        if let Some(id) = &self.options.default_publisher_iri {
            publisher.insert("@id".to_string(), Value::String(id.clone()));
        }
        publisher.insert("foaf:name".to_string(), Value::String(name.clone()));
        publisher.insert("skos:prefLabel".to_string(), Value::String(name.clone()));
        node.insert(PUBLISHER.to_string(), Value::Object(publisher));

        let message = format!("no publisher in source; injected default organization '{name}'");
        self.injected(record_id, "publisher", message);
    }

    fn ensure_license(&mut self, node: &mut TargetDocument, record_id: &str) {
        if has_value(node, LICENSE) {
            return;
        }
        let license = &self.options.default_license_iri;
        node.insert(LICENSE.to_string(), iri(license));
        let message = format!("no license in source; injected default license <{license}>");
        self.injected(record_id, "license", message);
    }

    fn ensure_literal(
        &mut self,
        node: &mut TargetDocument,
        property: &str,
        value: String,
        record_id: &str,
    ) {
        if node.contains_key(property) {
            return;
        }
        let message = format!("no {} in source; injected default '{value}'", local_name(property));
        node.insert(property.to_string(), Value::String(value));
        self.injected(record_id, local_name(property), message);
    }

    fn injected(&mut self, record_id: &str, field: &str, message: String) {
        let mut path = self.path.clone();
        path.push(field.to_string());
        self.warnings.push(Warning::new(
            record_id,
            path.join("."),
            ReasonCode::DefaultInjected,
            message,
        ));
    }
}

/// The record kind whose output `@type` is `node_type`.
fn output_kind(node_type: &str) -> Option<RecordKind> {
    RecordKind::ALL
        .into_iter()
        .find(|kind| kind.target_type() == node_type)
}

/// Present and not an empty array.
fn has_value(node: &TargetDocument, property: &str) -> bool {
    match node.get(property) {
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
        None => false,
    }
}

/// `dcterms:title` → `title`; non-prefixed keys are returned unchanged.
fn local_name(key: &str) -> &str {
    key.split_once(':').map_or(key, |(_, local)| local)
}

fn nested_record_id(node: &TargetDocument) -> Option<String> {
    ["dcterms:identifier", "@id", TITLE]
        .iter()
        .filter_map(|key| node.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document(value: Value) -> TargetDocument {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn dataset_gets_publisher() {
        let options = ConversionOptions::default();
        let mut doc = document(json!({"@type": "dcat:Dataset", "dcterms:title": "Water"}));
        let warnings = inject_defaults(&mut doc, &options, "ds");
        assert_eq!(
            doc["dcterms:publisher"],
            json!({
                "@type": "org:Organization",
                "@id": "https://www.usa.gov/",
                "foaf:name": "U.S. Government",
                "skos:prefLabel": "U.S. Government"
            })
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "publisher");
    }

    #[test]
    fn nested_nodes_are_walked() {
        let options = ConversionOptions::default();
        let mut doc = document(json!({
            "@type": "dcat:Catalog",
            "dcterms:title": "Agency catalog",
            "dcterms:description": "All the data",
            "dcterms:publisher": {"@type": "org:Organization", "foaf:name": "Agency"},
            "dcat:dataset": [{
                "@type": "dcat:Dataset",
                "dcterms:identifier": "ds-7",
                "dcterms:publisher": {"@type": "org:Organization", "foaf:name": "Agency"},
                "dcat:distribution": [{"@type": "dcat:Distribution"}]
            }]
        }));
        let warnings = inject_defaults(&mut doc, &options, "catalog");

        assert_eq!(doc["dcterms:publisher"]["skos:prefLabel"], "Agency");
        assert_eq!(
            doc["dcat:dataset"][0]["dcat:distribution"][0]["dcterms:license"],
            json!({"@id": "https://creativecommons.org/publicdomain/zero/1.0/"})
        );
        let license = warnings
            .iter()
            .find(|w| w.field.ends_with("license"))
            .unwrap();
        assert_eq!(license.field, "dataset[0].distribution[0].license");
        assert_eq!(license.record_id, "ds-7");
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn empty_publisher_array_counts_as_missing() {
        let options = ConversionOptions::default();
        let mut doc = document(json!({"@type": "dcat:Dataset", "dcterms:publisher": []}));
        let warnings = inject_defaults(&mut doc, &options, "ds");
        assert_eq!(doc["dcterms:publisher"]["foaf:name"], "U.S. Government");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].reason, ReasonCode::DefaultInjected);
    }

    #[test]
    fn catalog_title_is_not_overwritten() {
        let options = ConversionOptions::default();
        let mut doc = document(json!({"@type": "dcat:Catalog", "dcterms:title": "Mine"}));
        inject_defaults(&mut doc, &options, "c");
        assert_eq!(doc["dcterms:title"], "Mine");
        assert_eq!(doc["dcterms:description"], "Government data catalog");
    }
}
