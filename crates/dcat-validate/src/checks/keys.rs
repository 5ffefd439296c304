//! Property key and IRI range checks.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde_json::Value;

use dcat_map::iri_ranged_targets;
use dcat_model::{TargetDocument, is_known_compact_key};

use crate::issue::Issue;

fn iri_properties() -> &'static BTreeSet<&'static str> {
    static IRI_PROPERTIES: OnceLock<BTreeSet<&'static str>> = OnceLock::new();
    IRI_PROPERTIES.get_or_init(iri_ranged_targets)
}

pub(super) fn check(node: &TargetDocument, path: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (key, value) in node {
        if key.starts_with('@') {
            continue;
        }
        if !is_known_compact_key(key) {
            issues.push(Issue::UnknownPrefix {
                path: format!("{path}.{key}"),
                key: key.clone(),
            });
            continue;
        }
        if iri_properties().contains(key.as_str()) && !is_node_reference_value(value) {
            issues.push(Issue::NotANodeReference {
                path: format!("{path}.{key}"),
                property: key.clone(),
            });
        }
    }
    issues
}

/// `{"@id": "<string>"}` or an array made only of such objects.
fn is_node_reference_value(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(is_node_reference),
        single => is_node_reference(single),
    }
}

fn is_node_reference(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("@id"))
        .is_some_and(Value::is_string)
}
