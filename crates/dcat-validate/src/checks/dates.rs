//! Date literal checks for `dcterms:modified` and `dcterms:issued`.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde_json::Value;

use dcat_map::date_targets;
use dcat_model::TargetDocument;
use dcat_transform::is_date_literal;

use crate::issue::Issue;

fn date_properties() -> &'static BTreeSet<&'static str> {
    static DATE_PROPERTIES: OnceLock<BTreeSet<&'static str>> = OnceLock::new();
    DATE_PROPERTIES.get_or_init(date_targets)
}

pub(super) fn check(node: &TargetDocument, path: &str) -> Vec<Issue> {
    node.iter()
        .filter(|(key, _)| date_properties().contains(key.as_str()))
        .filter_map(|(key, value)| {
            let valid = value.as_str().is_some_and(is_date_literal);
            (!valid).then(|| Issue::InvalidDate {
                path: format!("{path}.{key}"),
                property: key.clone(),
                value: literal_text(value),
            })
        })
        .collect()
}

fn literal_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
