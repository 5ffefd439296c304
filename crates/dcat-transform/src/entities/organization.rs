//! Publisher / Organization transformer.

use serde_json::{Map, Value};

use dcat_map::MappingScope;
use dcat_model::{SourceRecord, TargetDocument};

use super::{each_element, unexpected};
use crate::context::TransformContext;
use crate::mapper::{map_properties, non_empty_str};

pub(crate) const ORGANIZATION_TYPE: &str = "org:Organization";
pub(crate) const NAME: &str = "foaf:name";
pub(crate) const PREF_LABEL: &str = "skos:prefLabel";

pub(super) fn transform(field: &str, value: &Value, ctx: &mut TransformContext<'_>) -> Option<Value> {
    each_element(field, value, ctx, organization)
}

fn organization(segment: &str, value: &Value, ctx: &mut TransformContext<'_>) -> Option<Value> {
    match value {
        Value::Object(source) => Some(Value::Object(organization_node(segment, source, ctx))),
        Value::String(name) if !name.trim().is_empty() => {
            let mut source = Map::new();
            source.insert("name".to_string(), Value::String(name.trim().to_string()));
            Some(Value::Object(organization_node(segment, &source, ctx)))
        }
        other => {
            unexpected(segment, "an organization object or name", other, ctx);
            None
        }
    }
}

fn organization_node(
    segment: &str,
    source: &SourceRecord,
    ctx: &mut TransformContext<'_>,
) -> TargetDocument {
    ctx.scoped(segment, |ctx| {
        let mut node = Map::new();
        node.insert(
            "@type".to_string(),
            Value::String(ORGANIZATION_TYPE.to_string()),
        );
        if let Some(id) = non_empty_str(source, "@id") {
            node.insert("@id".to_string(), Value::String(id.to_string()));
        }
        map_properties(MappingScope::Organization, source, &mut node, ctx);
        mirror_pref_label(&mut node);
        node
    })
}

/// Sets `skos:prefLabel` from `foaf:name` when the label is missing.
///
/// Returns true if the label was added. Never overwrites an existing label.
pub fn mirror_pref_label(node: &mut TargetDocument) -> bool {
    if node.contains_key(PREF_LABEL) {
        return false;
    }
    let Some(name) = node.get(NAME).cloned() else {
        return false;
    };
    node.insert(PREF_LABEL.to_string(), name);
    true
}
