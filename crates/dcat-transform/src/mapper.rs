//! Table-driven property mapping shared by records and nested entities.

use serde_json::{Map, Value};
use tracing::debug;

use dcat_map::{MappingScope, MappingTable, PropertyMapping, PropertyRule, is_reserved_key};
use dcat_model::{ReasonCode, RecordKind, SourceRecord, TargetDocument};

use crate::coerce::{coerce_date, coerce_iri, coerce_mailto, passthrough};
use crate::context::TransformContext;
use crate::entities;

/// Converts one Catalog, Dataset or Distribution node (without `@context`).
pub(crate) fn convert_node(
    kind: RecordKind,
    source: &SourceRecord,
    ctx: &mut TransformContext<'_>,
) -> TargetDocument {
    let mut node = Map::new();
    node.insert(
        "@type".to_string(),
        Value::String(kind.target_type().to_string()),
    );
    if let Some(id) = node_id(kind, source, &ctx.options.dataset_base_iri) {
        node.insert("@id".to_string(), Value::String(id));
    }
    map_properties(kind.into(), source, &mut node, ctx);
    node
}

/// The `@id` of an output node: a source `@id` wins; datasets fall back to
/// their identifier, resolved against the base IRI unless already absolute.
fn node_id(kind: RecordKind, source: &SourceRecord, base_iri: &str) -> Option<String> {
    if let Some(id) = non_empty_str(source, "@id") {
        return Some(id.to_string());
    }
    if kind != RecordKind::Dataset {
        return None;
    }
    let identifier = non_empty_str(source, "identifier")?;
    if identifier.starts_with("http://") || identifier.starts_with("https://") {
        Some(identifier.to_string())
    } else {
        Some(format!("{base_iri}{identifier}"))
    }
}

pub(crate) fn non_empty_str<'s>(source: &'s SourceRecord, key: &str) -> Option<&'s str> {
    source
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Maps every key of `source` through the table of `scope` into `node`.
///
/// Reserved JSON-LD keys are skipped and unknown keys are reported and
/// dropped. Nulls and values that convert to an empty array are dropped
/// silently.
pub(crate) fn map_properties(
    scope: MappingScope,
    source: &SourceRecord,
    node: &mut TargetDocument,
    ctx: &mut TransformContext<'_>,
) {
    let table = MappingTable::for_scope(scope);
    for (key, value) in source {
        if is_reserved_key(key) {
            continue;
        }
        let Some(mapping) = table.lookup(key) else {
            ctx.warn(
                key,
                ReasonCode::UnmappedProperty,
                format!("'{key}' has no DCAT-US 3.0 mapping for a {scope}; dropped"),
            );
            continue;
        };
        if value.is_null() {
            debug!(
                record_id = %ctx.record_id(),
                field = %ctx.field_path(key),
                "null value dropped"
            );
            continue;
        }
        match apply_rule(mapping, value, ctx) {
            Some(Value::Array(items)) if items.is_empty() => debug!(
                record_id = %ctx.record_id(),
                field = %ctx.field_path(key),
                "empty array dropped"
            ),
            Some(converted) => {
                node.insert(mapping.target.to_string(), converted);
            }
            None => {}
        }
    }
}

fn apply_rule(
    mapping: &PropertyMapping,
    value: &Value,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    let field = mapping.source;
    match mapping.rule {
        PropertyRule::Literal => Some(passthrough(value)),
        PropertyRule::Iri => coerce_reference(field, value, coerce_iri, ctx),
        PropertyRule::Mailto => coerce_reference(field, value, coerce_mailto, ctx),
        PropertyRule::Date => coerce_date(field, value, ctx),
        PropertyRule::Entity(kind) => entities::transform(kind, field, value, ctx),
    }
}

fn coerce_reference(
    field: &str,
    value: &Value,
    coerce: fn(&Value) -> Result<Value, &'static str>,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    match coerce(value) {
        Ok(coerced) => Some(coerced),
        Err(found) => {
            ctx.warn(
                field,
                ReasonCode::UnexpectedValueType,
                format!("expected an IRI string, found {found}; field omitted"),
            );
            None
        }
    }
}
