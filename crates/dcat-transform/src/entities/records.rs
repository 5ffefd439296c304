//! Nested record arrays: a catalog's datasets and a dataset's distributions.
//!
//! Elements convert one to one, in source order, through the same node
//! conversion as top-level records. A single object where an array is
//! expected is treated as a one-element array.

use serde_json::Value;

use dcat_model::{RecordKind, record_identifier};

use super::unexpected;
use crate::context::TransformContext;
use crate::mapper::convert_node;

pub(super) fn transform_distributions(
    field: &str,
    value: &Value,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    transform_records(RecordKind::Distribution, field, value, ctx)
}

pub(super) fn transform_datasets(
    field: &str,
    value: &Value,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    transform_records(RecordKind::Dataset, field, value, ctx)
}

fn transform_records(
    kind: RecordKind,
    field: &str,
    value: &Value,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(_) => std::slice::from_ref(value),
        other => {
            unexpected(field, &format!("an array of {kind} objects"), other, ctx);
            return None;
        }
    };

    let mut converted = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let segment = format!("{field}[{index}]");
        let Value::Object(source) = item else {
            unexpected(&segment, &format!("a {kind} object"), item, ctx);
            continue;
        };
        let record_id = match kind {
            RecordKind::Dataset => record_identifier(source),
            _ => None,
        };
        let node = ctx.for_record(record_id, |ctx| {
            ctx.scoped(segment, |ctx| convert_node(kind, source, ctx))
        });
        converted.push(Value::Object(node));
    }
    Some(Value::Array(converted))
}
