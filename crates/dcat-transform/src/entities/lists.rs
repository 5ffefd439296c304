//! Term and identifier lists (`keyword`, `theme`, `bureauCode`, `programCode`).

use serde_json::Value;

use super::unexpected;
use crate::context::TransformContext;

pub(super) fn transform_terms(
    field: &str,
    value: &Value,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    collect_list(field, value, false, ctx)
}

pub(super) fn transform_identifiers(
    field: &str,
    value: &Value,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    collect_list(field, value, true, ctx)
}

fn collect_list(
    field: &str,
    value: &Value,
    split_commas: bool,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    let mut out = Vec::new();
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_item(&format!("{field}[{index}]"), item, split_commas, &mut out, ctx);
            }
        }
        single => push_item(field, single, split_commas, &mut out, ctx),
    }
    if out.is_empty() {
        return None;
    }
    Some(Value::Array(out.into_iter().map(Value::String).collect()))
}

fn push_item(
    segment: &str,
    item: &Value,
    split_commas: bool,
    out: &mut Vec<String>,
    ctx: &mut TransformContext<'_>,
) {
    let text = match item {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Null => return,
        other => {
            unexpected(segment, "a string", other, ctx);
            return;
        }
    };
    let pieces: Vec<&str> = if split_commas {
        text.split(',').collect()
    } else {
        vec![text.as_str()]
    };
    out.extend(
        pieces
            .into_iter()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string),
    );
}
