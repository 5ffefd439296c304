//! Entity transformers for the compound DCAT-US 1.1 concepts.
//!
//! Each transformer takes the raw source value of one structural property
//! and returns its 3.0 shape, or `None` when nothing usable remains (the
//! reason has then been recorded as a warning).

mod contact;
mod lists;
mod organization;
mod records;
mod spatial;
mod temporal;

use serde_json::Value;

use dcat_map::EntityKind;
use dcat_model::{ReasonCode, json_type_name};

use crate::context::{MAX_NESTING_DEPTH, TransformContext};

pub use organization::mirror_pref_label;
pub use spatial::parse_bbox;

/// Dispatches a structural property to its transformer.
pub(crate) fn transform(
    kind: EntityKind,
    field: &str,
    value: &Value,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    if ctx.depth() >= MAX_NESTING_DEPTH {
        ctx.warn(
            field,
            ReasonCode::UnexpectedValueType,
            format!("nested deeper than {MAX_NESTING_DEPTH} path segments; value omitted"),
        );
        return None;
    }
    match kind {
        EntityKind::Organization => organization::transform(field, value, ctx),
        EntityKind::ContactPoint => contact::transform(field, value, ctx),
        EntityKind::Distributions => records::transform_distributions(field, value, ctx),
        EntityKind::Datasets => records::transform_datasets(field, value, ctx),
        EntityKind::Spatial => spatial::transform(field, value, ctx),
        EntityKind::Temporal => temporal::transform(field, value, ctx),
        EntityKind::TermList => lists::transform_terms(field, value, ctx),
        EntityKind::IdentifierList => lists::transform_identifiers(field, value, ctx),
    }
}

/// Records a value whose JSON shape the transformer cannot use.
fn unexpected(field: &str, expected: &str, value: &Value, ctx: &mut TransformContext<'_>) {
    ctx.warn(
        field,
        ReasonCode::UnexpectedValueType,
        format!(
            "expected {expected}, found {}; value omitted",
            json_type_name(value)
        ),
    );
}

/// Applies `convert` to each element of an array, or to a single value.
///
/// Array elements are converted under an indexed path segment (`field[i]`).
/// Elements that yield `None` are skipped; an array with no usable element
/// yields `None` so the property is left out.
fn each_element(
    field: &str,
    value: &Value,
    ctx: &mut TransformContext<'_>,
    mut convert: impl FnMut(&str, &Value, &mut TransformContext<'_>) -> Option<Value>,
) -> Option<Value> {
    match value {
        Value::Array(items) => {
            let converted: Vec<Value> = items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| convert(&format!("{field}[{index}]"), item, ctx))
                .collect();
            (!converted.is_empty()).then_some(Value::Array(converted))
        }
        single => convert(field, single, ctx),
    }
}
