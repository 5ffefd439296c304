//! Temporal coverage transformer: `start/end` intervals to `dcterms:PeriodOfTime`.

use serde_json::{Map, Value};

use dcat_model::{ReasonCode, SourceRecord};

use super::unexpected;
use crate::anomaly::{is_duration, is_repeating_interval};
use crate::context::TransformContext;
use crate::datetime::is_date_literal;

const PERIOD_TYPE: &str = "dcterms:PeriodOfTime";
const START: &str = "dcat:startDate";
const END: &str = "dcat:endDate";

/// One side of an interval.
#[derive(Debug, PartialEq, Eq)]
enum Bound<'a> {
    Date(&'a str),
    /// `..`, empty, or a duration relative to the other bound.
    Open,
    Invalid,
}

fn classify_bound(bound: &str) -> Bound<'_> {
    let bound = bound.trim();
    if bound.is_empty() || bound == ".." || is_duration(bound) {
        Bound::Open
    } else if is_date_literal(bound) {
        Bound::Date(bound)
    } else {
        Bound::Invalid
    }
}

pub(super) fn transform(field: &str, value: &Value, ctx: &mut TransformContext<'_>) -> Option<Value> {
    let text = match value {
        Value::String(text) => text.trim(),
        Value::Object(source) => return period_object(field, source, ctx),
        other => {
            unexpected(field, "a start/end interval string", other, ctx);
            return None;
        }
    };

    if is_repeating_interval(text) {
        ctx.warn(
            field,
            ReasonCode::FrequencyInDateField,
            format!("'{text}' is a repeating interval, not a period of time; field omitted"),
        );
        return None;
    }

    let Some((start, end)) = text.split_once('/') else {
        return invalid(field, text, ctx);
    };
    let (start, end) = (classify_bound(start), classify_bound(end));
    if start == Bound::Invalid || end == Bound::Invalid {
        return invalid(field, text, ctx);
    }

    let mut node = Map::new();
    node.insert("@type".to_string(), Value::String(PERIOD_TYPE.to_string()));
    if let Bound::Date(date) = start {
        node.insert(START.to_string(), Value::String(date.to_string()));
    }
    if let Bound::Date(date) = end {
        node.insert(END.to_string(), Value::String(date.to_string()));
    }
    if node.len() == 1 {
        return invalid(field, text, ctx);
    }
    Some(Value::Object(node))
}

/// An already-structured period. A node typed as something other than a
/// period of time is kept as is; otherwise its bounds are checked and the
/// node is tagged `dcterms:PeriodOfTime`.
fn period_object(
    field: &str,
    source: &SourceRecord,
    ctx: &mut TransformContext<'_>,
) -> Option<Value> {
    match source.get("@type").and_then(Value::as_str) {
        Some(PERIOD_TYPE) | None => {}
        Some(_) => return Some(Value::Object(source.clone())),
    }

    let node = ctx.scoped(field, |ctx| {
        let mut node = Map::new();
        node.insert("@type".to_string(), Value::String(PERIOD_TYPE.to_string()));
        for (key, value) in source {
            let target = match key.as_str() {
                "@type" => continue,
                "@id" => {
                    node.insert(key.clone(), value.clone());
                    continue;
                }
                "startDate" | START => START,
                "endDate" | END => END,
                _ => {
                    ctx.warn(
                        key,
                        ReasonCode::UnmappedProperty,
                        format!("'{key}' is not a period of time bound; dropped"),
                    );
                    continue;
                }
            };
            match value.as_str().map(str::trim) {
                Some(date) if is_date_literal(date) => {
                    node.insert(target.to_string(), Value::String(date.to_string()));
                }
                _ => ctx.warn(
                    key,
                    ReasonCode::InvalidDateValue,
                    format!("{value} is not a date; bound omitted"),
                ),
            }
        }
        node
    });

    if node.contains_key(START) || node.contains_key(END) || node.contains_key("@id") {
        Some(Value::Object(node))
    } else {
        ctx.warn(
            field,
            ReasonCode::InvalidDateValue,
            "period of time has no usable bound; field omitted",
        );
        None
    }
}

fn invalid(field: &str, text: &str, ctx: &mut TransformContext<'_>) -> Option<Value> {
    ctx.warn(
        field,
        ReasonCode::InvalidDateValue,
        format!("'{text}' is not a usable start/end interval; field omitted"),
    );
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use dcat_model::ConversionOptions;

    fn run(value: Value) -> (Option<Value>, Vec<dcat_model::Warning>) {
        let options = ConversionOptions::default();
        let mut ctx = TransformContext::new(&options, "t");
        let out = transform("temporal", &value, &mut ctx);
        (out, ctx.into_warnings())
    }

    #[test]
    fn closed_interval() {
        let (out, warnings) = run(json!("2020-01-01/2020-12-31"));
        assert_eq!(
            out,
            Some(json!({
                "@type": "dcterms:PeriodOfTime",
                "dcat:startDate": "2020-01-01",
                "dcat:endDate": "2020-12-31"
            }))
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn open_and_duration_bounds_are_left_out() {
        let (out, _) = run(json!("2019-05/.."));
        assert_eq!(
            out,
            Some(json!({"@type": "dcterms:PeriodOfTime", "dcat:startDate": "2019-05"}))
        );
        let (out, _) = run(json!("P1Y/2021-06-30"));
        assert_eq!(
            out,
            Some(json!({"@type": "dcterms:PeriodOfTime", "dcat:endDate": "2021-06-30"}))
        );
    }

    #[test]
    fn unusable_intervals_warn() {
        let (out, warnings) = run(json!("R/P1W"));
        assert_eq!(out, None);
        assert_eq!(warnings[0].reason, ReasonCode::FrequencyInDateField);

        for value in ["2020-01-01", "../..", "soon/later"] {
            let (out, warnings) = run(json!(value));
            assert_eq!(out, None, "{value}");
            assert_eq!(warnings[0].reason, ReasonCode::InvalidDateValue, "{value}");
        }
    }

    #[test]
    fn period_objects_are_tagged_and_checked() {
        let (out, warnings) = run(json!({"startDate": "2020-01-01", "endDate": "someday"}));
        assert_eq!(
            out,
            Some(json!({"@type": "dcterms:PeriodOfTime", "dcat:startDate": "2020-01-01"}))
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].reason, ReasonCode::InvalidDateValue);
        assert_eq!(warnings[0].field, "temporal.endDate");

        let (out, warnings) = run(json!({"dcat:endDate": "nope"}));
        assert_eq!(out, None);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn foreign_typed_objects_pass_through() {
        let node = json!({"@type": "time:Interval", "time:hasBeginning": "x"});
        let (out, warnings) = run(node.clone());
        assert_eq!(out, Some(node));
        assert!(warnings.is_empty());
    }
}
