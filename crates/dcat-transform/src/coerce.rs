//! Value coercers: pure conversions of one scalar (or array of scalars) into
//! its RDF-ready form.

use serde_json::{Map, Value};

use dcat_model::{ReasonCode, json_type_name};

use crate::anomaly::report_rejected_date;
use crate::context::TransformContext;
use crate::datetime::is_date_literal;

const MAILTO: &str = "mailto:";

/// Wraps a string as an IRI node reference: `{"@id": value}`.
pub fn iri(value: &str) -> Value {
    let mut node = Map::new();
    node.insert("@id".to_string(), Value::String(value.to_string()));
    Value::Object(node)
}

/// Like [`iri`], prefixing `mailto:` when missing.
pub fn mailto_iri(value: &str) -> Value {
    if value.starts_with(MAILTO) {
        iri(value)
    } else {
        iri(&format!("{MAILTO}{value}"))
    }
}

/// Coerces an IRI-ranged value.
///
/// Strings are wrapped with [`iri`]; objects are assumed to already be node
/// references and pass unchanged; arrays are coerced element-wise. Any
/// other shape is returned as the error (its JSON type name).
pub fn coerce_iri(value: &Value) -> Result<Value, &'static str> {
    coerce_with(value, iri)
}

/// Coerces an email-valued property into a `mailto:` IRI.
pub fn coerce_mailto(value: &Value) -> Result<Value, &'static str> {
    coerce_with(value, mailto_iri)
}

fn coerce_with(value: &Value, wrap: fn(&str) -> Value) -> Result<Value, &'static str> {
    match value {
        Value::String(s) => Ok(wrap(s)),
        Value::Object(_) => Ok(value.clone()),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(wrap(s)),
                Value::Object(_) => Ok(item.clone()),
                other => Err(json_type_name(other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(json_type_name(other)),
    }
}

/// Coerces a date-typed field.
///
/// Valid date-ish strings pass through unchanged as plain literals. Anything
/// else is handed to the anomaly detector, which warns; the field is then
/// omitted (`None`).
pub fn coerce_date(field: &str, value: &Value, ctx: &mut TransformContext<'_>) -> Option<Value> {
    match value {
        Value::String(s) if is_date_literal(s) => Some(value.clone()),
        Value::String(s) => {
            report_rejected_date(field, s, ctx);
            None
        }
        other => {
            ctx.warn(
                field,
                ReasonCode::UnexpectedValueType,
                format!(
                    "expected a date string, found {}; field omitted",
                    json_type_name(other)
                ),
            );
            None
        }
    }
}

/// Free-text fields pass through unchanged.
pub fn passthrough(value: &Value) -> Value {
    value.clone()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wraps_strings() {
        assert_eq!(
            coerce_iri(&json!("https://example.gov/data.csv")),
            Ok(json!({"@id": "https://example.gov/data.csv"}))
        );
    }

    #[test]
    fn objects_pass_unchanged() {
        let node = json!({"@id": "https://example.gov/", "@type": "foaf:Document"});
        assert_eq!(coerce_iri(&node), Ok(node));
    }

    #[test]
    fn arrays_coerce_each_element() {
        assert_eq!(
            coerce_iri(&json!(["https://a.gov/", {"@id": "https://b.gov/"}])),
            Ok(json!([{"@id": "https://a.gov/"}, {"@id": "https://b.gov/"}]))
        );
        assert_eq!(coerce_iri(&json!(["https://a.gov/", 3])), Err("number"));
    }

    #[test]
    fn mailto_prefix_once() {
        assert_eq!(
            coerce_mailto(&json!("jane@agency.gov")),
            Ok(json!({"@id": "mailto:jane@agency.gov"}))
        );
        assert_eq!(
            coerce_mailto(&json!("mailto:jane@agency.gov")),
            Ok(json!({"@id": "mailto:jane@agency.gov"}))
        );
    }

    #[test]
    fn rejects_scalars() {
        assert_eq!(coerce_iri(&json!(true)), Err("boolean"));
        assert_eq!(coerce_iri(&Value::Null), Err("null"));
    }
}
