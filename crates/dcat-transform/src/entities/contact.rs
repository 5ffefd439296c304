//! vCard contact point transformer.

use serde_json::{Map, Value};

use dcat_map::MappingScope;

use super::{each_element, unexpected};
use crate::context::TransformContext;
use crate::mapper::{map_properties, non_empty_str};

const CONTACT_TYPE: &str = "vcard:Contact";

pub(super) fn transform(field: &str, value: &Value, ctx: &mut TransformContext<'_>) -> Option<Value> {
    each_element(field, value, ctx, contact)
}

fn contact(segment: &str, value: &Value, ctx: &mut TransformContext<'_>) -> Option<Value> {
    let Value::Object(source) = value else {
        unexpected(segment, "a contact object", value, ctx);
        return None;
    };
    let node = ctx.scoped(segment, |ctx| {
        let mut node = Map::new();
        node.insert("@type".to_string(), Value::String(CONTACT_TYPE.to_string()));
        if let Some(id) = non_empty_str(source, "@id") {
            node.insert("@id".to_string(), Value::String(id.to_string()));
        }
        map_properties(MappingScope::ContactPoint, source, &mut node, ctx);
        node
    });
    Some(Value::Object(node))
}
