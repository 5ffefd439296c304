//! Spatial coverage transformer.
//!
//! Geometry is passed through structurally: a GeoJSON object is carried as a
//! JSON literal, a bounding box as its source string. No coordinate
//! transcoding happens here.

use serde_json::{Map, Value, json};

use super::{each_element, unexpected};
use crate::coerce::iri;
use crate::context::TransformContext;

const LOCATION_TYPE: &str = "dcterms:Location";

pub(super) fn transform(field: &str, value: &Value, ctx: &mut TransformContext<'_>) -> Option<Value> {
    each_element(field, value, ctx, location)
}

fn location(segment: &str, value: &Value, ctx: &mut TransformContext<'_>) -> Option<Value> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                unexpected(segment, "a place name, bounding box or IRI", value, ctx);
                return None;
            }
            if text.starts_with("http://") || text.starts_with("https://") {
                Some(iri(text))
            } else if parse_bbox(text).is_some() {
                Some(location_node("dcat:bbox", Value::String(text.to_string())))
            } else {
                Some(location_node("rdfs:label", Value::String(text.to_string())))
            }
        }
        Value::Object(object) if object.contains_key("@id") || object.contains_key("@type") => {
            Some(value.clone())
        }
        Value::Object(_) => Some(location_node(
            "dcat:bbox",
            json!({"@type": "@json", "@value": value}),
        )),
        other => {
            unexpected(segment, "a spatial string or GeoJSON object", other, ctx);
            None
        }
    }
}

fn location_node(property: &str, value: Value) -> Value {
    let mut node = Map::new();
    node.insert("@type".to_string(), Value::String(LOCATION_TYPE.to_string()));
    node.insert(property.to_string(), value);
    Value::Object(node)
}

/// Parses a `west,south,east,north` bounding box in decimal degrees.
pub fn parse_bbox(text: &str) -> Option<[f64; 4]> {
    let mut coords = [0.0; 4];
    let mut parts = text.split(',');
    for slot in &mut coords {
        *slot = parts.next()?.trim().parse::<f64>().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    let [west, south, east, north] = coords;
    let lon = -180.0..=180.0;
    let lat = -90.0..=90.0;
    (lon.contains(&west) && lon.contains(&east) && lat.contains(&south) && lat.contains(&north)
        && south <= north)
        .then_some(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_boxes() {
        assert_eq!(
            parse_bbox("-124.7, 24.5, -66.9, 49.4"),
            Some([-124.7, 24.5, -66.9, 49.4])
        );
        assert_eq!(parse_bbox("1,2,3"), None);
        assert_eq!(parse_bbox("1,2,3,4,5"), None);
        assert_eq!(parse_bbox("0,95,1,96"), None);
        assert_eq!(parse_bbox("Washington, DC"), None);
    }
}
