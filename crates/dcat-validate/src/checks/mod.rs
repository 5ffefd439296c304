//! Conformance check modules.
//!
//! The context check looks at the document root; every other check runs on
//! each node reached by walking the document.

mod context;
mod dates;
mod keys;
mod required;

use serde_json::Value;

use dcat_model::TargetDocument;

use crate::issue::Issue;

/// Runs every check over a produced document.
pub fn run_all(document: &TargetDocument) -> Vec<Issue> {
    let mut issues = Vec::new();

    // 1. Fixed @context header
    issues.extend(context::check(document));

    walk(document, "$", &mut |node, path| {
        // 2. Prefixed keys and IRI-ranged values
        issues.extend(keys::check(node, path));

        // 3. Shape-mandated fields per node type
        issues.extend(required::check(node, path));

        // 4. Date literals
        issues.extend(dates::check(node, path));
    });

    issues
}

/// Visits `node` and every nested node object below it.
///
/// JSON literals (`{"@value": ..}`) are leaves: their content is data, not
/// RDF structure.
fn walk(node: &TargetDocument, path: &str, visit: &mut impl FnMut(&TargetDocument, &str)) {
    if node.contains_key("@value") {
        return;
    }
    visit(node, path);
    for (key, child) in node {
        if key.starts_with('@') {
            continue;
        }
        match child {
            Value::Object(object) => walk(object, &format!("{path}.{key}"), visit),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if let Value::Object(object) = item {
                        walk(object, &format!("{path}.{key}[{index}]"), visit);
                    }
                }
            }
            _ => {}
        }
    }
}

/// `@type` of a node, when it is a single string.
fn node_type(node: &TargetDocument) -> Option<&str> {
    node.get("@type").and_then(Value::as_str)
}
