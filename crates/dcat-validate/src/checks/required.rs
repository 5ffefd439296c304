//! Fields the DCAT-US 3.0 shapes require per node type.

use serde_json::Value;

use dcat_model::{RecordKind, TargetDocument};

use super::node_type;
use crate::issue::Issue;

const ORGANIZATION: &str = "org:Organization";

pub(super) fn check(node: &TargetDocument, path: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let Some(type_name) = node_type(node) else {
        return issues;
    };
    let path = path.to_string();

    if type_name == ORGANIZATION {
        if !present(node, "foaf:name") {
            issues.push(Issue::OrganizationWithoutName { path: path.clone() });
        }
        if !present(node, "skos:prefLabel") {
            issues.push(Issue::OrganizationWithoutPrefLabel { path });
        }
        return issues;
    }

    let Some(kind) = RecordKind::ALL
        .into_iter()
        .find(|kind| kind.target_type() == type_name)
    else {
        return issues;
    };
    if kind.requires_publisher() && !present(node, "dcterms:publisher") {
        issues.push(Issue::MissingPublisher {
            path: path.clone(),
            node_type: type_name.to_string(),
        });
    }
    match kind {
        RecordKind::Distribution => {
            if !present(node, "dcterms:license") {
                issues.push(Issue::DistributionWithoutLicense { path });
            }
        }
        RecordKind::Catalog | RecordKind::Dataset => {
            if !present(node, "dcterms:title") {
                issues.push(Issue::MissingTitle {
                    path,
                    node_type: type_name.to_string(),
                });
            }
        }
    }
    issues
}

/// An empty array carries no value.
fn present(node: &TargetDocument, property: &str) -> bool {
    match node.get(property) {
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
        None => false,
    }
}
