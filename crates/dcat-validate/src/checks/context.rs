use dcat_model::{ContextHeader, TargetDocument};

use crate::issue::Issue;

pub(super) fn check(document: &TargetDocument) -> Option<Issue> {
    match document.get("@context") {
        Some(context) if *context == ContextHeader::to_value() => None,
        _ => Some(Issue::ContextMismatch),
    }
}
