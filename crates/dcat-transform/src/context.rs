//! Per-record transformation context.
//!
//! Carries the options, the identifier of the record being converted, the
//! source-side path of the current node, and the warnings collected so far.
//! A context lives for exactly one record conversion; nothing is shared
//! between records.

use tracing::debug;

use dcat_model::{ConversionOptions, ReasonCode, Warning};

/// Maximum number of source path segments followed by the transformers.
///
/// Each nested node entered adds one segment (`publisher`, `dataset[0]`), so
/// the parent organization of a catalog's first dataset publisher sits three
/// segments deep at `dataset[0].publisher.subOrganizationOf`. This is not the
/// schema's level count: the limit leaves room for long `subOrganizationOf`
/// chains. Values past it are dropped with a warning.
pub const MAX_NESTING_DEPTH: usize = 12;

#[derive(Debug)]
pub struct TransformContext<'a> {
    pub options: &'a ConversionOptions,
    record_id: String,
    path: Vec<String>,
    warnings: Vec<Warning>,
}

impl<'a> TransformContext<'a> {
    pub fn new(options: &'a ConversionOptions, record_id: impl Into<String>) -> Self {
        Self {
            options,
            record_id: record_id.into(),
            path: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Source-side path of `field` under the current node.
    pub fn field_path(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else if field.is_empty() {
            self.path.join(".")
        } else {
            format!("{}.{field}", self.path.join("."))
        }
    }

    /// Runs `f` with `segment` appended to the current path.
    pub fn scoped<R>(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(segment.into());
        let result = f(self);
        self.path.pop();
        result
    }

    /// Runs `f` with warnings attributed to another record (a nested dataset).
    pub fn for_record<R>(
        &mut self,
        record_id: Option<String>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let Some(record_id) = record_id else {
            return f(self);
        };
        let previous = std::mem::replace(&mut self.record_id, record_id);
        let result = f(self);
        self.record_id = previous;
        result
    }

    /// Records a warning for `field` under the current node.
    pub fn warn(&mut self, field: &str, reason: ReasonCode, message: impl Into<String>) {
        let warning = Warning::new(
            self.record_id.clone(),
            self.field_path(field),
            reason,
            message,
        );
        debug!(
            record_id = %warning.record_id,
            field = %warning.field,
            reason = %warning.reason,
            "{}",
            warning.message
        );
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_nest_and_unwind() {
        let options = ConversionOptions::default();
        let mut ctx = TransformContext::new(&options, "catalog");
        assert_eq!(ctx.field_path("title"), "title");
        ctx.scoped("dataset[1]", |ctx| {
            ctx.scoped("distribution[0]", |ctx| {
                assert_eq!(
                    ctx.field_path("accessURL"),
                    "dataset[1].distribution[0].accessURL"
                );
                assert_eq!(ctx.depth(), 2);
            });
        });
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn nested_record_ids_restore() {
        let options = ConversionOptions::default();
        let mut ctx = TransformContext::new(&options, "catalog");
        ctx.for_record(Some("ds-1".to_string()), |ctx| {
            ctx.warn("modified", ReasonCode::InvalidDateValue, "bad");
        });
        ctx.warn("foo", ReasonCode::UnmappedProperty, "unmapped");
        let warnings = ctx.into_warnings();
        assert_eq!(warnings[0].record_id, "ds-1");
        assert_eq!(warnings[1].record_id, "catalog");
    }
}
