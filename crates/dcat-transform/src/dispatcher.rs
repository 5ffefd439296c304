//! Per-record conversion entry point.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use dcat_model::{
    ContextHeader, ConversionOptions, ConvertError, RecordKind, TargetDocument, Warning,
    json_type_name, record_identifier,
};

use crate::context::TransformContext;
use crate::defaults::inject_defaults;
use crate::mapper::convert_node;

/// Label used for records that carry no identifier and were given no label.
pub const UNNAMED_RECORD: &str = "<unnamed>";

/// The result of converting one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub kind: RecordKind,
    pub record_id: String,
    pub document: TargetDocument,
    pub warnings: Vec<Warning>,
}

/// Converts DCAT-US 1.1 records into DCAT-US 3.0 JSON-LD documents.
///
/// Holds only the options; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Converts one parsed source record.
    ///
    /// `hint` forces the record kind; without it the kind is detected from
    /// the record. `label` (usually the file name) identifies records that
    /// carry no identifier of their own.
    ///
    /// Only a non-object input or an undeterminable kind fails; every other
    /// problem drops the affected field and is reported as a [`Warning`].
    pub fn convert(
        &self,
        record: &Value,
        hint: Option<RecordKind>,
        label: Option<&str>,
    ) -> Result<Conversion, ConvertError> {
        let fallback_id = label.unwrap_or(UNNAMED_RECORD);
        let Value::Object(source) = record else {
            return Err(ConvertError::NotAnObject {
                record_id: fallback_id.to_string(),
                found: json_type_name(record),
            });
        };

        let record_id = record_identifier(source).unwrap_or_else(|| fallback_id.to_string());
        let kind = hint
            .or_else(|| RecordKind::detect(source))
            .ok_or_else(|| ConvertError::UndeterminedRecordType {
                record_id: record_id.clone(),
            })?;

        let mut ctx = TransformContext::new(&self.options, record_id.clone());
        let node = convert_node(kind, source, &mut ctx);
        let mut warnings = ctx.into_warnings();

        let mut document = Map::with_capacity(node.len() + 1);
        document.insert("@context".to_string(), ContextHeader::to_value());
        document.extend(node);

        for warning in inject_defaults(&mut document, &self.options, &record_id) {
            debug!(
                record_id = %warning.record_id,
                field = %warning.field,
                reason = %warning.reason,
                "{}",
                warning.message
            );
            warnings.push(warning);
        }

        info!(
            record_id = %record_id,
            kind = %kind,
            warnings = warnings.len(),
            "converted record"
        );

        Ok(Conversion {
            kind,
            record_id,
            document,
            warnings,
        })
    }
}

/// Converts one record with the given options.
pub fn convert_record(
    record: &Value,
    hint: Option<RecordKind>,
    options: &ConversionOptions,
) -> Result<Conversion, ConvertError> {
    Converter::new(options.clone()).convert(record, hint, None)
}
