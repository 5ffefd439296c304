//! DCAT-US 1.1 to 3.0 transformation engine.
//!
//! A record flows one way through the engine: the dispatcher maps each
//! source key through the property table, structural properties go to the
//! entity transformers, scalar values to the coercers (with the anomaly
//! detector behind date coercion), and the default injector completes the
//! document. Warnings are returned with the result; nothing is shared
//! between records.

#![deny(unsafe_code)]

pub mod anomaly;
pub mod coerce;
pub mod context;
pub mod datetime;
pub mod defaults;
pub mod dispatcher;
pub mod entities;
mod mapper;

pub use anomaly::{Anomaly, classify, is_frequency_expression};
pub use coerce::{coerce_date, coerce_iri, coerce_mailto, iri, mailto_iri};
pub use context::{MAX_NESTING_DEPTH, TransformContext};
pub use datetime::{DateError, DateForm, is_date_literal, parse_date_form};
pub use defaults::inject_defaults;
pub use dispatcher::{Conversion, Converter, UNNAMED_RECORD, convert_record};
