//! DCAT-US 1.1 to 3.0 property mapping tables.
//!
//! One static table per [`MappingScope`]. Every row names the 1.1 source
//! property, the prefixed 3.0 target property, and the [`PropertyRule`]
//! that converts its value.

#![deny(unsafe_code)]

mod table;
mod types;

pub use table::{
    MappingTable, RESERVED_KEYS, date_targets, iri_ranged_targets, is_reserved_key,
};
pub use types::{EntityKind, MappingScope, PropertyMapping, PropertyRule};
