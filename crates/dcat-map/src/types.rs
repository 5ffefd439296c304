//! Mapping rule types.
//!
//! Each source property resolves to a [`PropertyRule`] when the table is
//! built, so the dispatcher switches over an enum instead of comparing
//! property names at conversion time.

use std::fmt;

use serde::Serialize;

use dcat_model::RecordKind;

/// The table a source key is looked up in.
///
/// Record scopes cover top-level nodes; entity scopes cover the compound
/// objects nested inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MappingScope {
    Catalog,
    Dataset,
    Distribution,
    Organization,
    ContactPoint,
}

impl MappingScope {
    pub const ALL: [MappingScope; 5] = [
        Self::Catalog,
        Self::Dataset,
        Self::Distribution,
        Self::Organization,
        Self::ContactPoint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Dataset => "dataset",
            Self::Distribution => "distribution",
            Self::Organization => "organization",
            Self::ContactPoint => "contactPoint",
        }
    }

    /// Parses a scope name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(name))
    }
}

impl From<RecordKind> for MappingScope {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Catalog => Self::Catalog,
            RecordKind::Dataset => Self::Dataset,
            RecordKind::Distribution => Self::Distribution,
        }
    }
}

impl fmt::Display for MappingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which entity transformer handles a structural property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    /// Publisher object, recursing through `subOrganizationOf`.
    Organization,
    /// vCard contact object (or array of them).
    ContactPoint,
    /// Array of distributions, converted one to one.
    Distributions,
    /// Array of datasets nested in a catalog.
    Datasets,
    /// Place name, bounding box, IRI or GeoJSON geometry.
    Spatial,
    /// `start/end` interval.
    Temporal,
    /// Free-text terms (`keyword`, `theme`).
    TermList,
    /// Agency codes (`bureauCode`, `programCode`), comma-splitting strings.
    IdentifierList,
}

/// How the value of a mapped property is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "rule", content = "entity", rename_all = "camelCase")]
pub enum PropertyRule {
    /// Copied unchanged under the new name.
    Literal,
    /// IRI-ranged: strings become `{"@id": ..}`.
    Iri,
    /// IRI-ranged email address, `mailto:` prefixed.
    Mailto,
    /// Date-typed literal, checked for lexical validity.
    Date,
    /// Handled by an entity transformer.
    Entity(EntityKind),
}

impl PropertyRule {
    pub fn is_iri(self) -> bool {
        matches!(self, Self::Iri | Self::Mailto)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Iri => "iri",
            Self::Mailto => "mailto iri",
            Self::Date => "date",
            Self::Entity(EntityKind::Organization) => "organization",
            Self::Entity(EntityKind::ContactPoint) => "contact point",
            Self::Entity(EntityKind::Distributions) => "distributions",
            Self::Entity(EntityKind::Datasets) => "datasets",
            Self::Entity(EntityKind::Spatial) => "spatial",
            Self::Entity(EntityKind::Temporal) => "temporal",
            Self::Entity(EntityKind::TermList) => "term list",
            Self::Entity(EntityKind::IdentifierList) => "identifier list",
        }
    }
}

/// One row of a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyMapping {
    /// DCAT-US 1.1 property name (case-sensitive).
    pub source: &'static str,
    /// Prefixed DCAT-US 3.0 property name.
    pub target: &'static str,
    #[serde(flatten)]
    pub rule: PropertyRule,
}

impl PropertyMapping {
    pub const fn new(source: &'static str, target: &'static str, rule: PropertyRule) -> Self {
        Self {
            source,
            target,
            rule,
        }
    }
}
