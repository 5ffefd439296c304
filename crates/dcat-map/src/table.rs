//! Static DCAT-US 1.1 to 3.0 property tables.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use crate::types::{EntityKind, MappingScope, PropertyMapping, PropertyRule};

use PropertyRule::{Date, Entity, Iri, Literal, Mailto};

const CATALOG: &[PropertyMapping] = &[
    PropertyMapping::new("conformsTo", "dcterms:conformsTo", Iri),
    PropertyMapping::new("describedBy", "dcat-us:describedBy", Iri),
    PropertyMapping::new("dataset", "dcat:dataset", Entity(EntityKind::Datasets)),
    PropertyMapping::new("title", "dcterms:title", Literal),
    PropertyMapping::new("description", "dcterms:description", Literal),
    PropertyMapping::new("issued", "dcterms:issued", Date),
    PropertyMapping::new("modified", "dcterms:modified", Date),
    PropertyMapping::new("language", "dcterms:language", Literal),
    PropertyMapping::new("license", "dcterms:license", Iri),
    PropertyMapping::new("rights", "dcterms:rights", Literal),
    PropertyMapping::new("homepage", "foaf:homepage", Iri),
    PropertyMapping::new("spatial", "dcterms:spatial", Entity(EntityKind::Spatial)),
    PropertyMapping::new("temporal", "dcterms:temporal", Entity(EntityKind::Temporal)),
    PropertyMapping::new(
        "publisher",
        "dcterms:publisher",
        Entity(EntityKind::Organization),
    ),
    PropertyMapping::new(
        "contactPoint",
        "dcat:contactPoint",
        Entity(EntityKind::ContactPoint),
    ),
];

const DATASET: &[PropertyMapping] = &[
    PropertyMapping::new("title", "dcterms:title", Literal),
    PropertyMapping::new("description", "dcterms:description", Literal),
    PropertyMapping::new("keyword", "dcat:keyword", Entity(EntityKind::TermList)),
    PropertyMapping::new("modified", "dcterms:modified", Date),
    PropertyMapping::new("issued", "dcterms:issued", Date),
    PropertyMapping::new("identifier", "dcterms:identifier", Literal),
    PropertyMapping::new("accessLevel", "dcat-us:accessLevel", Literal),
    PropertyMapping::new("rights", "dcterms:rights", Literal),
    PropertyMapping::new("license", "dcterms:license", Iri),
    PropertyMapping::new("spatial", "dcterms:spatial", Entity(EntityKind::Spatial)),
    PropertyMapping::new("temporal", "dcterms:temporal", Entity(EntityKind::Temporal)),
    PropertyMapping::new("accrualPeriodicity", "dcterms:accrualPeriodicity", Literal),
    PropertyMapping::new("conformsTo", "dcterms:conformsTo", Iri),
    PropertyMapping::new("theme", "dcat:theme", Entity(EntityKind::TermList)),
    PropertyMapping::new("references", "dcterms:references", Iri),
    PropertyMapping::new("isPartOf", "dcterms:isPartOf", Literal),
    PropertyMapping::new("landingPage", "dcat:landingPage", Iri),
    PropertyMapping::new("language", "dcterms:language", Literal),
    PropertyMapping::new(
        "bureauCode",
        "dcat-us:bureauCode",
        Entity(EntityKind::IdentifierList),
    ),
    PropertyMapping::new(
        "programCode",
        "dcat-us:programCode",
        Entity(EntityKind::IdentifierList),
    ),
    PropertyMapping::new(
        "primaryITInvestmentUII",
        "dcat-us:primaryITInvestmentUII",
        Literal,
    ),
    PropertyMapping::new("systemOfRecords", "dcat-us:systemOfRecords", Iri),
    PropertyMapping::new("describedBy", "dcat-us:describedBy", Iri),
    PropertyMapping::new(
        "publisher",
        "dcterms:publisher",
        Entity(EntityKind::Organization),
    ),
    PropertyMapping::new(
        "contactPoint",
        "dcat:contactPoint",
        Entity(EntityKind::ContactPoint),
    ),
    PropertyMapping::new(
        "distribution",
        "dcat:distribution",
        Entity(EntityKind::Distributions),
    ),
];

const DISTRIBUTION: &[PropertyMapping] = &[
    PropertyMapping::new("accessURL", "dcat:accessURL", Iri),
    PropertyMapping::new("downloadURL", "dcat:downloadURL", Iri),
    PropertyMapping::new("mediaType", "dcat:mediaType", Literal),
    PropertyMapping::new("format", "dcterms:format", Literal),
    PropertyMapping::new("title", "dcterms:title", Literal),
    PropertyMapping::new("description", "dcterms:description", Literal),
    PropertyMapping::new("conformsTo", "dcterms:conformsTo", Iri),
    PropertyMapping::new("describedBy", "dcat-us:describedBy", Iri),
    PropertyMapping::new("license", "dcterms:license", Iri),
    PropertyMapping::new("rights", "dcterms:rights", Literal),
];

const ORGANIZATION: &[PropertyMapping] = &[
    PropertyMapping::new("name", "foaf:name", Literal),
    PropertyMapping::new(
        "subOrganizationOf",
        "org:subOrganizationOf",
        Entity(EntityKind::Organization),
    ),
    PropertyMapping::new("mbox", "foaf:mbox", Mailto),
    PropertyMapping::new("homepage", "foaf:homepage", Iri),
    PropertyMapping::new("identifier", "dcterms:identifier", Literal),
];

const CONTACT_POINT: &[PropertyMapping] = &[
    PropertyMapping::new("fn", "vcard:fn", Literal),
    PropertyMapping::new("hasEmail", "vcard:hasEmail", Mailto),
    PropertyMapping::new("hasTelephone", "vcard:hasTelephone", Literal),
    PropertyMapping::new("hasURL", "vcard:hasURL", Iri),
    PropertyMapping::new("organization-name", "vcard:organization-name", Literal),
    PropertyMapping::new("street-address", "vcard:street-address", Literal),
    PropertyMapping::new("locality", "vcard:locality", Literal),
    PropertyMapping::new("region", "vcard:region", Literal),
    PropertyMapping::new("postal-code", "vcard:postal-code", Literal),
    PropertyMapping::new("country-name", "vcard:country-name", Literal),
];

/// JSON-LD keywords that are handled by the dispatcher itself and never
/// reported as unmapped.
pub const RESERVED_KEYS: [&str; 3] = ["@context", "@type", "@id"];

/// A read-only mapping from source property name to [`PropertyMapping`].
///
/// Lookups are case-sensitive.
#[derive(Debug)]
pub struct MappingTable {
    entries: BTreeMap<&'static str, PropertyMapping>,
}

impl MappingTable {
    fn build(rows: &'static [PropertyMapping]) -> Self {
        let entries = rows.iter().map(|row| (row.source, *row)).collect();
        Self { entries }
    }

    /// Returns the shared table for a scope.
    pub fn for_scope(scope: MappingScope) -> &'static MappingTable {
        static CATALOG_TABLE: OnceLock<MappingTable> = OnceLock::new();
        static DATASET_TABLE: OnceLock<MappingTable> = OnceLock::new();
        static DISTRIBUTION_TABLE: OnceLock<MappingTable> = OnceLock::new();
        static ORGANIZATION_TABLE: OnceLock<MappingTable> = OnceLock::new();
        static CONTACT_POINT_TABLE: OnceLock<MappingTable> = OnceLock::new();

        let (cell, rows) = match scope {
            MappingScope::Catalog => (&CATALOG_TABLE, CATALOG),
            MappingScope::Dataset => (&DATASET_TABLE, DATASET),
            MappingScope::Distribution => (&DISTRIBUTION_TABLE, DISTRIBUTION),
            MappingScope::Organization => (&ORGANIZATION_TABLE, ORGANIZATION),
            MappingScope::ContactPoint => (&CONTACT_POINT_TABLE, CONTACT_POINT),
        };
        cell.get_or_init(|| Self::build(rows))
    }

    pub fn lookup(&self, source: &str) -> Option<&PropertyMapping> {
        self.entries.get(source)
    }

    /// Rows in source-name order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyMapping> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// True for JSON-LD keywords the dispatcher handles itself.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Target properties whose range is an IRI, across every scope.
pub fn iri_ranged_targets() -> BTreeSet<&'static str> {
    targets_matching(PropertyRule::is_iri)
}

/// Target properties holding date literals, across every scope.
pub fn date_targets() -> BTreeSet<&'static str> {
    targets_matching(|rule| rule == Date)
}

fn targets_matching(predicate: impl Fn(PropertyRule) -> bool) -> BTreeSet<&'static str> {
    MappingScope::ALL
        .into_iter()
        .flat_map(|scope| MappingTable::for_scope(scope).iter())
        .filter(|row| predicate(row.rule))
        .map(|row| row.target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_unique_sources() {
        for (scope, rows) in [
            (MappingScope::Catalog, CATALOG),
            (MappingScope::Dataset, DATASET),
            (MappingScope::Distribution, DISTRIBUTION),
            (MappingScope::Organization, ORGANIZATION),
            (MappingScope::ContactPoint, CONTACT_POINT),
        ] {
            assert_eq!(
                MappingTable::for_scope(scope).len(),
                rows.len(),
                "duplicate source key in {scope} table"
            );
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = MappingTable::for_scope(MappingScope::Dataset);
        assert!(table.lookup("accessLevel").is_some());
        assert!(table.lookup("accesslevel").is_none());
    }

    #[test]
    fn reserved_keys() {
        assert!(is_reserved_key("@type"));
        assert!(!is_reserved_key("type"));
    }
}
