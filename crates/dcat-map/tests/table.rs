use dcat_map::{
    EntityKind, MappingScope, MappingTable, PropertyRule, date_targets, iri_ranged_targets,
};
use dcat_model::{RecordKind, is_known_compact_key};

#[test]
fn every_target_uses_a_context_prefix() {
    for scope in MappingScope::ALL {
        for row in MappingTable::for_scope(scope).iter() {
            assert!(
                is_known_compact_key(row.target),
                "{scope}.{} maps to unprefixed {}",
                row.source,
                row.target
            );
        }
    }
}

#[test]
fn structural_properties_dispatch_to_entities() {
    let dataset = MappingTable::for_scope(MappingScope::Dataset);
    let publisher = dataset.lookup("publisher").expect("publisher mapped");
    assert_eq!(publisher.target, "dcterms:publisher");
    assert_eq!(publisher.rule, PropertyRule::Entity(EntityKind::Organization));

    let contact = dataset.lookup("contactPoint").expect("contactPoint mapped");
    assert_eq!(contact.target, "dcat:contactPoint");

    let distribution = dataset.lookup("distribution").expect("distribution mapped");
    assert_eq!(
        distribution.rule,
        PropertyRule::Entity(EntityKind::Distributions)
    );

    let catalog = MappingTable::for_scope(MappingScope::Catalog);
    assert_eq!(
        catalog.lookup("dataset").map(|row| row.rule),
        Some(PropertyRule::Entity(EntityKind::Datasets))
    );
}

#[test]
fn direct_renames() {
    let dataset = MappingTable::for_scope(RecordKind::Dataset.into());
    for (source, target) in [
        ("title", "dcterms:title"),
        ("description", "dcterms:description"),
        ("accessLevel", "dcat-us:accessLevel"),
        ("bureauCode", "dcat-us:bureauCode"),
        ("programCode", "dcat-us:programCode"),
    ] {
        assert_eq!(dataset.lookup(source).map(|row| row.target), Some(target));
    }
}

#[test]
fn removed_fields_are_not_mapped() {
    let dataset = MappingTable::for_scope(MappingScope::Dataset);
    assert!(dataset.lookup("dataQuality").is_none());
    assert!(dataset.lookup("describedByType").is_none());
}

#[test]
fn iri_and_date_ranges() {
    let iris = iri_ranged_targets();
    for target in [
        "dcat:accessURL",
        "dcat:downloadURL",
        "dcat:landingPage",
        "dcat-us:describedBy",
        "dcterms:license",
        "vcard:hasEmail",
    ] {
        assert!(iris.contains(target), "{target} should be IRI-ranged");
    }
    assert!(!iris.contains("dcterms:title"));

    let dates = date_targets();
    assert!(dates.contains("dcterms:modified"));
    assert!(dates.contains("dcterms:issued"));
    assert_eq!(dates.len(), 2);
}

#[test]
fn scope_parsing() {
    assert_eq!(MappingScope::parse("ContactPoint"), Some(MappingScope::ContactPoint));
    assert_eq!(MappingScope::parse("dataset"), Some(MappingScope::Dataset));
    assert_eq!(MappingScope::parse("series"), None);
}

#[test]
fn rows_serialize_with_rule_tag() {
    let row = MappingTable::for_scope(MappingScope::Dataset)
        .lookup("publisher")
        .expect("publisher mapped");
    let json = serde_json::to_value(row).expect("serialize row");
    assert_eq!(json["source"], "publisher");
    assert_eq!(json["rule"], "entity");
    assert_eq!(json["entity"], "organization");
}
