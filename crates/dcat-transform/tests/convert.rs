//! End-to-end record conversion scenarios.

use serde_json::{Map, Value, json};

use dcat_model::{ContextHeader, ConversionOptions, ConvertError, ReasonCode, RecordKind};
use dcat_transform::{Conversion, Converter, MAX_NESTING_DEPTH, convert_record};

fn convert(record: Value, kind: RecordKind) -> Conversion {
    convert_record(&record, Some(kind), &ConversionOptions::default()).expect("record converts")
}

fn reasons(conversion: &Conversion, reason: ReasonCode) -> usize {
    conversion
        .warnings
        .iter()
        .filter(|w| w.reason == reason)
        .count()
}

#[test]
fn publisher_with_parent_organization() {
    let conversion = convert(
        json!({
            "title": "Example",
            "publisher": {
                "name": "Department of Example",
                "subOrganizationOf": {"name": "U.S. Government"}
            }
        }),
        RecordKind::Dataset,
    );

    assert_eq!(
        conversion.document["dcterms:publisher"],
        json!({
            "@type": "org:Organization",
            "foaf:name": "Department of Example",
            "skos:prefLabel": "Department of Example",
            "org:subOrganizationOf": {
                "@type": "org:Organization",
                "foaf:name": "U.S. Government",
                "skos:prefLabel": "U.S. Government"
            }
        })
    );
    assert_eq!(reasons(&conversion, ReasonCode::DefaultInjected), 0);
}

#[test]
fn contact_point_email_becomes_mailto_iri() {
    let conversion = convert(
        json!({"contactPoint": {"fn": "John Doe", "hasEmail": "john.doe@agency.gov"}}),
        RecordKind::Dataset,
    );

    assert_eq!(
        conversion.document["dcat:contactPoint"],
        json!({
            "@type": "vcard:Contact",
            "vcard:fn": "John Doe",
            "vcard:hasEmail": {"@id": "mailto:john.doe@agency.gov"}
        })
    );
}

#[test]
fn frequency_in_modified_is_dropped() {
    let conversion = convert(
        json!({"title": "Weekly counts", "modified": "R/P1W"}),
        RecordKind::Dataset,
    );

    assert!(!conversion.document.contains_key("dcterms:modified"));
    assert_eq!(reasons(&conversion, ReasonCode::FrequencyInDateField), 1);
    assert_eq!(reasons(&conversion, ReasonCode::InvalidDateValue), 0);
}

#[test]
fn garbage_in_issued_is_dropped() {
    let conversion = convert(
        json!({"title": "T", "issued": "sometime in 2019", "modified": "2019-04-01"}),
        RecordKind::Dataset,
    );

    assert!(!conversion.document.contains_key("dcterms:issued"));
    assert_eq!(conversion.document["dcterms:modified"], "2019-04-01");
    assert_eq!(reasons(&conversion, ReasonCode::InvalidDateValue), 1);
}

#[test]
fn missing_publisher_is_defaulted() {
    let conversion = convert(json!({"title": "No publisher"}), RecordKind::Dataset);

    let publisher = &conversion.document["dcterms:publisher"];
    let name = publisher["foaf:name"].as_str().unwrap_or_default();
    assert!(!name.is_empty());
    assert_eq!(publisher["skos:prefLabel"], name);
    assert_eq!(reasons(&conversion, ReasonCode::DefaultInjected), 1);
}

#[test]
fn empty_or_unusable_publisher_arrays_are_defaulted() {
    for publisher in [json!([]), json!([42]), json!([""])] {
        let conversion = convert(
            json!({"title": "T", "publisher": publisher, "contactPoint": []}),
            RecordKind::Dataset,
        );

        assert_eq!(
            conversion.document["dcterms:publisher"]["foaf:name"], "U.S. Government",
            "{publisher}"
        );
        let injected: Vec<&str> = conversion
            .warnings
            .iter()
            .filter(|w| w.reason == ReasonCode::DefaultInjected)
            .map(|w| w.field.as_str())
            .collect();
        assert_eq!(injected, vec!["publisher"], "{publisher}");
        assert!(!conversion.document.contains_key("dcat:contactPoint"));
    }
}

#[test]
fn deep_organization_chains_are_cut_at_the_segment_limit() {
    let mut publisher = json!({"name": "Level 20"});
    for level in (0..20).rev() {
        publisher = json!({"name": format!("Level {level}"), "subOrganizationOf": publisher});
    }
    let conversion = convert(json!({"title": "T", "publisher": publisher}), RecordKind::Dataset);

    let cut: Vec<_> = conversion
        .warnings
        .iter()
        .filter(|w| w.reason == ReasonCode::UnexpectedValueType)
        .collect();
    assert_eq!(cut.len(), 1);
    assert_eq!(cut[0].field.split('.').count(), MAX_NESTING_DEPTH + 1);
    assert!(cut[0].field.starts_with("publisher.subOrganizationOf"));

    let mut node = &conversion.document["dcterms:publisher"];
    let mut depth = 1;
    while let Some(parent) = node.get("org:subOrganizationOf") {
        node = parent;
        depth += 1;
    }
    assert_eq!(depth, MAX_NESTING_DEPTH);
}

#[test]
fn distribution_license_is_defaulted() {
    let conversion = convert(
        json!({"accessURL": "https://example.gov/api"}),
        RecordKind::Distribution,
    );

    assert_eq!(
        conversion.document["dcterms:license"],
        json!({"@id": "https://creativecommons.org/publicdomain/zero/1.0/"})
    );
    assert_eq!(
        conversion.document["dcat:accessURL"],
        json!({"@id": "https://example.gov/api"})
    );
    assert!(!conversion.document.contains_key("dcterms:publisher"));
}

#[test]
fn configured_defaults_are_used() {
    let options = ConversionOptions::default()
        .with_default_publisher("Department of Example")
        .with_default_publisher_iri(None)
        .with_default_license("https://example.gov/license")
        .with_dataset_base_iri("https://example.gov/datasets/");
    let converter = Converter::new(options);

    let dataset = converter
        .convert(&json!({"title": "T"}), Some(RecordKind::Dataset), None)
        .expect("dataset converts");
    assert_eq!(
        dataset.document["dcterms:publisher"],
        json!({
            "@type": "org:Organization",
            "foaf:name": "Department of Example",
            "skos:prefLabel": "Department of Example"
        })
    );

    let identified = converter
        .convert(&json!({"identifier": "rivers-2024"}), Some(RecordKind::Dataset), None)
        .expect("dataset converts");
    assert_eq!(
        identified.document["@id"],
        "https://example.gov/datasets/rivers-2024"
    );

    let distribution = converter
        .convert(&json!({"title": "CSV"}), Some(RecordKind::Distribution), None)
        .expect("distribution converts");
    assert_eq!(
        distribution.document["dcterms:license"],
        json!({"@id": "https://example.gov/license"})
    );
}

#[test]
fn unmapped_properties_are_reported_and_dropped() {
    let conversion = convert(
        json!({
            "title": "T",
            "dataQuality": true,
            "describedByType": "application/json",
            "customField": "x"
        }),
        RecordKind::Dataset,
    );

    assert_eq!(reasons(&conversion, ReasonCode::UnmappedProperty), 3);
    for key in ["dataQuality", "describedByType", "customField"] {
        assert!(!conversion.document.contains_key(key));
        assert!(conversion.warnings.iter().any(|w| w.field == key));
    }
}

#[test]
fn catalog_nests_datasets_and_distributions() {
    let conversion = convert(
        json!({
            "@type": "dcat:Catalog",
            "conformsTo": "https://project-open-data.cio.gov/v1.1/schema",
            "dataset": [
                {"identifier": "a", "title": "A", "publisher": {"name": "Agency"}},
                {
                    "identifier": "b",
                    "title": "B",
                    "publisher": {"name": "Agency"},
                    "distribution": [
                        {"downloadURL": "https://example.gov/b.csv"},
                        {"accessURL": 7}
                    ]
                }
            ]
        }),
        RecordKind::Catalog,
    );
    let doc = &conversion.document;

    assert_eq!(doc["@type"], "dcat:Catalog");
    assert_eq!(doc["@context"], ContextHeader::to_value());
    let datasets = doc["dcat:dataset"].as_array().expect("dataset array");
    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0]["@id"], "https://data.gov/datasets/a");
    assert!(datasets[0].get("@context").is_none());
    assert_eq!(
        datasets[1]["dcat:distribution"][0]["dcat:downloadURL"],
        json!({"@id": "https://example.gov/b.csv"})
    );

    let bad_url = conversion
        .warnings
        .iter()
        .find(|w| w.reason == ReasonCode::UnexpectedValueType)
        .expect("wrong-shaped accessURL reported");
    assert_eq!(bad_url.field, "dataset[1].distribution[1].accessURL");
    assert_eq!(bad_url.record_id, "b");

    // Catalog title, description and publisher; two distribution licenses.
    assert_eq!(reasons(&conversion, ReasonCode::DefaultInjected), 5);
}

#[test]
fn kind_is_detected_without_hint() {
    let converter = Converter::default();
    let catalog = converter
        .convert(&json!({"dataset": []}), None, Some("catalog.json"))
        .expect("catalog converts");
    assert_eq!(catalog.kind, RecordKind::Catalog);
    assert_eq!(catalog.record_id, "catalog.json");

    let distribution = converter
        .convert(&json!({"mediaType": "text/csv"}), None, None)
        .expect("distribution converts");
    assert_eq!(distribution.document["@type"], "dcat:Distribution");
}

#[test]
fn record_level_failures() {
    let converter = Converter::default();
    assert_eq!(
        converter.convert(&json!([1, 2]), None, Some("list.json")),
        Err(ConvertError::NotAnObject {
            record_id: "list.json".to_string(),
            found: "array",
        })
    );
    assert!(matches!(
        converter.convert(&json!({"foo": 1}), None, Some("odd.json")),
        Err(ConvertError::UndeterminedRecordType { record_id }) if record_id == "odd.json"
    ));
}

#[test]
fn spatial_and_temporal_shapes() {
    let conversion = convert(
        json!({
            "title": "T",
            "spatial": "-124.7,24.5,-66.9,49.4",
            "temporal": "2000-01-01/2010-12-31"
        }),
        RecordKind::Dataset,
    );
    assert_eq!(
        conversion.document["dcterms:spatial"],
        json!({"@type": "dcterms:Location", "dcat:bbox": "-124.7,24.5,-66.9,49.4"})
    );
    assert_eq!(
        conversion.document["dcterms:temporal"]["dcat:startDate"],
        "2000-01-01"
    );

    let named = convert(json!({"spatial": "Puget Sound"}), RecordKind::Dataset);
    assert_eq!(
        named.document["dcterms:spatial"],
        json!({"@type": "dcterms:Location", "rdfs:label": "Puget Sound"})
    );

    let geometry = json!({"type": "Point", "coordinates": [-77.0, 38.9]});
    let geo = convert(json!({"spatial": geometry.clone()}), RecordKind::Dataset);
    assert_eq!(
        geo.document["dcterms:spatial"]["dcat:bbox"],
        json!({"@type": "@json", "@value": geometry})
    );
}

#[test]
fn dataset_snapshot() {
    let conversion = convert(
        json!({
            "identifier": "doi-123",
            "title": "Water Quality",
            "modified": "R/P1W",
            "distribution": [
                {"downloadURL": "https://example.gov/wq.csv", "mediaType": "text/csv"}
            ]
        }),
        RecordKind::Dataset,
    );
    let body: Map<String, Value> = conversion
        .document
        .iter()
        .filter(|(key, _)| key.as_str() != "@context")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    insta::assert_json_snapshot!(body, @r#"
    {
      "@type": "dcat:Dataset",
      "@id": "https://data.gov/datasets/doi-123",
      "dcterms:identifier": "doi-123",
      "dcterms:title": "Water Quality",
      "dcat:distribution": [
        {
          "@type": "dcat:Distribution",
          "dcat:downloadURL": {
            "@id": "https://example.gov/wq.csv"
          },
          "dcat:mediaType": "text/csv",
          "dcterms:license": {
            "@id": "https://creativecommons.org/publicdomain/zero/1.0/"
          }
        }
      ],
      "dcterms:publisher": {
        "@type": "org:Organization",
        "@id": "https://www.usa.gov/",
        "foaf:name": "U.S. Government",
        "skos:prefLabel": "U.S. Government"
      }
    }
    "#);
}
