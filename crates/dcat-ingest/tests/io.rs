use std::path::PathBuf;

use serde_json::{Map, Value, json};
use tempfile::TempDir;

use dcat_ingest::{IngestError, plan_jobs, read_record, write_document};

#[test]
fn directory_input_plans_one_job_per_json_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("b.json"), "{}").unwrap();
    std::fs::write(dir.path().join("a.json"), "{}").unwrap();
    std::fs::write(dir.path().join("readme.md"), "").unwrap();
    let out = dir.path().join("out");

    let jobs = plan_jobs(dir.path(), Some(&out), false).unwrap();
    let outputs: Vec<PathBuf> = jobs.iter().map(|job| job.output.clone()).collect();
    assert_eq!(
        outputs,
        vec![out.join("a-v3.jsonld"), out.join("b-v3.jsonld")]
    );

    let in_place = plan_jobs(dir.path(), None, true).unwrap();
    assert_eq!(in_place[0].output, dir.path().join("a-v3.jsonld"));
}

#[test]
fn single_file_output_defaults_beside_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dataset.json");
    std::fs::write(&input, "{}").unwrap();

    let jobs = plan_jobs(&input, None, false).unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].output, dir.path().join("dataset-v3.jsonld"));

    let explicit = dir.path().join("custom.jsonld");
    let jobs = plan_jobs(&input, Some(&explicit), false).unwrap();
    assert_eq!(jobs[0].output, explicit);

    assert!(matches!(
        plan_jobs(&input, None, true),
        Err(IngestError::NotADirectory { .. })
    ));
    assert!(matches!(
        plan_jobs(&dir.path().join("missing.json"), None, false),
        Err(IngestError::InputNotFound { .. })
    ));
}

#[test]
fn read_record_reports_parse_errors_by_path() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    std::fs::write(&good, "\u{feff}{\"title\": \"Café\"}").unwrap();
    assert_eq!(read_record(&good).unwrap(), json!({"title": "Café"}));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    let err = read_record(&bad).unwrap_err();
    assert!(matches!(err, IngestError::JsonParse { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn write_document_creates_directories_and_keeps_unicode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/out/doc-v3.jsonld");
    let mut document = Map::new();
    document.insert("dcterms:title".to_string(), Value::String("Données ÉPA".to_string()));

    write_document(&path, &document).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Données ÉPA"));
    assert!(written.ends_with("}\n"));
    assert!(written.contains("\n  \"dcterms:title\""));
}
