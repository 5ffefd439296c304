use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{error, info, info_span};

use dcat_cli::pipeline::convert_file;
use dcat_ingest::{plan_jobs, write_json};
use dcat_map::{MappingScope, MappingTable};
use dcat_model::{ConversionOptions, RecordKind};
use dcat_transform::Converter;
use dcat_validate::gate_strict;

use crate::cli::{ConvertArgs, PropertiesArgs};
use crate::summary::apply_table_style;
use crate::types::{FileSummary, RunResult};

pub fn run_properties(args: &PropertiesArgs) -> Result<()> {
    let scopes: Vec<MappingScope> = match args.scope {
        Some(scope) => vec![scope],
        None => MappingScope::ALL.to_vec(),
    };
    let mut table = Table::new();
    table.set_header(vec!["Scope", "DCAT-US 1.1", "DCAT-US 3.0", "Rule"]);
    apply_table_style(&mut table);
    for scope in scopes {
        for row in MappingTable::for_scope(scope).iter() {
            table.add_row(vec![
                scope.as_str(),
                row.source,
                row.target,
                row.rule.label(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

/// Builds conversion options: defaults, then the config file, then flags.
pub fn build_options(args: &ConvertArgs) -> Result<ConversionOptions> {
    let mut options = match &args.config {
        Some(path) => ConversionOptions::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ConversionOptions::default(),
    };
    if let Some(name) = &args.default_publisher {
        options = options.with_default_publisher(name.clone());
    }
    if let Some(license) = &args.default_license {
        options = options.with_default_license(license.clone());
    }
    if let Some(base) = &args.dataset_base_iri {
        options = options.with_dataset_base_iri(base.clone());
    }
    options.validate().context("invalid conversion options")?;
    Ok(options)
}

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let started = Instant::now();
    let options = build_options(args)?;
    let converter = Converter::new(options);
    let hint = args.record_type.map(RecordKind::from);
    let jobs = plan_jobs(&args.input, args.output.as_deref(), args.batch)
        .with_context(|| format!("resolve input {}", args.input.display()))?;
    info!(files = jobs.len(), "starting conversion");

    let mut files = Vec::with_capacity(jobs.len());
    for job in &jobs {
        let span = info_span!("file", path = %job.input.display());
        let _guard = span.enter();
        let summary = match convert_file(job, &converter, hint, args.dry_run) {
            Ok(converted) => FileSummary {
                input: job.input.clone(),
                kind: Some(converted.conversion.kind),
                record_id: Some(converted.conversion.record_id),
                output: converted.written,
                warnings: converted.conversion.warnings,
                conformance: Some(converted.conformance),
                error: None,
            },
            Err(err) => {
                error!("{err:#}");
                FileSummary {
                    input: job.input.clone(),
                    kind: None,
                    record_id: None,
                    output: None,
                    warnings: Vec::new(),
                    conformance: None,
                    error: Some(format!("{err:#}")),
                }
            }
        };
        files.push(summary);
    }

    let reports: Vec<_> = files
        .iter()
        .filter_map(|file| file.conformance.clone())
        .collect();
    let gate = gate_strict(args.strict, &reports);

    let mut result = RunResult {
        files,
        warnings_file: None,
        dry_run: args.dry_run,
        strict_blocking: gate.blocking_records,
        has_errors: false,
    };
    result.has_errors = result.failed_files() > 0 || gate.blocked;

    if let Some(path) = &args.warnings_file {
        write_json(path, &result.all_warnings())
            .with_context(|| format!("write warnings file {}", path.display()))?;
        result.warnings_file = Some(path.clone());
    }

    info!(
        files = result.files.len(),
        failed = result.failed_files(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "conversion finished"
    );
    Ok(result)
}
