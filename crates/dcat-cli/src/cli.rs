//! CLI argument definitions for dcat-convert.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use dcat_cli::logging::LogFormat;
use dcat_map::MappingScope;
use dcat_model::RecordKind;

#[derive(Parser)]
#[command(
    name = "dcat-convert",
    version,
    about = "Convert DCAT-US 1.1 JSON metadata to DCAT-US 3.0 JSON-LD",
    long_about = "Convert DCAT-US 1.1 catalog, dataset and distribution records to \
                  DCAT-US 3.0 JSON-LD.\n\n\
                  Fields without a 3.0 counterpart, malformed dates and injected \
                  defaults are reported as warnings; every produced document is \
                  self-checked for conformance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a file, or every JSON file in a directory.
    Convert(ConvertArgs),

    /// Print the property mapping table.
    Properties(PropertiesArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// DCAT-US 1.1 JSON file or directory of JSON files.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (single input) or directory (batch).
    ///
    /// Defaults to `<stem>-v3.jsonld` next to the input, or the input
    /// directory in batch mode.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Treat INPUT as a directory and convert every `*.json` file in it.
    #[arg(long = "batch")]
    pub batch: bool,

    /// Force the record type instead of detecting it.
    #[arg(long = "record-type", value_enum, value_name = "KIND")]
    pub record_type: Option<RecordTypeArg>,

    /// TOML file with conversion options.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the publisher injected when a record has none.
    #[arg(long = "default-publisher", value_name = "NAME")]
    pub default_publisher: Option<String>,

    /// License IRI injected into distributions without one.
    #[arg(long = "default-license", value_name = "IRI")]
    pub default_license: Option<String>,

    /// Base IRI for dataset `@id`s built from non-IRI identifiers.
    #[arg(long = "dataset-base-iri", value_name = "IRI")]
    pub dataset_base_iri: Option<String>,

    /// Write all conversion warnings to this JSON file.
    #[arg(long = "warnings-file", value_name = "PATH")]
    pub warnings_file: Option<PathBuf>,

    /// Convert and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with an error when any produced document fails the conformance
    /// self-check.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct PropertiesArgs {
    /// Only show one table (catalog, dataset, distribution, organization,
    /// contactPoint).
    #[arg(long = "scope", value_name = "SCOPE", value_parser = parse_scope)]
    pub scope: Option<MappingScope>,
}

fn parse_scope(value: &str) -> Result<MappingScope, String> {
    MappingScope::parse(value).ok_or_else(|| format!("unknown mapping scope: {value}"))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordTypeArg {
    Catalog,
    Dataset,
    Distribution,
}

impl From<RecordTypeArg> for RecordKind {
    fn from(arg: RecordTypeArg) -> Self {
        match arg {
            RecordTypeArg::Catalog => RecordKind::Catalog,
            RecordTypeArg::Dataset => RecordKind::Dataset,
            RecordTypeArg::Distribution => RecordKind::Distribution,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
