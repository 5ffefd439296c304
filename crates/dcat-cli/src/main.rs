//! DCAT-US converter CLI.

use clap::{ColorChoice, Parser};
use dcat_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_convert, run_properties};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Convert(args) => match run_convert(args) {
            Ok(result) => {
                print_summary(&result);
                if result.has_errors { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Properties(args) => match run_properties(args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Logging configuration from the global flags.
///
/// `--log-level` beats `-v`/`-q`, and either one disables the `RUST_LOG`
/// override.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from),
        use_env_filter: !explicit,
        with_ansi: ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
