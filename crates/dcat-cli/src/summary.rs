use std::cmp::Ordering;
use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use dcat_model::{IssueSeverity, ReasonCode, count_by_reason};

use crate::types::{FileSummary, RunResult};

pub fn print_summary(result: &RunResult) {
    if result.dry_run {
        println!("Dry run: no files written");
    }
    if let Some(path) = &result.warnings_file {
        println!("Warnings: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Kind"),
        header_cell("Warnings"),
        header_cell("Errors"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_warnings = 0usize;
    let mut total_errors = 0usize;
    for file in &result.files {
        let warnings = file.error.is_none().then_some(file.warnings.len());
        let errors = file.conformance.as_ref().map(|report| report.error_count());
        total_warnings += warnings.unwrap_or(0);
        total_errors += errors.unwrap_or(0);
        table.add_row(vec![
            file_cell(file),
            kind_cell(file),
            count_cell(warnings, Color::Yellow),
            count_cell(errors, Color::Red),
            output_cell(file),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.files.len()).add_attribute(Attribute::Bold),
        count_cell(Some(total_warnings), Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(Some(total_errors), Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_reason_table(result);
    print_issue_table(result);

    let failures: Vec<&FileSummary> = result
        .files
        .iter()
        .filter(|file| file.error.is_some())
        .collect();
    if !failures.is_empty() {
        eprintln!("Failed files:");
        for file in failures {
            let message = file.error.as_deref().unwrap_or_default();
            eprintln!("- {}: {message}", file.input.display());
        }
    }
    if !result.strict_blocking.is_empty() {
        eprintln!(
            "Strict mode: conformance errors in {}",
            result.strict_blocking.join(", ")
        );
    }
}

/// Warning counts per reason code across the run.
fn print_reason_table(result: &RunResult) {
    let counts = count_by_reason(&result.all_warnings());
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Reason"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (reason, count) in counts {
        table.add_row(vec![reason_cell(reason), Cell::new(count)]);
    }
    println!();
    println!("{table}");
}

fn print_issue_table(result: &RunResult) {
    let mut issues = Vec::new();
    for file in &result.files {
        let Some(report) = file.conformance.as_ref() else {
            continue;
        };
        for issue in &report.issues {
            issues.push((report.record_id.clone(), issue.clone()));
        }
    }
    if issues.is_empty() {
        return;
    }
    issues.sort_by(|a, b| {
        let severity = severity_rank(b.1.severity).cmp(&severity_rank(a.1.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        let record = a.0.cmp(&b.0);
        if record != Ordering::Equal {
            return record;
        }
        a.1.code.cmp(&b.1.code)
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Path"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for (record, issue) in issues {
        table.add_row(vec![
            Cell::new(record),
            severity_cell(issue.severity),
            Cell::new(issue.code),
            Cell::new(issue.path),
            Cell::new(issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_cell(file: &FileSummary) -> Cell {
    let name = file
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.input.display().to_string());
    if file.error.is_some() {
        Cell::new(name).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold)
    }
}

fn kind_cell(file: &FileSummary) -> Cell {
    match (file.kind, &file.error) {
        (Some(kind), _) => Cell::new(kind.as_str()),
        (None, Some(_)) => Cell::new("FAILED").fg(Color::Red),
        (None, None) => dim_cell("-"),
    }
}

fn output_cell(file: &FileSummary) -> Cell {
    match file.output.as_deref() {
        Some(path) => Cell::new(display_name(path)).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn reason_cell(reason: ReasonCode) -> Cell {
    if reason.is_informational() {
        Cell::new(reason.as_str()).fg(Color::DarkGrey)
    } else {
        Cell::new(reason.as_str()).fg(Color::Yellow)
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Error => 2,
        IssueSeverity::Warning => 1,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
