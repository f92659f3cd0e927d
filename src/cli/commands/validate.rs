//! Validate command implementation
//!
//! Checks every extract against the column mapping of its entry type: which
//! mapped columns are missing from the header, and which cells are
//! required-but-empty, unparsable or carry an unrecognized code.

use super::shared::{load_registry, print_heading, print_json};
use crate::app::services::airport_registry::{AirportRegistry, TableKind};
use crate::app::services::csv_table::Table;
use crate::app::services::field_decoding::{FieldIssue, FieldSpec, inspect_row, missing_columns};
use crate::cli::args::{OutputFormat, ValidateArgs};
use anyhow::{Result, bail};
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

/// Validation outcome for one extract
#[derive(Debug, Clone, Serialize)]
pub struct TableValidation {
    pub table: TableKind,
    pub loaded: bool,
    pub rows: usize,
    pub lines_discarded: usize,
    pub missing_columns: Vec<&'static str>,
    pub issue_count: usize,

    /// First issues found, keyed by 1-based data row number
    pub issues: Vec<(usize, FieldIssue)>,
}

impl TableValidation {
    /// Whether the extract loaded with every mapped column and clean cells
    pub fn is_clean(&self) -> bool {
        self.loaded && self.missing_columns.is_empty() && self.issue_count == 0
    }
}

/// Validate one extract, listing at most `max_issues` cell issues
pub fn validate_table(kind: TableKind, table: &Table, max_issues: usize) -> crate::Result<TableValidation> {
    let mut validation = TableValidation {
        table: kind,
        loaded: table.is_valid(),
        rows: table.len(),
        lines_discarded: table.stats().lines_discarded,
        missing_columns: Vec::new(),
        issue_count: 0,
        issues: Vec::new(),
    };

    if !table.is_valid() {
        return Ok(validation);
    }

    let header = table.header()?;
    let fields = kind.fields();
    validation.missing_columns = missing_columns(header, &fields);

    let present: Vec<FieldSpec> = fields
        .into_iter()
        .filter(|spec| header.contains(spec.column))
        .collect();

    for (position, row) in table.rows().iter().enumerate() {
        for issue in inspect_row(row, &present)? {
            validation.issue_count += 1;
            if validation.issues.len() < max_issues {
                validation.issues.push((position + 1, issue));
            }
        }
    }

    debug!(
        "Validated {}: {} missing columns, {} cell issues",
        kind,
        validation.missing_columns.len(),
        validation.issue_count
    );

    Ok(validation)
}

/// Validate every extract of a registry
pub fn validate_registry(registry: &AirportRegistry, max_issues: usize) -> crate::Result<Vec<TableValidation>> {
    TableKind::ALL
        .into_iter()
        .map(|kind| validate_table(kind, registry.table(kind), max_issues))
        .collect()
}

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> Result<()> {
    let (registry, _stats) = load_registry(&args.source, &args.output)?;

    info!("Validating extracts in {}", args.source.directory.display());
    let validations = validate_registry(&registry, args.max_issues)?;

    match args.output.output_format {
        OutputFormat::Json => print_json(&validations)?,
        OutputFormat::Human => print_human(&validations),
    }

    let failing = validations.iter().filter(|v| !v.is_clean()).count();
    if failing > 0 {
        bail!("{} of {} extracts failed validation", failing, validations.len());
    }

    Ok(())
}

fn print_human(validations: &[TableValidation]) {
    print_heading("Extract validation");

    for validation in validations {
        let status = if !validation.loaded {
            "NOT LOADED".bright_red().bold()
        } else if validation.is_clean() {
            "OK".bright_green().bold()
        } else {
            "ISSUES".bright_yellow().bold()
        };

        println!(
            "  {:<12} {:<10} {} rows, {} discarded, {} cell issues",
            validation.table.to_string().bright_white(),
            status,
            validation.rows,
            validation.lines_discarded,
            validation.issue_count
        );

        if !validation.missing_columns.is_empty() {
            println!(
                "      missing columns: {}",
                validation.missing_columns.join(", ")
            );
        }
        for (row, issue) in &validation.issues {
            println!("      row {}: {}", row, issue);
        }
        if validation.issue_count > validation.issues.len() {
            println!(
                "      ... and {} more",
                validation.issue_count - validation.issues.len()
            );
        }
    }
}
