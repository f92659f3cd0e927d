//! Identifiers command implementation

use super::shared::{load_registry, print_json};
use crate::cli::args::{IdentifiersArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;

/// Identifiers command runner
///
/// Prints the location identifiers of the airport base extract in file order.
pub fn run_identifiers(args: IdentifiersArgs) -> Result<()> {
    let (registry, _stats) = load_registry(&args.source, &args.output)?;

    let identifiers = registry
        .airport_identifiers()
        .context("Failed to read airport identifiers")?;
    let total = identifiers.len();
    let shown = &identifiers[..args.limit.unwrap_or(total).min(total)];

    match args.output.output_format {
        OutputFormat::Json => print_json(shown)?,
        OutputFormat::Human => {
            for identifier in shown {
                println!("{}", identifier);
            }
            if !args.output.quiet && shown.len() < total {
                eprintln!(
                    "{}",
                    format!("... {} of {} identifiers shown", shown.len(), total).bright_black()
                );
            }
        }
    }

    Ok(())
}
