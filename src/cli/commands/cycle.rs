//! Cycle command implementation
//!
//! Maps a date onto its 28-day AIRAC cycle and optionally lists the cycles
//! that follow it.

use super::shared::print_json;
use crate::app::models::AiracCycle;
use crate::cli::args::{CycleArgs, OutputFormat};
use anyhow::{Context, Result};
use chrono::Local;
use colored::*;

/// Cycle command runner
pub fn run_cycle(args: CycleArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let cycles = consecutive_cycles(AiracCycle::containing(date), args.count)
        .with_context(|| format!("Cannot list {} cycles from {}", args.count, date))?;

    match args.output.output_format {
        OutputFormat::Json => print_json(&cycles)?,
        OutputFormat::Human => {
            for (position, cycle) in cycles.iter().enumerate() {
                let identifier = format!("{:04}", cycle.identifier);
                let identifier = if position == 0 {
                    identifier.bright_yellow().bold()
                } else {
                    identifier.normal()
                };
                println!(
                    "{}  effective {}  through {}",
                    identifier,
                    cycle.effective,
                    cycle.last_day()
                );
            }
        }
    }

    Ok(())
}

/// `count` cycles starting with `first`; always includes `first`
pub fn consecutive_cycles(first: AiracCycle, count: usize) -> crate::Result<Vec<AiracCycle>> {
    let mut cycles = Vec::with_capacity(count.max(1));
    let mut cycle = first;
    cycles.push(cycle);

    while cycles.len() < count {
        cycle = cycle.next()?;
        cycles.push(cycle);
    }

    Ok(cycles)
}
