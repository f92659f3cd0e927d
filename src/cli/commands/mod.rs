//! Command implementations for the NASR reader CLI
//!
//! Each command is implemented in its own module; shared logging, registry
//! loading and printing helpers live in [`shared`].

pub mod airport;
pub mod cycle;
pub mod identifiers;
pub mod shared;
pub mod validate;

use crate::cli::args::Commands;
use anyhow::Result;

/// Main command runner for the NASR reader
///
/// This function dispatches to the appropriate subcommand handler:
/// - `airport`: Facility summary from all extracts
/// - `identifiers`: Location identifiers of the base extract
/// - `cycle`: AIRAC cycle lookup
/// - `validate`: Column mapping validation of every extract
pub fn run(command: Commands) -> Result<()> {
    shared::setup_logging(command.output());

    match command {
        Commands::Airport(args) => airport::run_airport(args),
        Commands::Identifiers(args) => identifiers::run_identifiers(args),
        Commands::Cycle(args) => cycle::run_cycle(args),
        Commands::Validate(args) => validate::run_validate(args),
    }
}
