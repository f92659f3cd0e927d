//! Command-line argument definitions for the NASR reader
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::RegistryConfig;
use crate::constants::{AIRPORT_KEY_COLUMN, DATE_FORMAT, ICAO_COLUMN, MAX_CYCLE_COUNT};
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the NASR reader
///
/// Loads the FAA's NASR airport and ILS CSV extracts and answers facility,
/// identifier and AIRAC cycle queries against them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nasr-reader",
    version,
    about = "Query FAA NASR airport and ILS CSV extracts",
    long_about = "Reads one cycle of the FAA's NASR CSV distribution (APT_*.csv and ILS_*.csv) \
                  into memory, joins every extract to its facility on the location identifier \
                  and prints facility summaries, identifier lists, schema validation reports \
                  and AIRAC cycle information."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the NASR reader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print everything the extracts record about one facility
    Airport(AirportArgs),
    /// List the location identifiers of the airport base extract
    Identifiers(IdentifiersArgs),
    /// Print the AIRAC cycle containing a date
    Cycle(CycleArgs),
    /// Check every extract against its column mapping
    Validate(ValidateArgs),
}

/// Extract directory and join columns shared by the registry commands
#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Directory holding the NASR CSV extracts
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PATH",
        default_value = ".",
        help = "Directory holding APT_*.csv and ILS_*.csv"
    )]
    pub directory: PathBuf,

    /// Column joining child extracts to the airport base extract
    #[arg(
        long = "key-column",
        value_name = "COLUMN",
        default_value = AIRPORT_KEY_COLUMN,
        help = "Parent key column"
    )]
    pub key_column: String,

    /// ICAO identifier column of the airport base extract
    #[arg(
        long = "icao-column",
        value_name = "COLUMN",
        default_value = ICAO_COLUMN,
        help = "ICAO identifier column"
    )]
    pub icao_column: String,
}

/// Verbosity and format flags shared by every command
#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides progress bars.
    #[arg(short = 'q', long = "quiet", help = "Suppress all output except errors")]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the airport command
#[derive(Debug, Clone, Parser)]
pub struct AirportArgs {
    /// Location identifier (e.g. `OKC`), or ICAO identifier with `--icao`
    #[arg(value_name = "ID")]
    pub identifier: String,

    /// Resolve the identifier against the ICAO column first
    #[arg(long = "icao", help = "Treat ID as an ICAO identifier (e.g. KOKC)")]
    pub icao: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the identifiers command
#[derive(Debug, Clone, Parser)]
pub struct IdentifiersArgs {
    /// Print at most this many identifiers
    #[arg(short = 'n', long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the cycle command
#[derive(Debug, Clone, Parser)]
pub struct CycleArgs {
    /// Date to look up as `yyyy-mm-dd` or `yyyy/mm/dd`; today when omitted
    #[arg(value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Number of consecutive cycles to print
    #[arg(
        short = 'c',
        long = "count",
        value_name = "COUNT",
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_CYCLE_COUNT),
        help = "Number of consecutive cycles to print (1-130)"
    )]
    pub count: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Cell issues listed per table before the rest are only counted
    #[arg(
        long = "max-issues",
        value_name = "COUNT",
        default_value_t = 10,
        help = "Maximum cell issues listed per table"
    )]
    pub max_issues: usize,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Parse a date in ISO (`2023-01-26`) or NASR (`2023/01/26`) form
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, DATE_FORMAT))
        .map_err(|_| {
            Error::configuration(format!(
                "Invalid date '{}': expected yyyy-mm-dd or yyyy/mm/dd",
                text
            ))
        })
}

impl SourceArgs {
    /// Registry configuration for these arguments
    pub fn to_config(&self, show_progress: bool) -> RegistryConfig {
        let config = RegistryConfig::new(self.directory.clone())
            .with_key_column(self.key_column.clone())
            .with_icao_column(self.icao_column.clone());

        if show_progress {
            config.with_progress()
        } else {
            config
        }
    }
}

impl OutputArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode or JSON output)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl Commands {
    /// Verbosity and format flags of whichever command was chosen
    pub fn output(&self) -> &OutputArgs {
        match self {
            Commands::Airport(args) => &args.output,
            Commands::Identifiers(args) => &args.output,
            Commands::Cycle(args) => &args.output,
            Commands::Validate(args) => &args.output,
        }
    }
}
