//! Shared components for CLI commands
//!
//! This module contains the logging setup, registry loading and report
//! printing used across the command implementations.

use crate::app::services::airport_registry::{AirportRegistry, LoadStats};
use crate::cli::args::{OutputArgs, SourceArgs};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::{debug, warn};

/// Set up structured logging for a command
///
/// `RUST_LOG` overrides the level derived from the verbosity flags. Logging
/// always goes to stderr so command output on stdout stays parseable.
pub fn setup_logging(output: &OutputArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = output.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nasr_reader={}", log_level)));

    let result = if output.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    match result {
        Ok(()) => debug!("Logging initialized at level: {}", log_level),
        Err(e) => debug!("Logging already initialized: {}", e),
    }
}

/// Load the registry for a command and report load problems as warnings
pub fn load_registry(source: &SourceArgs, output: &OutputArgs) -> Result<(AirportRegistry, LoadStats)> {
    let config = source.to_config(output.show_progress());

    let (registry, stats) = AirportRegistry::load(&config).with_context(|| {
        format!(
            "Failed to load NASR extracts from {}",
            source.directory.display()
        )
    })?;

    for error in &stats.errors {
        warn!("{}", error);
    }
    debug!("{}", stats.summary());

    Ok((registry, stats))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

/// Print a section heading for human-readable output
pub fn print_heading(title: &str) {
    println!("\n{}", title.bright_green().bold());
}

/// Print one labelled value, skipping empty values
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    let value = value.to_string();
    if !value.is_empty() {
        println!("  {:<22} {}", format!("{}:", label).bright_white(), value);
    }
}
