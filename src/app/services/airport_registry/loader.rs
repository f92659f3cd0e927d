//! Airport registry loading
//!
//! Reads every extract of [`TableKind::ALL`] from one directory. A file that is
//! missing or unreadable does not abort the load: it becomes an invalid table
//! and is recorded in [`LoadStats::errors`].

use super::AirportRegistry;
use super::metadata::LoadStats;
use super::tables::TableKind;
use crate::Result;
use crate::app::services::csv_table::Table;
use crate::config::RegistryConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{debug, info, warn};

impl AirportRegistry {
    /// Load every extract in the configured directory
    ///
    /// # Arguments
    /// * `config` - Directory, join columns and load options
    ///
    /// # Returns
    /// * `Result<(AirportRegistry, LoadStats)>` - Registry and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::Configuration` if the configuration does not validate
    pub fn load(config: &RegistryConfig) -> Result<(Self, LoadStats)> {
        config.validate()?;

        info!(
            "Loading airport registry from {}",
            config.directory.display()
        );

        let start_time = Instant::now();
        let mut stats = LoadStats::new();
        let mut tables = Vec::with_capacity(TableKind::ALL.len());

        let progress_bar = if config.show_progress {
            let pb = ProgressBar::new(TableKind::ALL.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        for (position, kind) in TableKind::ALL.iter().enumerate() {
            if let Some(pb) = &progress_bar {
                pb.set_position(position as u64);
                pb.set_message(format!("Loading {}", kind.file_name()));
            }

            let path = config.directory.join(kind.file_name());
            let table = match Table::open(&path) {
                Ok(table) if table.is_valid() => {
                    stats.tables_loaded += 1;
                    stats.rows_admitted += table.stats().rows_admitted;
                    stats.lines_discarded += table.stats().lines_discarded;
                    debug!(
                        "Loaded {}: {} rows, {} lines discarded",
                        kind,
                        table.len(),
                        table.stats().lines_discarded
                    );
                    table
                }
                Ok(table) => {
                    warn!("Table {} has no header line", path.display());
                    stats.tables_invalid += 1;
                    stats.errors.push(format!("{}: no header line", kind.file_name()));
                    table
                }
                Err(e) => {
                    warn!("Failed to load table {}: {}", path.display(), e);
                    stats.tables_invalid += 1;
                    stats.errors.push(format!("{}: {}", kind.file_name(), e));
                    Table::invalid(kind.table_name())
                }
            };

            if config.prebuild_indices && table.is_valid() {
                match table.index(&config.key_column) {
                    Ok(_) => stats.indices_built += 1,
                    Err(e) => {
                        warn!("Cannot index {} on {}: {}", kind, config.key_column, e);
                        stats.errors.push(format!("{}: {}", kind.file_name(), e));
                    }
                }
            }

            tables.push(table);
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message("Airport registry loading complete");
        }

        let registry = Self::from_tables(
            tables,
            config.directory.clone(),
            config.key_column.clone(),
            config.icao_column.clone(),
        );

        stats.load_duration = start_time.elapsed();

        info!(
            "Airport registry loaded from {}: {} tables, {} rows in {:.2}s",
            config.directory.display(),
            stats.tables_loaded,
            stats.rows_admitted,
            stats.load_duration.as_secs_f64()
        );

        Ok((registry, stats))
    }
}
