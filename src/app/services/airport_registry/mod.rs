//! Airport registry service for facility-level joins
//!
//! This module loads the airport and ILS extracts of one NASR cycle from a
//! directory and assembles everything known about a facility by joining each
//! child extract to the airport base extract on the location identifier.
//!
//! ## Architecture
//!
//! - [`tables`] - The extract catalog and its file names
//! - [`loader`] - Directory loading with progress and statistics
//! - [`query`] - Facility assembly and identifier listing
//! - [`metadata`] - Load statistics

use crate::Result;
use crate::app::entries::{
    AirportBaseEntry, AirportRecord, ArrestingEntry, AttendanceEntry, ContactEntry, DmeEntry,
    GlideslopeEntry, IlsBaseEntry, IlsRecord, IlsRemarksEntry, MarkerEntry, RemarksEntry,
    RunwayEndEntry, RunwayEntry,
};
use crate::app::services::csv_table::Table;
use std::path::PathBuf;

pub mod loader;
pub mod metadata;
pub mod query;
pub mod tables;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::LoadStats;
pub use tables::TableKind;

/// In-memory view over one directory of NASR extracts
///
/// Tables are written once by [`AirportRegistry::load`] and only read
/// afterwards, so a loaded registry can be shared between threads.
#[derive(Debug)]
pub struct AirportRegistry {
    /// One table per [`TableKind`], in [`TableKind::ALL`] order
    pub(crate) tables: Vec<Table>,

    /// Directory the extracts were read from
    pub(crate) directory: PathBuf,

    pub(crate) key_column: String,
    pub(crate) icao_column: String,
}

impl AirportRegistry {
    /// Assemble a registry from already loaded tables
    ///
    /// `tables` must hold one table per [`TableKind`] in [`TableKind::ALL`]
    /// order; missing trailing slots are filled with invalid tables.
    pub fn from_tables(
        mut tables: Vec<Table>,
        directory: PathBuf,
        key_column: impl Into<String>,
        icao_column: impl Into<String>,
    ) -> Self {
        tables.truncate(TableKind::ALL.len());
        for kind in &TableKind::ALL[tables.len()..] {
            tables.push(Table::invalid(kind.table_name()));
        }

        Self {
            tables,
            directory,
            key_column: key_column.into(),
            icao_column: icao_column.into(),
        }
    }

    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn icao_column(&self) -> &str {
        &self.icao_column
    }

    /// Table loaded for one extract (possibly invalid)
    pub fn table(&self, kind: TableKind) -> &Table {
        &self.tables[kind.position()]
    }
}

/// Everything the extracts record about one facility
///
/// Child collections keep file order and are empty when the facility has no
/// rows in that extract or the extract could not be loaded.
#[derive(Debug, Clone)]
pub struct Airport {
    pub base: AirportBaseEntry,
    pub arresting_gear: Vec<ArrestingEntry>,
    pub attendance: Vec<AttendanceEntry>,
    pub contacts: Vec<ContactEntry>,
    pub remarks: Vec<RemarksEntry>,
    pub runways: Vec<RunwayEntry>,
    pub runway_ends: Vec<RunwayEndEntry>,
    pub ils: Vec<IlsBaseEntry>,
    pub glideslopes: Vec<GlideslopeEntry>,
    pub dmes: Vec<DmeEntry>,
    pub markers: Vec<MarkerEntry>,
    pub ils_remarks: Vec<IlsRemarksEntry>,
}

impl Airport {
    /// Location identifier the facility was joined on
    pub fn identifier(&self) -> Result<&str> {
        self.base.location_identifier()
    }

    /// Runway ends belonging to one runway, e.g. `09/27`
    pub fn ends_of_runway(&self, runway_id: &str) -> Result<Vec<&RunwayEndEntry>> {
        let mut ends = Vec::new();
        for end in &self.runway_ends {
            if end.runway_id()? == runway_id {
                ends.push(end);
            }
        }
        Ok(ends)
    }

    /// ILS systems serving one runway end, e.g. `09`
    pub fn ils_for_runway_end(&self, end_id: &str) -> Result<Vec<&IlsBaseEntry>> {
        let mut systems = Vec::new();
        for system in &self.ils {
            if system.runway_end()? == end_id {
                systems.push(system);
            }
        }
        Ok(systems)
    }
}
