//! Facility lookup and assembly
//!
//! A facility is resolved in the airport base extract, which must hold exactly
//! one row for it, and then every child extract contributes its matching rows
//! in file order.

use super::tables::TableKind;
use super::{Airport, AirportRegistry};
use crate::Result;
use crate::app::entries::{AirportBaseEntry, Entry};
use crate::app::services::csv_table::{IngestStats, lookup_children, lookup_parent};
use tracing::debug;

impl AirportRegistry {
    /// Whether every extract was loaded with a header
    pub fn is_initialized(&self) -> bool {
        self.tables.iter().all(|table| table.is_valid())
    }

    /// Extracts that could not be established
    pub fn invalid_tables(&self) -> Vec<TableKind> {
        TableKind::ALL
            .into_iter()
            .filter(|kind| !self.table(*kind).is_valid())
            .collect()
    }

    /// Ingestion statistics of every extract, in load order
    pub fn table_stats(&self) -> Vec<(TableKind, &IngestStats)> {
        TableKind::ALL
            .into_iter()
            .map(|kind| (kind, self.table(kind).stats()))
            .collect()
    }

    /// Location identifiers of the airport base extract, in file order
    ///
    /// # Errors
    /// * `Error::TableNotLoaded` if the base extract is invalid
    /// * `Error::ColumnNotFound` if it has no key column
    pub fn airport_identifiers(&self) -> Result<Vec<&str>> {
        self.table(TableKind::AptBase).column(&self.key_column)
    }

    /// Assemble one facility by location identifier
    ///
    /// # Examples
    /// ```no_run
    /// # use nasr_reader::{AirportRegistry, RegistryConfig};
    /// let (registry, _stats) = AirportRegistry::load(&RegistryConfig::new("data/nasr"))?;
    /// let airport = registry.get_airport("OKC")?;
    /// println!("{} runways", airport.runways.len());
    /// # Ok::<(), nasr_reader::Error>(())
    /// ```
    ///
    /// # Errors
    /// * `Error::RecordNotFound` unless exactly one base row matches
    /// * `Error::TableNotLoaded` if the base extract is invalid
    /// * `Error::ColumnNotFound` if a loaded extract lacks the key column
    pub fn get_airport(&self, identifier: &str) -> Result<Airport> {
        let base = lookup_parent(self.table(TableKind::AptBase), &self.key_column, identifier)?;

        Ok(Airport {
            base: AirportBaseEntry::from_row(base.clone()),
            arresting_gear: self.children(identifier)?,
            attendance: self.children(identifier)?,
            contacts: self.children(identifier)?,
            remarks: self.children(identifier)?,
            runways: self.children(identifier)?,
            runway_ends: self.children(identifier)?,
            ils: self.children(identifier)?,
            glideslopes: self.children(identifier)?,
            dmes: self.children(identifier)?,
            markers: self.children(identifier)?,
            ils_remarks: self.children(identifier)?,
        })
    }

    /// Assemble one facility by ICAO identifier, falling back to the location identifier
    ///
    /// When exactly one base row carries `identifier` in the ICAO column, the
    /// facility is assembled from that row's location identifier. Otherwise
    /// `identifier` is looked up as a location identifier.
    pub fn get_airport_by_icao(&self, identifier: &str) -> Result<Airport> {
        let base_table = self.table(TableKind::AptBase);

        if let [position] = base_table.where_equals(&self.icao_column, identifier)? {
            let location = base_table.row(*position)?.raw(self.key_column.as_str())?;
            debug!("ICAO {} resolves to {}", identifier, location);
            return self.get_airport(location);
        }

        self.get_airport(identifier)
    }

    /// Matching rows of one child extract as entries; empty if the extract is invalid
    fn children<E: Entry>(&self, identifier: &str) -> Result<Vec<E>> {
        let table = self.table(E::KIND);
        if !table.is_valid() {
            debug!("Skipping {} for {}: table not loaded", E::KIND, identifier);
            return Ok(Vec::new());
        }

        Ok(lookup_children(table, &self.key_column, identifier)?
            .into_iter()
            .cloned()
            .map(E::from_row)
            .collect())
    }
}
