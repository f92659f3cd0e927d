//! Configuration management and validation.
//!
//! Provides the settings for loading a directory of NASR extracts into an
//! [`AirportRegistry`](crate::AirportRegistry): where the CSV files live, which
//! columns join them, and how much work happens eagerly at load time.

use crate::constants::{AIRPORT_KEY_COLUMN, ICAO_COLUMN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Settings for loading an airport registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory holding the `APT_*.csv` and `ILS_*.csv` extracts
    pub directory: PathBuf,

    /// Column joining every child extract to the airport base extract
    pub key_column: String,

    /// ICAO identifier column in the airport base extract
    pub icao_column: String,

    /// Display a progress bar while tables load
    pub show_progress: bool,

    /// Build the key column index of every table during load
    pub prebuild_indices: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            key_column: AIRPORT_KEY_COLUMN.to_string(),
            icao_column: ICAO_COLUMN.to_string(),
            show_progress: false,
            prebuild_indices: false,
        }
    }
}

impl RegistryConfig {
    /// Configuration for extracts in `directory` with default columns
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Use a different parent key column
    pub fn with_key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = column.into();
        self
    }

    /// Use a different ICAO column
    pub fn with_icao_column(mut self, column: impl Into<String>) -> Self {
        self.icao_column = column.into();
        self
    }

    /// Enable the load progress bar
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Build key indices eagerly during load
    pub fn with_prebuilt_indices(mut self) -> Self {
        self.prebuild_indices = true;
        self
    }

    /// Check the configuration before any file is opened
    ///
    /// # Errors
    /// * `Error::Configuration` for an empty column name or a directory that
    ///   does not exist
    pub fn validate(&self) -> Result<()> {
        if self.key_column.trim().is_empty() {
            return Err(Error::configuration("key column must not be empty"));
        }
        if self.icao_column.trim().is_empty() {
            return Err(Error::configuration("ICAO column must not be empty"));
        }
        if !self.directory.is_dir() {
            return Err(Error::configuration(format!(
                "Extract directory does not exist: {}",
                self.directory.display()
            )));
        }

        debug!("Registry configuration valid: {:?}", self);
        Ok(())
    }
}
