//! Airport registry load statistics
//!
//! Tracks how many extracts were established, how many rows they admitted and
//! which files could not be read.

use serde::Serialize;
use std::time::Duration;

/// Statistics about loading one extract directory
#[derive(Debug, Clone, Serialize)]
pub struct LoadStats {
    /// Extracts with an established header
    pub tables_loaded: usize,

    /// Extracts that were missing, unreadable, empty or had a bad header
    pub tables_invalid: usize,

    /// Rows admitted across every loaded extract
    pub rows_admitted: usize,

    /// Lines discarded for a field count that did not match the header
    pub lines_discarded: usize,

    /// Key column indices built during load
    pub indices_built: usize,

    /// Time taken to load the registry
    pub load_duration: Duration,

    /// Any errors encountered during loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            tables_loaded: 0,
            tables_invalid: 0,
            rows_admitted: 0,
            lines_discarded: 0,
            indices_built: 0,
            load_duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Calculate the loading rate in rows per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.rows_admitted as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Percentage of data lines that were discarded
    pub fn discard_rate(&self) -> f64 {
        let total = self.rows_admitted + self.lines_discarded;
        if total == 0 {
            0.0
        } else {
            (self.lines_discarded as f64 / total as f64) * 100.0
        }
    }

    /// Check if any errors occurred during loading
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading statistics
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} tables ({} invalid): {} rows, {} lines discarded ({:.1}%) in {:.2}s",
            self.tables_loaded,
            self.tables_invalid,
            self.rows_admitted,
            self.lines_discarded,
            self.discard_rate(),
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
