//! Ingestion statistics for one table file

/// Counts collected while reading an extract
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct IngestStats {
    /// Data lines seen after the header
    pub total_lines: usize,

    /// Lines admitted as rows
    pub rows_admitted: usize,

    /// Lines dropped for a field count that did not match the header
    pub lines_discarded: usize,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of data lines admitted, as a percentage
    pub fn admission_rate(&self) -> f64 {
        if self.total_lines == 0 {
            100.0
        } else {
            (self.rows_admitted as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// True when no line was discarded
    pub fn is_clean(&self) -> bool {
        self.lines_discarded == 0
    }
}
