//! Equality index over one column

use super::tokenizer::clean_field;
use std::collections::HashMap;

/// Mapping from a cleaned cell value to every row position holding it
///
/// Positions are kept in ascending (file) order. Built once per column and
/// cached by the owning [`Table`](super::Table).
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    column: String,
    positions: HashMap<String, Vec<usize>>,
}

impl ColumnIndex {
    /// Build an index from the column's values in row order
    pub fn build<'a, I>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
        for (row, value) in values.into_iter().enumerate() {
            positions.entry(value.to_string()).or_default().push(row);
        }

        Self {
            column: column.into(),
            positions,
        }
    }

    /// Indexed column name
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Row positions whose value equals `value` (after cleaning), in file order
    pub fn positions(&self, value: &str) -> &[usize] {
        self.positions
            .get(clean_field(value))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, value: &str) -> bool {
        self.positions.contains_key(clean_field(value))
    }

    /// Number of distinct values
    pub fn distinct_values(&self) -> usize {
        self.positions.len()
    }

    /// Distinct values in unspecified order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }
}
