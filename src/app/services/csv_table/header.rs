//! Column header shared by every row of one table

use super::tokenizer::clean_field;
use crate::{Error, Result};
use std::collections::HashMap;

/// Ordered, unique column names with O(1) name lookup
///
/// Built once from the first line of an extract and then shared read-only
/// by every [`Row`](super::Row) of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Cleaned column names in file order
    names: Vec<String>,

    /// Column name to position
    lookup: HashMap<String, usize>,
}

impl Header {
    /// Build a header from raw (uncleaned) column names
    ///
    /// # Errors
    /// * Returns `Error::DuplicateColumn` if two names are equal after cleaning
    pub fn new<I, S>(raw_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = raw_names
            .into_iter()
            .map(|name| clean_field(name.as_ref()).to_string())
            .collect();

        let mut lookup = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if let Some(first) = lookup.insert(name.clone(), position) {
                return Err(Error::DuplicateColumn {
                    column: name.clone(),
                    first,
                    second: position,
                });
            }
        }

        Ok(Self { names, lookup })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the header has no columns
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a column by exact (case-sensitive) name
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| Error::column_not_found(name))
    }

    /// Check if a column exists
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Column name at a position
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All column names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
