//! Whole-file table ingestion and row access
//!
//! A table is read completely into memory before any query. The first line is
//! the header; every later line is tokenized with the header width as a size
//! hint and admitted only if its field count matches.

use super::header::Header;
use super::index::ColumnIndex;
use super::row::Row;
use super::stats::IngestStats;
use super::tokenizer::tokenize;
use crate::{Error, Result};
use once_cell::sync::OnceCell;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Header-indexed, write-once collection of rows from one extract
#[derive(Debug)]
pub struct Table {
    name: String,
    header: Option<Arc<Header>>,
    rows: Vec<Row>,

    /// One lazily built index slot per header column
    indices: Vec<OnceCell<ColumnIndex>>,

    stats: IngestStats,
}

impl Table {
    /// Table with no header; every column or row query fails with `TableNotLoaded`
    pub fn invalid(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: None,
            rows: Vec::new(),
            indices: Vec::new(),
            stats: IngestStats::new(),
        }
    }

    /// Ingest already-split lines
    ///
    /// An empty input produces an invalid table. Blank lines and lines whose
    /// field count does not match the header are discarded and counted in
    /// [`IngestStats`].
    ///
    /// # Errors
    /// * Returns `Error::DuplicateColumn` if the header repeats a column name
    pub fn parse_lines<'a, I>(name: impl Into<String>, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let name = name.into();
        let mut lines = lines.into_iter();

        let Some(header_line) = lines.next() else {
            debug!("Table {} has no header line", name);
            return Ok(Self::invalid(name));
        };

        let header = Arc::new(Header::new(tokenize(header_line, None))?);
        let width = header.len();
        let mut rows = Vec::new();
        let mut stats = IngestStats::new();

        for line in lines {
            stats.total_lines += 1;

            // A blank line never carries a record, even under a one-column header
            if line.trim().is_empty() {
                stats.lines_discarded += 1;
                continue;
            }

            let fields = tokenize(line, Some(width));
            match Row::new(&fields, Arc::clone(&header)) {
                Ok(row) => {
                    rows.push(row);
                    stats.rows_admitted += 1;
                }
                Err(_) => stats.lines_discarded += 1,
            }
        }

        if stats.lines_discarded > 0 {
            debug!(
                "Table {}: discarded {} of {} lines (blank or not {} fields wide)",
                name, stats.lines_discarded, stats.total_lines, width
            );
        }

        Ok(Self {
            name,
            indices: (0..width).map(|_| OnceCell::new()).collect(),
            header: Some(header),
            rows,
            stats,
        })
    }

    /// Ingest a complete text buffer (line terminators `\n` or `\r\n`)
    pub fn parse_text(name: impl Into<String>, text: &str) -> Result<Self> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        Self::parse_lines(name, text.lines())
    }

    /// Read and ingest one extract file
    ///
    /// The table is named after the file stem. Invalid UTF-8 is replaced
    /// rather than rejected.
    ///
    /// # Errors
    /// * `Error::FileNotFound` if the path does not exist
    /// * `Error::Io` for any other read failure
    /// * `Error::DuplicateColumn` for a header with repeated names
    pub fn open(path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
            _ => Error::io(format!("Failed to read table {}", path.display()), e),
        })?;

        Self::parse_text(name, &String::from_utf8_lossy(&bytes))
    }

    /// Read one extract file, degrading any failure to an invalid table
    pub fn load(path: &Path) -> Self {
        match Self::open(path) {
            Ok(table) => table,
            Err(e) => {
                warn!("Table {} could not be loaded: {}", path.display(), e);
                let name = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Self::invalid(name)
            }
        }
    }

    /// Whether a header was established
    pub fn is_valid(&self) -> bool {
        self.header.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> Result<&Header> {
        self.header
            .as_deref()
            .ok_or_else(|| Error::table_not_loaded(&self.name))
    }

    /// Number of admitted rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Row at a position
    pub fn row(&self, position: usize) -> Result<&Row> {
        self.rows.get(position).ok_or(Error::RowOutOfRange {
            index: position,
            rows: self.rows.len(),
        })
    }

    /// Rows at the given positions, in input order (duplicates allowed)
    pub fn rows_at(&self, positions: &[usize]) -> Result<Vec<&Row>> {
        positions.iter().map(|&position| self.row(position)).collect()
    }

    /// Materialize one column's raw values in row order
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let position = self.header()?.index_of(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.fields()[position].as_str())
            .collect())
    }

    /// Equality index over one column, built on first use and cached
    ///
    /// The cache is a [`OnceCell`] per column, so concurrent first callers
    /// build at most one published index.
    pub fn index(&self, name: &str) -> Result<&ColumnIndex> {
        let position = self.header()?.index_of(name)?;

        Ok(self.indices[position].get_or_init(|| {
            let index = ColumnIndex::build(
                name,
                self.rows.iter().map(|row| row.fields()[position].as_str()),
            );
            debug!(
                "Built index on {}.{} ({} distinct values over {} rows)",
                self.name,
                name,
                index.distinct_values(),
                self.rows.len()
            );
            index
        }))
    }

    /// Ascending positions of rows whose cleaned `column` value equals cleaned `value`
    pub fn where_equals(&self, column: &str, value: &str) -> Result<&[usize]> {
        Ok(self.index(column)?.positions(value))
    }
}
