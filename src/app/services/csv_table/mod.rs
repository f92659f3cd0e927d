//! In-memory CSV tables for NASR extracts
//!
//! This module turns one extract file into a header-indexed, row-addressable
//! table. Every row is validated against the header width at ingestion time;
//! malformed trailer lines are dropped rather than failing the table.
//!
//! ## Architecture
//!
//! The table is organized into logical components:
//! - [`tokenizer`] - Quote-aware splitting of one record line into raw fields
//! - [`header`] - Ordered column names with a name-to-position map
//! - [`row`] - One cleaned record bound to its shared header, with typed decoding
//! - [`table`] - Whole-file ingestion, column projection and row access
//! - [`index`] - Cached equality indices over one column
//! - [`join`] - Parent/child record resolution on a key column
//! - [`stats`] - Ingestion statistics
//!
//! ## Usage
//!
//! ```rust
//! use nasr_reader::app::services::csv_table::{Table, lookup_children};
//!
//! # fn example() -> nasr_reader::Result<()> {
//! let table = Table::parse_text("APT_RWY", "ARPT_ID,RWY_ID\nABC,09/27\nABC,18/36\nXYZ,01/19")?;
//! let runways = lookup_children(&table, "ARPT_ID", "ABC")?;
//! assert_eq!(runways.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod index;
pub mod join;
pub mod row;
pub mod stats;
pub mod table;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::Header;
pub use index::ColumnIndex;
pub use join::{lookup_children, lookup_parent};
pub use row::{ColumnKey, Row};
pub use stats::IngestStats;
pub use table::Table;
pub use tokenizer::{clean_field, tokenize};
