//! Parent/child resolution on a key column
//!
//! A facility is assembled by resolving its key in the parent extract, which
//! must match exactly one row, and then collecting every matching row of each
//! child extract in file order.

use super::row::Row;
use super::table::Table;
use crate::{Error, Result};

/// Resolve the single row whose `key_column` equals `identifier`
///
/// # Errors
/// * `Error::RecordNotFound` when zero or several rows match; the match count
///   is carried so callers can tell a missing key from a duplicated one
/// * Schema errors (`TableNotLoaded`, `ColumnNotFound`) as-is
pub fn lookup_parent<'t>(table: &'t Table, key_column: &str, identifier: &str) -> Result<&'t Row> {
    match table.where_equals(key_column, identifier)? {
        [position] => table.row(*position),
        matches => Err(Error::record_not_found(key_column, identifier, matches.len())),
    }
}

/// Collect every row whose `key_column` equals `identifier`, in file order
pub fn lookup_children<'t>(
    table: &'t Table,
    key_column: &str,
    identifier: &str,
) -> Result<Vec<&'t Row>> {
    let positions = table.where_equals(key_column, identifier)?;
    table.rows_at(positions)
}
