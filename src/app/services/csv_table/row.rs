//! One cleaned record bound to its table header
//!
//! A [`Row`] owns its cleaned fields and shares the table's [`Header`], so it
//! stays usable after being cloned out of the table. Columns are addressed by
//! name or position through [`ColumnKey`], and every decoding operation
//! reports schema faults (unknown column) as errors distinct from data faults.

use super::header::Header;
use super::tokenizer::clean_field;
use crate::app::services::field_decoding::{Decodable, Enumerated, Enumeration, LookupTable};
use crate::constants::REPEATED_VALUE_SEPARATOR;
use crate::{Error, Result};
use std::sync::Arc;

/// Column addressing for row access: by position or by header name
pub trait ColumnKey {
    /// Resolve to a field position within `header`
    fn resolve(&self, header: &Header) -> Result<usize>;
}

impl ColumnKey for usize {
    fn resolve(&self, header: &Header) -> Result<usize> {
        if *self < header.len() {
            Ok(*self)
        } else {
            Err(Error::ColumnOutOfRange {
                index: *self,
                width: header.len(),
            })
        }
    }
}

impl ColumnKey for &str {
    fn resolve(&self, header: &Header) -> Result<usize> {
        header.index_of(self)
    }
}

impl ColumnKey for &String {
    fn resolve(&self, header: &Header) -> Result<usize> {
        header.index_of(self)
    }
}

/// One data record with fields cleaned of quotes and surrounding whitespace
#[derive(Debug, Clone)]
pub struct Row {
    fields: Arc<[String]>,
    header: Arc<Header>,
}

impl Row {
    /// Build a row from raw tokenized fields
    ///
    /// # Errors
    /// * Returns `Error::RowShape` if the field count differs from the header width
    pub fn new<S: AsRef<str>>(raw_fields: &[S], header: Arc<Header>) -> Result<Self> {
        if raw_fields.len() != header.len() {
            return Err(Error::RowShape {
                expected: header.len(),
                found: raw_fields.len(),
            });
        }

        let fields: Arc<[String]> = raw_fields
            .iter()
            .map(|raw| clean_field(raw.as_ref()).to_string())
            .collect();

        Ok(Self { fields, header })
    }

    /// Header shared with the owning table
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Number of fields (always equal to the header width)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Cleaned fields in column order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Cleaned text of one cell
    pub fn raw<K: ColumnKey>(&self, key: K) -> Result<&str> {
        let position = key.resolve(&self.header)?;
        Ok(self.fields[position].as_str())
    }

    /// Decode a required cell
    ///
    /// # Errors
    /// * `Error::ColumnNotFound` / `Error::ColumnOutOfRange` for an unknown column
    /// * `Error::Decode` if the cell is empty or does not parse as `T`
    pub fn decode<T: Decodable, K: ColumnKey>(&self, key: K) -> Result<T> {
        let position = key.resolve(&self.header)?;
        let text = self.fields[position].as_str();

        T::decode(text).ok_or_else(|| Error::decode(self.column_name(position), text, T::KIND))
    }

    /// Decode an optional cell
    ///
    /// Empty and unparsable cells both decode to `None`. An unknown column is
    /// still an error.
    pub fn decode_optional<T: Decodable, K: ColumnKey>(&self, key: K) -> Result<Option<T>> {
        let position = key.resolve(&self.header)?;
        let text = self.fields[position].as_str();

        if text.is_empty() {
            return Ok(None);
        }
        Ok(T::decode(text))
    }

    /// Decode a coded cell against the enumeration's own code table
    pub fn decode_enumerated<E: Enumeration, K: ColumnKey>(&self, key: K) -> Result<Enumerated<E>> {
        self.decode_enumerated_with(key, &E::TABLE, E::UNKNOWN)
    }

    /// Decode a coded cell against an explicit lookup table and sentinel
    pub fn decode_enumerated_with<E: Copy, K: ColumnKey>(
        &self,
        key: K,
        table: &LookupTable<E>,
        sentinel: E,
    ) -> Result<Enumerated<E>> {
        let text = self.raw(key)?;
        Ok(Enumerated::classify(text, table, sentinel))
    }

    /// Decode a comma-separated multi-valued cell
    ///
    /// An empty cell yields an empty list; any element that fails to parse
    /// fails the whole cell.
    pub fn decode_repeated<T: Decodable, K: ColumnKey>(&self, key: K) -> Result<Vec<T>> {
        let position = key.resolve(&self.header)?;
        let text = self.fields[position].as_str();

        if text.is_empty() {
            return Ok(Vec::new());
        }

        text.split(REPEATED_VALUE_SEPARATOR)
            .map(|piece| {
                let piece = piece.trim();
                T::decode(piece)
                    .ok_or_else(|| Error::decode(self.column_name(position), piece, T::KIND))
            })
            .collect()
    }

    /// Decode a multi-valued coded cell; each element is classified independently
    pub fn decode_repeated_enumerated<E: Enumeration, K: ColumnKey>(
        &self,
        key: K,
    ) -> Result<Vec<Enumerated<E>>> {
        let text = self.raw(key)?;

        if text.is_empty() {
            return Ok(Vec::new());
        }

        Ok(text
            .split(REPEATED_VALUE_SEPARATOR)
            .map(|piece| Enumerated::classify(piece.trim(), &E::TABLE, E::UNKNOWN))
            .collect())
    }

    fn column_name(&self, position: usize) -> String {
        self.header
            .name(position)
            .map(str::to_string)
            .unwrap_or_else(|| position.to_string())
    }
}
