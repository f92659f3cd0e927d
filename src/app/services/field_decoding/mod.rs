//! Typed decoding of raw NASR cells
//!
//! This module owns the closed set of target shapes a cell can be decoded
//! into and the static schema data that maps columns onto those shapes.
//!
//! ## Architecture
//!
//! - [`decodable`] - Primitive targets (numbers, booleans, characters, text, dates)
//! - [`enumerated`] - Code tables, the [`Enumeration`] trait and the tri-state [`Enumerated`] outcome
//! - [`schema`] - Column-to-kind mapping and strict row inspection
//!
//! Required, optional, enumerated and repeated decoding are exposed on
//! [`Row`](crate::app::services::csv_table::Row); this module only defines
//! what a single piece of text turns into.

pub mod decodable;
pub mod enumerated;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decodable::Decodable;
pub use enumerated::{Enumerated, Enumeration, LookupTable};
pub use schema::{FieldIssue, FieldKind, FieldSpec, IssueKind, inspect_row, missing_columns};
