//! Test utilities for field decoding

use crate::app::services::csv_table::{Header, Row};
use std::sync::Arc;

// Test modules
mod decodable_tests;
mod enumerated_tests;

crate::code_enum! {
    /// Surface codes used by the decoding tests
    pub enum TestSurface {
        Asphalt => ["ASPH"],
        Concrete => ["CONC"],
        Turf => ["TURF"],
        Gravel => ["GRVL", "GRAVEL"],
    }
}

/// Build a single row from column/value pairs
pub fn create_row(cells: &[(&str, &str)]) -> Row {
    let header = Arc::new(Header::new(cells.iter().map(|(column, _)| *column)).unwrap());
    let values: Vec<&str> = cells.iter().map(|(_, value)| *value).collect();
    Row::new(&values, header).unwrap()
}
