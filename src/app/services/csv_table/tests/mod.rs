//! Test utilities for CSV table testing
//!
//! Shared fixtures used across the table test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use super::table::Table;

mod index_tests;
mod tokenizer_tests;

/// Runway extract with two runways at ABC and one at XYZ
pub fn create_runway_csv() -> String {
    r#""EFF_DATE","SITE_NO","ARPT_ID","RWY_ID","RWY_LEN","RWY_WIDTH","SURFACE_TYPE_CODE","LGT_FLAG"
"2023/01/26","00001.*A","ABC","09/27","5000","100","ASPH","Y"
"2023/01/26","00001.*A","ABC","18/36","3200","75","TURF-GRVL","N"
"2023/01/26","00002.*A","XYZ","01/19","","60","CONC","YES""#
        .to_string()
}

/// Parse the runway fixture
pub fn create_runway_table() -> Table {
    Table::parse_text("APT_RWY", &create_runway_csv()).unwrap()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
