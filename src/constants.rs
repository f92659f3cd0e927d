//! Application constants for the NASR reader
//!
//! This module contains the file names, column names, CSV syntax characters
//! and calendar constants used throughout the NASR reader.

// =============================================================================
// CSV Syntax
// =============================================================================

/// Field separator within one record line
pub const FIELD_SEPARATOR: char = ',';

/// Quote character that toggles a quoted section
pub const QUOTE: char = '"';

/// Escape character; a separator or quote directly after it is literal
pub const ESCAPE: char = '\\';

/// Separator between values inside a multi-valued cell
pub const REPEATED_VALUE_SEPARATOR: char = ',';

// =============================================================================
// Table Files and Key Columns
// =============================================================================

/// Column joining every extract to its facility
pub const AIRPORT_KEY_COLUMN: &str = "ARPT_ID";

/// ICAO identifier column in the airport base extract
pub const ICAO_COLUMN: &str = "ICAO_ID";

/// Airport extract file names
pub mod files {
    pub const APT_BASE: &str = "APT_BASE.csv";
    pub const APT_ARRESTING: &str = "APT_ARS.csv";
    pub const APT_ATTENDANCE: &str = "APT_ATT.csv";
    pub const APT_CONTACT: &str = "APT_CON.csv";
    pub const APT_REMARKS: &str = "APT_RMK.csv";
    pub const APT_RUNWAY: &str = "APT_RWY.csv";
    pub const APT_RUNWAY_END: &str = "APT_RWY_END.csv";

    pub const ILS_BASE: &str = "ILS_BASE.csv";
    pub const ILS_GLIDESLOPE: &str = "ILS_GS.csv";
    pub const ILS_DME: &str = "ILS_DME.csv";
    pub const ILS_MARKER: &str = "ILS_MKR.csv";
    pub const ILS_REMARKS: &str = "ILS_RMK.csv";
}

// =============================================================================
// Field Formats
// =============================================================================

/// Date format used by every date column (e.g. `2023/01/26`)
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Boolean vocabulary accepted after cleaning and upper-casing
pub const TRUE_WORDS: &[&str] = &["TRUE", "T", "YES", "Y"];
pub const FALSE_WORDS: &[&str] = &["FALSE", "F", "NO", "N"];

// =============================================================================
// AIRAC Calendar
// =============================================================================

/// Length of one AIRAC cycle in days
pub const AIRAC_CYCLE_DAYS: i64 = 28;

/// Effective date of cycle 2001 (year, month, day)
pub const AIRAC_EPOCH: (i32, u32, u32) = (2020, 1, 2);

/// Most consecutive cycles the `cycle` command prints (about ten years)
pub const MAX_CYCLE_COUNT: u64 = 130;
