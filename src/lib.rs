//! NASR Reader Library
//!
//! A Rust library for reading the FAA's NASR airport and ILS CSV extracts into
//! a typed, indexed, in-memory relational view.
//!
//! This library provides tools for:
//! - Tokenizing quote-aware, single-line CSV records with a shared header
//! - Decoding raw cells into numbers, booleans, characters, dates and coded
//!   enumerations with explicit required/optional/enumerated outcomes
//! - Building lazily cached equality indices for keyed row lookups
//! - Joining a facility's base record with its runways, ILS components and remarks
//! - Mapping calendar dates onto 28-day AIRAC cycle identifiers

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod entries;
    pub mod models;
    pub mod services {
        pub mod airport_registry;
        pub mod csv_table;
        pub mod field_decoding;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AiracCycle, CoordinateDms, Hemisphere, LatitudeLongitude, cycle_identifier};
pub use app::services::airport_registry::{Airport, AirportRegistry, LoadStats, TableKind};
pub use app::services::csv_table::{ColumnIndex, Header, Row, Table, lookup_children, lookup_parent};
pub use app::services::field_decoding::{Decodable, Enumerated, Enumeration, LookupTable};
pub use config::RegistryConfig;

/// Result type alias for the NASR reader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for NASR table loading, decoding and lookups
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Requested column is not part of the table header
    #[error("Column not found: '{column}'")]
    ColumnNotFound { column: String },

    /// Positional column access beyond the header width
    #[error("Column index {index} out of range for header of width {width}")]
    ColumnOutOfRange { index: usize, width: usize },

    /// The same column name appears twice in a header
    #[error("Duplicate column '{column}' at positions {first} and {second}")]
    DuplicateColumn {
        column: String,
        first: usize,
        second: usize,
    },

    /// Table has no header (file missing, unreadable or empty)
    #[error("Table not loaded: {table}")]
    TableNotLoaded { table: String },

    /// Positional row access beyond the end of the table
    #[error("Row index {index} out of range for table with {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    /// Field count does not match the header width
    #[error("Row has {found} fields but header has {expected}")]
    RowShape { expected: usize, found: usize },

    /// Cell text could not be decoded into the requested type
    #[error("Cannot decode column '{column}' value '{value}' as {expected}")]
    Decode {
        column: String,
        value: String,
        expected: &'static str,
    },

    /// Key lookup did not resolve to exactly one record
    #[error("No unique record for {column} = '{identifier}' ({matches} matches)")]
    RecordNotFound {
        column: String,
        identifier: String,
        matches: usize,
    },

    /// Cycle arithmetic ran past the supported calendar
    #[error("No AIRAC cycle follows {identifier} (effective {effective})")]
    CycleOutOfRange {
        identifier: u32,
        effective: chrono::NaiveDate,
    },

    /// Coordinate components out of range or unknown hemisphere
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a column not found error
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Create a table not loaded error
    pub fn table_not_loaded(table: impl Into<String>) -> Self {
        Self::TableNotLoaded {
            table: table.into(),
        }
    }

    /// Create a decode error for a cell
    pub fn decode(column: impl Into<String>, value: impl Into<String>, expected: &'static str) -> Self {
        Self::Decode {
            column: column.into(),
            value: value.into(),
            expected,
        }
    }

    /// Create a record not found error
    pub fn record_not_found(
        column: impl Into<String>,
        identifier: impl Into<String>,
        matches: usize,
    ) -> Self {
        Self::RecordNotFound {
            column: column.into(),
            identifier: identifier.into(),
            matches,
        }
    }

    /// Create an invalid coordinate error
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error means "no such record" rather than a schema or I/O fault
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
