//! Typed views over NASR extract rows
//!
//! Every entry wraps one [`Row`] and decodes on access; nothing is decoded
//! for rows that are never read. The column each accessor reads is listed in
//! the entry's `FIELDS` so validation can check an extract without
//! constructing entries.
//!
//! ## Architecture
//!
//! - [`codes`] - Code tables for coded columns
//! - [`airport_base`] .. [`runway_end`] - Airport (`APT_*`) extracts
//! - [`ils_base`] .. [`ils_remarks`] - Instrument landing system (`ILS_*`) extracts
//!
//! Columns shared by every extract are exposed through [`AirportRecord`];
//! columns shared by every ILS extract through [`IlsRecord`].

use crate::Result;
use crate::app::models::CoordinateDms;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::csv_table::Row;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};
use chrono::NaiveDate;

use self::codes::{IlsSystemType, LandingFacilityType};

/// Declare an entry type wrapping one row of `$kind`
macro_rules! entry_type {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $fields:expr $(, shared = $shared:expr)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            row: $crate::app::services::csv_table::Row,
        }

        impl $crate::app::entries::Entry for $name {
            const KIND: $crate::app::services::airport_registry::TableKind = $kind;
            const FIELDS: &'static [$crate::app::services::field_decoding::FieldSpec] = $fields;
            $(const SHARED_FIELDS: &'static [$crate::app::services::field_decoding::FieldSpec] = $shared;)?

            fn from_row(row: $crate::app::services::csv_table::Row) -> Self {
                Self { row }
            }

            fn row(&self) -> &$crate::app::services::csv_table::Row {
                &self.row
            }
        }
    };
}

pub mod airport_base;
pub mod arresting;
pub mod attendance;
pub mod codes;
pub mod contact;
pub mod dme;
pub mod glideslope;
pub mod ils_base;
pub mod ils_remarks;
pub mod marker;
pub mod remarks;
pub mod runway;
pub mod runway_end;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use airport_base::AirportBaseEntry;
pub use arresting::ArrestingEntry;
pub use attendance::AttendanceEntry;
pub use contact::ContactEntry;
pub use dme::DmeEntry;
pub use glideslope::GlideslopeEntry;
pub use ils_base::IlsBaseEntry;
pub use ils_remarks::IlsRemarksEntry;
pub use marker::MarkerEntry;
pub use remarks::RemarksEntry;
pub use runway::{RunwayEntry, SurfaceComposition};
pub use runway_end::{DeclaredDistances, RunwayEndEntry};

/// A typed view over one row of a known extract
pub trait Entry: Sized {
    /// Extract this entry is read from
    const KIND: TableKind;

    /// Columns specific to this entry
    const FIELDS: &'static [FieldSpec];

    /// Columns shared with other extracts
    const SHARED_FIELDS: &'static [FieldSpec] = COMMON_FIELDS;

    fn from_row(row: Row) -> Self;

    fn row(&self) -> &Row;

    /// Every column this entry reads
    fn schema() -> Vec<FieldSpec> {
        Self::SHARED_FIELDS.iter().chain(Self::FIELDS).copied().collect()
    }
}

/// Columns present in every airport and ILS extract
pub const COMMON_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("EFF_DATE", FieldKind::Date),
    FieldSpec::required("SITE_NO", FieldKind::Text),
    FieldSpec::optional("SITE_TYPE_CODE", FieldKind::Code(LandingFacilityType::is_known_code)),
    FieldSpec::optional("STATE_CODE", FieldKind::Text),
    FieldSpec::required("ARPT_ID", FieldKind::Text),
    FieldSpec::optional("CITY", FieldKind::Text),
    FieldSpec::optional("COUNTRY_CODE", FieldKind::Text),
];

/// Columns present in every ILS extract
pub const ILS_SHARED_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("EFF_DATE", FieldKind::Date),
    FieldSpec::required("SITE_NO", FieldKind::Text),
    FieldSpec::optional("SITE_TYPE_CODE", FieldKind::Code(LandingFacilityType::is_known_code)),
    FieldSpec::optional("STATE_CODE", FieldKind::Text),
    FieldSpec::required("ARPT_ID", FieldKind::Text),
    FieldSpec::optional("CITY", FieldKind::Text),
    FieldSpec::optional("COUNTRY_CODE", FieldKind::Text),
    FieldSpec::required("RWY_END_ID", FieldKind::Text),
    FieldSpec::required("ILS_LOC_ID", FieldKind::Text),
    FieldSpec::optional("SYSTEM_TYPE_CODE", FieldKind::Code(IlsSystemType::is_known_code)),
];

/// Columns shared by every airport and ILS extract
pub trait AirportRecord: Entry {
    /// Date the record became effective
    fn effective_date(&self) -> Result<NaiveDate> {
        self.row().decode("EFF_DATE")
    }

    /// Landing facility site number, e.g. `04508.*A`
    fn site_number(&self) -> Result<&str> {
        self.row().raw("SITE_NO")
    }

    fn site_type(&self) -> Result<Enumerated<LandingFacilityType>> {
        self.row().decode_enumerated("SITE_TYPE_CODE")
    }

    fn state_code(&self) -> Result<&str> {
        self.row().raw("STATE_CODE")
    }

    /// FAA location identifier joining the extracts
    fn location_identifier(&self) -> Result<&str> {
        self.row().raw("ARPT_ID")
    }

    fn city(&self) -> Result<&str> {
        self.row().raw("CITY")
    }

    fn country_code(&self) -> Result<&str> {
        self.row().raw("COUNTRY_CODE")
    }
}

impl<T: Entry> AirportRecord for T {}

/// Columns shared by every ILS extract
pub trait IlsRecord: Entry {
    /// Runway end the system serves
    fn runway_end(&self) -> Result<&str> {
        self.row().raw("RWY_END_ID")
    }

    /// Localizer identifier, e.g. `I-OKC`
    fn ils_identifier(&self) -> Result<&str> {
        self.row().raw("ILS_LOC_ID")
    }

    fn system_type(&self) -> Result<Enumerated<IlsSystemType>> {
        self.row().decode_enumerated("SYSTEM_TYPE_CODE")
    }
}

/// Compose an optional coordinate from degree, minute, second and hemisphere columns
pub(crate) fn coordinate(row: &Row, columns: [&str; 4]) -> Result<Option<CoordinateDms>> {
    let [degrees, minutes, seconds, hemisphere] = columns;
    Ok(CoordinateDms::make_optional(
        row.decode_optional(degrees)?,
        row.decode_optional(minutes)?,
        row.decode_optional(seconds)?,
        row.decode_optional(hemisphere)?,
    ))
}

