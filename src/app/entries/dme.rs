//! ILS distance measuring equipment record (`ILS_DME`)

use super::codes::SourceCode;
use super::{IlsRecord, coordinate};
use crate::Result;
use crate::app::models::LatitudeLongitude;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};

const LATITUDE: [&str; 4] = ["LAT_DEG", "LAT_MIN", "LAT_SEC", "LAT_HEMIS"];
const LONGITUDE: [&str; 4] = ["LONG_DEG", "LONG_MIN", "LONG_SEC", "LONG_HEMIS"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("COMPONENT_STATUS", FieldKind::Text),
    FieldSpec::optional("CHANNEL", FieldKind::Text),
    FieldSpec::optional("LAT_DEG", FieldKind::Decimal),
    FieldSpec::optional("LAT_MIN", FieldKind::Decimal),
    FieldSpec::optional("LAT_SEC", FieldKind::Decimal),
    FieldSpec::optional("LAT_HEMIS", FieldKind::Character),
    FieldSpec::optional("LONG_DEG", FieldKind::Decimal),
    FieldSpec::optional("LONG_MIN", FieldKind::Decimal),
    FieldSpec::optional("LONG_SEC", FieldKind::Decimal),
    FieldSpec::optional("LONG_HEMIS", FieldKind::Character),
    FieldSpec::optional("LAT_LONG_SOURCE_CODE", FieldKind::Code(SourceCode::is_known_code)),
    FieldSpec::optional("SITE_ELEVATION", FieldKind::Decimal),
];

entry_type!(
    /// DME paired with one instrument landing system
    DmeEntry,
    TableKind::IlsDme,
    FIELDS,
    shared = super::ILS_SHARED_FIELDS
);

impl IlsRecord for DmeEntry {}

impl DmeEntry {
    pub fn status(&self) -> Result<&str> {
        self.row.raw("COMPONENT_STATUS")
    }

    /// TACAN channel, e.g. `032X`
    pub fn channel(&self) -> Result<&str> {
        self.row.raw("CHANNEL")
    }

    pub fn position(&self) -> Result<Option<LatitudeLongitude>> {
        Ok(LatitudeLongitude::make_optional(
            coordinate(&self.row, LATITUDE)?,
            coordinate(&self.row, LONGITUDE)?,
        ))
    }

    pub fn position_source(&self) -> Result<Enumerated<SourceCode>> {
        self.row.decode_enumerated("LAT_LONG_SOURCE_CODE")
    }

    pub fn site_elevation(&self) -> Result<Option<f64>> {
        self.row.decode_optional("SITE_ELEVATION")
    }
}
