//! ILS marker beacon record (`ILS_MKR`)

use super::codes::{MarkerType, SourceCode};
use super::{IlsRecord, coordinate};
use crate::Result;
use crate::app::models::LatitudeLongitude;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};

const LATITUDE: [&str; 4] = ["LAT_DEG", "LAT_MIN", "LAT_SEC", "LAT_HEMIS"];
const LONGITUDE: [&str; 4] = ["LONG_DEG", "LONG_MIN", "LONG_SEC", "LONG_HEMIS"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("ILS_COMP_TYPE_CODE", FieldKind::Code(MarkerType::is_known_code)),
    FieldSpec::optional("COMPONENT_STATUS", FieldKind::Text),
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
    FieldSpec::optional("MKR_FAC_TYPE_CODE", FieldKind::Text),
    FieldSpec::optional("MARKER_ID_BEACON", FieldKind::Text),
    FieldSpec::optional("COMPASS_LOCATOR_NAME", FieldKind::Text),
    FieldSpec::optional("FREQ", FieldKind::Unsigned),
];

entry_type!(
    /// Marker beacon (inner, middle or outer) of one instrument landing system
    MarkerEntry,
    TableKind::IlsMarker,
    FIELDS,
    shared = super::ILS_SHARED_FIELDS
);

impl IlsRecord for MarkerEntry {}

impl MarkerEntry {
    pub fn marker_type(&self) -> Result<Enumerated<MarkerType>> {
        self.row.decode_enumerated("ILS_COMP_TYPE_CODE")
    }

    pub fn status(&self) -> Result<&str> {
        self.row.raw("COMPONENT_STATUS")
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

    /// Collocated facility type, e.g. `MARKER` or `COMLO`
    pub fn facility_type(&self) -> Result<&str> {
        self.row.raw("MKR_FAC_TYPE_CODE")
    }

    pub fn beacon_identifier(&self) -> Result<&str> {
        self.row.raw("MARKER_ID_BEACON")
    }

    pub fn compass_locator_name(&self) -> Result<&str> {
        self.row.raw("COMPASS_LOCATOR_NAME")
    }

    /// Compass locator frequency in kHz
    pub fn frequency(&self) -> Result<Option<u32>> {
        self.row.decode_optional("FREQ")
    }
}
