//! ILS glideslope record (`ILS_GS`)

use super::codes::{GlideslopeType, SourceCode};
use super::{IlsRecord, coordinate};
use crate::Result;
use crate::app::models::LatitudeLongitude;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};

const LATITUDE: [&str; 4] = ["LAT_DEG", "LAT_MIN", "LAT_SEC", "LAT_HEMIS"];
const LONGITUDE: [&str; 4] = ["LONG_DEG", "LONG_MIN", "LONG_SEC", "LONG_HEMIS"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("COMPONENT_STATUS", FieldKind::Text),
    FieldSpec::optional("G_S_TYPE_CODE", FieldKind::Code(GlideslopeType::is_known_code)),
    FieldSpec::optional("G_S_ANGLE", FieldKind::Decimal),
    FieldSpec::optional("G_S_FREQ", FieldKind::Decimal),
    FieldSpec::optional("RWY_ELEV_ADJ_G_S", FieldKind::Decimal),
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
    /// Glideslope transmitter of one instrument landing system
    GlideslopeEntry,
    TableKind::IlsGlideslope,
    FIELDS,
    shared = super::ILS_SHARED_FIELDS
);

impl IlsRecord for GlideslopeEntry {}

impl GlideslopeEntry {
    pub fn status(&self) -> Result<&str> {
        self.row.raw("COMPONENT_STATUS")
    }

    pub fn glideslope_type(&self) -> Result<Enumerated<GlideslopeType>> {
        self.row.decode_enumerated("G_S_TYPE_CODE")
    }

    /// Glide path angle in degrees
    pub fn angle(&self) -> Result<Option<f64>> {
        self.row.decode_optional("G_S_ANGLE")
    }

    /// Frequency in MHz
    pub fn frequency(&self) -> Result<Option<f64>> {
        self.row.decode_optional("G_S_FREQ")
    }

    pub fn runway_elevation_adjacent(&self) -> Result<Option<f64>> {
        self.row.decode_optional("RWY_ELEV_ADJ_G_S")
    }

    /// Transmitter position
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
