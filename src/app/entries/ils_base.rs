//! ILS base record (`ILS_BASE`)
//!
//! The base record describes the localizer of one instrument landing system.

use super::codes::{FaaRegion, IlsCategory, SourceCode};
use super::{IlsRecord, coordinate};
use crate::Result;
use crate::app::models::{CoordinateDms, LatitudeLongitude};
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};
use chrono::NaiveDate;

const LATITUDE: [&str; 4] = ["LAT_DEG", "LAT_MIN", "LAT_SEC", "LAT_HEMIS"];
const LONGITUDE: [&str; 4] = ["LONG_DEG", "LONG_MIN", "LONG_SEC", "LONG_HEMIS"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("REGION_CODE", FieldKind::Code(FaaRegion::is_known_code)),
    FieldSpec::optional("CATEGORY", FieldKind::Code(IlsCategory::is_known_code)),
    FieldSpec::optional("OWNER_NAME", FieldKind::Text),
    FieldSpec::optional("OPR_NAME", FieldKind::Text),
    FieldSpec::optional("APCH_BEAR", FieldKind::Decimal),
    FieldSpec::optional("MAG_VAR", FieldKind::Signed),
    FieldSpec::optional("MAG_VAR_HEMIS", FieldKind::Character),
    FieldSpec::optional("COMPONENT_STATUS", FieldKind::Text),
    FieldSpec::optional("COMPONENT_STATUS_DATE", FieldKind::Date),
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
    FieldSpec::optional("LOC_FREQ", FieldKind::Decimal),
    FieldSpec::optional("CRS_WIDTH", FieldKind::Decimal),
    FieldSpec::optional("CRS_WIDTH_AT_THRESH", FieldKind::Decimal),
];

entry_type!(
    /// Localizer of one instrument landing system
    IlsBaseEntry,
    TableKind::IlsBase,
    FIELDS,
    shared = super::ILS_SHARED_FIELDS
);

impl IlsRecord for IlsBaseEntry {}

impl IlsBaseEntry {
    pub fn region(&self) -> Result<Enumerated<FaaRegion>> {
        self.row.decode_enumerated("REGION_CODE")
    }

    pub fn category(&self) -> Result<Enumerated<IlsCategory>> {
        self.row.decode_enumerated("CATEGORY")
    }

    pub fn owner(&self) -> Result<&str> {
        self.row.raw("OWNER_NAME")
    }

    pub fn operator(&self) -> Result<&str> {
        self.row.raw("OPR_NAME")
    }

    /// Magnetic approach bearing in degrees
    pub fn approach_bearing(&self) -> Result<Option<f64>> {
        self.row.decode_optional("APCH_BEAR")
    }

    /// Magnetic variation in whole degrees, signed east positive
    pub fn magnetic_variation(&self) -> Result<Option<i32>> {
        let degrees: Option<i32> = self.row.decode_optional("MAG_VAR")?;
        let hemisphere: Option<char> = self.row.decode_optional("MAG_VAR_HEMIS")?;

        Ok(match (degrees, hemisphere) {
            (Some(degrees), Some('W')) => Some(-degrees),
            (Some(degrees), Some('E')) => Some(degrees),
            _ => None,
        })
    }

    /// Operational status text, e.g. `OPERATIONAL IFR`
    pub fn status(&self) -> Result<&str> {
        self.row.raw("COMPONENT_STATUS")
    }

    pub fn status_date(&self) -> Result<Option<NaiveDate>> {
        self.row.decode_optional("COMPONENT_STATUS_DATE")
    }

    pub fn latitude(&self) -> Result<Option<CoordinateDms>> {
        coordinate(&self.row, LATITUDE)
    }

    pub fn longitude(&self) -> Result<Option<CoordinateDms>> {
        coordinate(&self.row, LONGITUDE)
    }

    /// Localizer antenna position
    pub fn position(&self) -> Result<Option<LatitudeLongitude>> {
        Ok(LatitudeLongitude::make_optional(self.latitude()?, self.longitude()?))
    }

    pub fn position_source(&self) -> Result<Enumerated<SourceCode>> {
        self.row.decode_enumerated("LAT_LONG_SOURCE_CODE")
    }

    pub fn site_elevation(&self) -> Result<Option<f64>> {
        self.row.decode_optional("SITE_ELEVATION")
    }

    /// Localizer frequency in MHz
    pub fn frequency(&self) -> Result<Option<f64>> {
        self.row.decode_optional("LOC_FREQ")
    }

    /// Course width in degrees
    pub fn course_width(&self) -> Result<Option<f64>> {
        self.row.decode_optional("CRS_WIDTH")
    }

    pub fn course_width_at_threshold(&self) -> Result<Option<f64>> {
        self.row.decode_optional("CRS_WIDTH_AT_THRESH")
    }
}
