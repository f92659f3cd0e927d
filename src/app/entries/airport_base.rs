//! Airport base record (`APT_BASE`)

use super::codes::{
    AirportBeacon, AirportService, AirportStatus, DeterminationMethod, FaaRegion, FacilityUse,
    OwnershipType, RepairAvailability, SegmentedCircle, SourceCode, TowerType, WindIndicator,
};
use super::coordinate;
use crate::Result;
use crate::app::models::{CoordinateDms, LatitudeLongitude};
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};
use crate::constants::ICAO_COLUMN;
use chrono::NaiveDate;

const LATITUDE: [&str; 4] = ["LAT_DEG", "LAT_MIN", "LAT_SEC", "LAT_HEMIS"];
const LONGITUDE: [&str; 4] = ["LONG_DEG", "LONG_MIN", "LONG_SEC", "LONG_HEMIS"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("REGION_CODE", FieldKind::Code(FaaRegion::is_known_code)),
    FieldSpec::required("ARPT_NAME", FieldKind::Text),
    FieldSpec::optional("COUNTY_NAME", FieldKind::Text),
    FieldSpec::optional("COUNTY_ASSOC_STATE", FieldKind::Text),
    FieldSpec::optional("OWNERSHIP_TYPE_CODE", FieldKind::Code(OwnershipType::is_known_code)),
    FieldSpec::optional("FACILITY_USE_CODE", FieldKind::Code(FacilityUse::is_known_code)),
    FieldSpec::optional("LAT_DEG", FieldKind::Decimal),
    FieldSpec::optional("LAT_MIN", FieldKind::Decimal),
    FieldSpec::optional("LAT_SEC", FieldKind::Decimal),
    FieldSpec::optional("LAT_HEMIS", FieldKind::Character),
    FieldSpec::optional("LAT_DECIMAL", FieldKind::Decimal),
    FieldSpec::optional("LONG_DEG", FieldKind::Decimal),
    FieldSpec::optional("LONG_MIN", FieldKind::Decimal),
    FieldSpec::optional("LONG_SEC", FieldKind::Decimal),
    FieldSpec::optional("LONG_HEMIS", FieldKind::Character),
    FieldSpec::optional("LONG_DECIMAL", FieldKind::Decimal),
    FieldSpec::optional("ARPT_PSN_SOURCE", FieldKind::Code(SourceCode::is_known_code)),
    FieldSpec::optional("SURVEY_METHOD_CODE", FieldKind::Code(DeterminationMethod::is_known_code)),
    FieldSpec::optional("ELEV", FieldKind::Decimal),
    FieldSpec::optional("ELEV_METHOD_CODE", FieldKind::Code(DeterminationMethod::is_known_code)),
    FieldSpec::optional("MAG_VARN", FieldKind::Signed),
    FieldSpec::optional("MAG_HEMIS", FieldKind::Character),
    FieldSpec::optional("TPA", FieldKind::Unsigned),
    FieldSpec::optional("CHART_NAME", FieldKind::Text),
    FieldSpec::optional("RESP_ARTCC_ID", FieldKind::Text),
    FieldSpec::optional("FSS_ID", FieldKind::Text),
    FieldSpec::optional("NOTAM_ID", FieldKind::Text),
    FieldSpec::optional("ARPT_STATUS", FieldKind::Code(AirportStatus::is_known_code)),
    FieldSpec::optional("FUEL_TYPES", FieldKind::Text),
    FieldSpec::optional("AIRFRAME_REPAIR_SER_CODE", FieldKind::Code(RepairAvailability::is_known_code)),
    FieldSpec::optional("PWR_PLANT_REPAIR_SER", FieldKind::Code(RepairAvailability::is_known_code)),
    FieldSpec::optional("BCN_LENS_COLOR", FieldKind::Code(AirportBeacon::is_known_code)),
    FieldSpec::optional("LNDG_FEE_FLAG", FieldKind::Boolean),
    FieldSpec::optional("MEDICAL_USE_FLAG", FieldKind::Boolean),
    FieldSpec::optional("TWR_TYPE_CODE", FieldKind::Code(TowerType::is_known_code)),
    FieldSpec::optional("SEG_CIRCLE_MKR_FLAG", FieldKind::Code(SegmentedCircle::is_known_code)),
    FieldSpec::optional("WIND_INDCR_FLAG", FieldKind::Code(WindIndicator::is_known_code)),
    FieldSpec::optional("OTHER_SERVICES", FieldKind::CodeList(AirportService::is_known_code)),
    FieldSpec::optional("LAST_INSPECTION", FieldKind::Date),
    FieldSpec::optional("BASED_SINGLE_ENG", FieldKind::Unsigned),
    FieldSpec::optional("BASED_MULTI_ENG", FieldKind::Unsigned),
    FieldSpec::optional("BASED_JET_ENG", FieldKind::Unsigned),
    FieldSpec::optional("BASED_HEL", FieldKind::Unsigned),
    FieldSpec::optional(ICAO_COLUMN, FieldKind::Text),
];

entry_type!(
    /// One facility: name, ownership, reference point, services and status
    AirportBaseEntry,
    TableKind::AptBase,
    FIELDS
);

impl AirportBaseEntry {
    pub fn region(&self) -> Result<Enumerated<FaaRegion>> {
        self.row.decode_enumerated("REGION_CODE")
    }

    pub fn name(&self) -> Result<&str> {
        self.row.raw("ARPT_NAME")
    }

    pub fn county_name(&self) -> Result<&str> {
        self.row.raw("COUNTY_NAME")
    }

    pub fn county_state(&self) -> Result<&str> {
        self.row.raw("COUNTY_ASSOC_STATE")
    }

    pub fn ownership(&self) -> Result<Enumerated<OwnershipType>> {
        self.row.decode_enumerated("OWNERSHIP_TYPE_CODE")
    }

    pub fn facility_use(&self) -> Result<Enumerated<FacilityUse>> {
        self.row.decode_enumerated("FACILITY_USE_CODE")
    }

    pub fn latitude(&self) -> Result<Option<CoordinateDms>> {
        coordinate(&self.row, LATITUDE)
    }

    pub fn longitude(&self) -> Result<Option<CoordinateDms>> {
        coordinate(&self.row, LONGITUDE)
    }

    /// Airport reference point from the degree/minute/second columns
    pub fn reference_point(&self) -> Result<Option<LatitudeLongitude>> {
        Ok(LatitudeLongitude::make_optional(self.latitude()?, self.longitude()?))
    }

    /// Airport reference point from the decimal columns
    pub fn reference_point_decimal(&self) -> Result<Option<LatitudeLongitude>> {
        Ok(LatitudeLongitude::make_optional_decimal(
            self.row.decode_optional("LAT_DECIMAL")?,
            self.row.decode_optional("LONG_DECIMAL")?,
        ))
    }

    pub fn position_source(&self) -> Result<Enumerated<SourceCode>> {
        self.row.decode_enumerated("ARPT_PSN_SOURCE")
    }

    pub fn survey_method(&self) -> Result<Enumerated<DeterminationMethod>> {
        self.row.decode_enumerated("SURVEY_METHOD_CODE")
    }

    /// Field elevation in feet MSL
    pub fn elevation(&self) -> Result<Option<f64>> {
        self.row.decode_optional("ELEV")
    }

    pub fn elevation_method(&self) -> Result<Enumerated<DeterminationMethod>> {
        self.row.decode_enumerated("ELEV_METHOD_CODE")
    }

    /// Magnetic variation in whole degrees, signed east positive
    pub fn magnetic_variation(&self) -> Result<Option<i32>> {
        let degrees: Option<i32> = self.row.decode_optional("MAG_VARN")?;
        let hemisphere: Option<char> = self.row.decode_optional("MAG_HEMIS")?;

        Ok(match (degrees, hemisphere) {
            (Some(degrees), Some('W')) => Some(-degrees),
            (Some(degrees), Some('E')) => Some(degrees),
            _ => None,
        })
    }

    /// Traffic pattern altitude in feet AGL
    pub fn traffic_pattern_altitude(&self) -> Result<Option<u32>> {
        self.row.decode_optional("TPA")
    }

    /// Sectional chart the facility appears on
    pub fn chart_name(&self) -> Result<&str> {
        self.row.raw("CHART_NAME")
    }

    pub fn responsible_artcc(&self) -> Result<&str> {
        self.row.raw("RESP_ARTCC_ID")
    }

    pub fn flight_service_station(&self) -> Result<&str> {
        self.row.raw("FSS_ID")
    }

    pub fn notam_identifier(&self) -> Result<&str> {
        self.row.raw("NOTAM_ID")
    }

    pub fn status(&self) -> Result<Enumerated<AirportStatus>> {
        self.row.decode_enumerated("ARPT_STATUS")
    }

    /// Fuel grades available, e.g. `["100LL", "A"]`
    pub fn fuel_types(&self) -> Result<Vec<String>> {
        self.row.decode_repeated("FUEL_TYPES")
    }

    pub fn airframe_repair(&self) -> Result<Enumerated<RepairAvailability>> {
        self.row.decode_enumerated("AIRFRAME_REPAIR_SER_CODE")
    }

    pub fn power_plant_repair(&self) -> Result<Enumerated<RepairAvailability>> {
        self.row.decode_enumerated("PWR_PLANT_REPAIR_SER")
    }

    pub fn beacon(&self) -> Result<Enumerated<AirportBeacon>> {
        self.row.decode_enumerated("BCN_LENS_COLOR")
    }

    pub fn landing_fee(&self) -> Result<Option<bool>> {
        self.row.decode_optional("LNDG_FEE_FLAG")
    }

    pub fn medical_use(&self) -> Result<Option<bool>> {
        self.row.decode_optional("MEDICAL_USE_FLAG")
    }

    pub fn tower_type(&self) -> Result<Enumerated<TowerType>> {
        self.row.decode_enumerated("TWR_TYPE_CODE")
    }

    pub fn segmented_circle(&self) -> Result<Enumerated<SegmentedCircle>> {
        self.row.decode_enumerated("SEG_CIRCLE_MKR_FLAG")
    }

    pub fn wind_indicator(&self) -> Result<Enumerated<WindIndicator>> {
        self.row.decode_enumerated("WIND_INDCR_FLAG")
    }

    /// Other services offered, one outcome per listed code
    pub fn services(&self) -> Result<Vec<Enumerated<AirportService>>> {
        self.row.decode_repeated_enumerated("OTHER_SERVICES")
    }

    pub fn last_inspection(&self) -> Result<Option<NaiveDate>> {
        self.row.decode_optional("LAST_INSPECTION")
    }

    /// Based aircraft counts: single engine, multi engine, jet, helicopter
    pub fn based_aircraft(&self) -> Result<[Option<u32>; 4]> {
        Ok([
            self.row.decode_optional("BASED_SINGLE_ENG")?,
            self.row.decode_optional("BASED_MULTI_ENG")?,
            self.row.decode_optional("BASED_JET_ENG")?,
            self.row.decode_optional("BASED_HEL")?,
        ])
    }

    /// ICAO identifier, empty for facilities without one
    pub fn icao_identifier(&self) -> Result<&str> {
        self.row.raw(ICAO_COLUMN)
    }
}
