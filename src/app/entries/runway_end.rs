//! Runway end record (`APT_RWY_END`)

use super::codes::{
    ApproachLightSystem, IlsType, ObstructionMarking, Part77Category, RunwayMarkingType,
    RunwayMarkingsCondition, VisualGlideslopeIndicator,
};
use super::coordinate;
use crate::Result;
use crate::app::models::{CoordinateDms, LatitudeLongitude};
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};

const END_LATITUDE: [&str; 4] = [
    "RWY_END_LAT_DEG",
    "RWY_END_LAT_MIN",
    "RWY_END_LAT_SEC",
    "RWY_END_LAT_HEMIS",
];
const END_LONGITUDE: [&str; 4] = [
    "RWY_END_LONG_DEG",
    "RWY_END_LONG_MIN",
    "RWY_END_LONG_SEC",
    "RWY_END_LONG_HEMIS",
];
const THRESHOLD_LATITUDE: [&str; 4] = [
    "DISPLACED_THR_LAT_DEG",
    "DISPLACED_THR_LAT_MIN",
    "DISPLACED_THR_LAT_SEC",
    "DISPLACED_THR_LAT_HEMIS",
];
const THRESHOLD_LONGITUDE: [&str; 4] = [
    "DISPLACED_THR_LONG_DEG",
    "DISPLACED_THR_LONG_MIN",
    "DISPLACED_THR_LONG_SEC",
    "DISPLACED_THR_LONG_HEMIS",
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("RWY_ID", FieldKind::Text),
    FieldSpec::required("RWY_END_ID", FieldKind::Text),
    FieldSpec::optional("TRUE_ALIGNMENT", FieldKind::UnsignedShort),
    FieldSpec::optional("ILS_TYPE", FieldKind::Code(IlsType::is_known_code)),
    FieldSpec::optional("RIGHT_HAND_TRAFFIC_PAT_FLAG", FieldKind::Boolean),
    FieldSpec::optional("RWY_MARKING_TYPE_CODE", FieldKind::Code(RunwayMarkingType::is_known_code)),
    FieldSpec::optional("RWY_MARKING_COND", FieldKind::Code(RunwayMarkingsCondition::is_known_code)),
    FieldSpec::optional("RWY_END_LAT_DEG", FieldKind::Decimal),
    FieldSpec::optional("RWY_END_LAT_MIN", FieldKind::Decimal),
    FieldSpec::optional("RWY_END_LAT_SEC", FieldKind::Decimal),
    FieldSpec::optional("RWY_END_LAT_HEMIS", FieldKind::Character),
    FieldSpec::optional("LAT_DECIMAL", FieldKind::Decimal),
    FieldSpec::optional("RWY_END_LONG_DEG", FieldKind::Decimal),
    FieldSpec::optional("RWY_END_LONG_MIN", FieldKind::Decimal),
    FieldSpec::optional("RWY_END_LONG_SEC", FieldKind::Decimal),
    FieldSpec::optional("RWY_END_LONG_HEMIS", FieldKind::Character),
    FieldSpec::optional("LONG_DECIMAL", FieldKind::Decimal),
    FieldSpec::optional("RWY_END_ELEV", FieldKind::Decimal),
    FieldSpec::optional("THR_CROSSING_HGT", FieldKind::Unsigned),
    FieldSpec::optional("VISUAL_GLIDE_PATH_ANGLE", FieldKind::Decimal),
    FieldSpec::optional("DISPLACED_THR_LAT_DEG", FieldKind::Decimal),
    FieldSpec::optional("DISPLACED_THR_LAT_MIN", FieldKind::Decimal),
    FieldSpec::optional("DISPLACED_THR_LAT_SEC", FieldKind::Decimal),
    FieldSpec::optional("DISPLACED_THR_LAT_HEMIS", FieldKind::Character),
    FieldSpec::optional("DISPLACED_THR_LONG_DEG", FieldKind::Decimal),
    FieldSpec::optional("DISPLACED_THR_LONG_MIN", FieldKind::Decimal),
    FieldSpec::optional("DISPLACED_THR_LONG_SEC", FieldKind::Decimal),
    FieldSpec::optional("DISPLACED_THR_LONG_HEMIS", FieldKind::Character),
    FieldSpec::optional("DISPLACED_THR_LEN", FieldKind::Unsigned),
    FieldSpec::optional("TDZ_ELEV", FieldKind::Decimal),
    FieldSpec::optional("VGSI_CODE", FieldKind::Code(VisualGlideslopeIndicator::is_known_code)),
    FieldSpec::optional("APCH_LGT_SYSTEM_CODE", FieldKind::Code(ApproachLightSystem::is_known_code)),
    FieldSpec::optional("RWY_END_LGTS_FLAG", FieldKind::Boolean),
    FieldSpec::optional("CNTRLN_LGTS_AVBL_FLAG", FieldKind::Boolean),
    FieldSpec::optional("TDZ_LGT_AVBL_FLAG", FieldKind::Boolean),
    FieldSpec::optional("OBSTN_TYPE", FieldKind::Text),
    FieldSpec::optional("OBSTN_MRKD_CODE", FieldKind::Code(ObstructionMarking::is_known_code)),
    FieldSpec::optional("FAR_PART_77_CODE", FieldKind::Code(Part77Category::is_known_code)),
    FieldSpec::optional("TKOF_RUN_AVBL", FieldKind::Unsigned),
    FieldSpec::optional("TKOF_DIST_AVBL", FieldKind::Unsigned),
    FieldSpec::optional("ACLT_STOP_DIST_AVBL", FieldKind::Unsigned),
    FieldSpec::optional("LNDG_DIST_AVBL", FieldKind::Unsigned),
];

entry_type!(
    /// One end of a runway: alignment, position, lighting and declared distances
    RunwayEndEntry,
    TableKind::AptRunwayEnd,
    FIELDS
);

/// Declared distances in feet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DeclaredDistances {
    pub takeoff_run: Option<u32>,
    pub takeoff_distance: Option<u32>,
    pub accelerate_stop: Option<u32>,
    pub landing_distance: Option<u32>,
}

impl RunwayEndEntry {
    pub fn runway_id(&self) -> Result<&str> {
        self.row.raw("RWY_ID")
    }

    /// End designator, e.g. `17L`
    pub fn end_id(&self) -> Result<&str> {
        self.row.raw("RWY_END_ID")
    }

    pub fn true_alignment(&self) -> Result<Option<u16>> {
        self.row.decode_optional("TRUE_ALIGNMENT")
    }

    pub fn ils_type(&self) -> Result<Enumerated<IlsType>> {
        self.row.decode_enumerated("ILS_TYPE")
    }

    pub fn right_hand_traffic(&self) -> Result<Option<bool>> {
        self.row.decode_optional("RIGHT_HAND_TRAFFIC_PAT_FLAG")
    }

    pub fn marking_type(&self) -> Result<Enumerated<RunwayMarkingType>> {
        self.row.decode_enumerated("RWY_MARKING_TYPE_CODE")
    }

    pub fn marking_condition(&self) -> Result<Enumerated<RunwayMarkingsCondition>> {
        self.row.decode_enumerated("RWY_MARKING_COND")
    }

    pub fn latitude(&self) -> Result<Option<CoordinateDms>> {
        coordinate(&self.row, END_LATITUDE)
    }

    pub fn longitude(&self) -> Result<Option<CoordinateDms>> {
        coordinate(&self.row, END_LONGITUDE)
    }

    /// Physical runway end position
    pub fn position(&self) -> Result<Option<LatitudeLongitude>> {
        Ok(LatitudeLongitude::make_optional(self.latitude()?, self.longitude()?))
    }

    pub fn position_decimal(&self) -> Result<Option<LatitudeLongitude>> {
        Ok(LatitudeLongitude::make_optional_decimal(
            self.row.decode_optional("LAT_DECIMAL")?,
            self.row.decode_optional("LONG_DECIMAL")?,
        ))
    }

    pub fn elevation(&self) -> Result<Option<f64>> {
        self.row.decode_optional("RWY_END_ELEV")
    }

    /// Threshold crossing height in feet AGL
    pub fn threshold_crossing_height(&self) -> Result<Option<u32>> {
        self.row.decode_optional("THR_CROSSING_HGT")
    }

    pub fn visual_glide_path_angle(&self) -> Result<Option<f64>> {
        self.row.decode_optional("VISUAL_GLIDE_PATH_ANGLE")
    }

    /// Displaced threshold position, absent when the threshold is not displaced
    pub fn displaced_threshold(&self) -> Result<Option<LatitudeLongitude>> {
        Ok(LatitudeLongitude::make_optional(
            coordinate(&self.row, THRESHOLD_LATITUDE)?,
            coordinate(&self.row, THRESHOLD_LONGITUDE)?,
        ))
    }

    pub fn displaced_threshold_length(&self) -> Result<Option<u32>> {
        self.row.decode_optional("DISPLACED_THR_LEN")
    }

    pub fn touchdown_zone_elevation(&self) -> Result<Option<f64>> {
        self.row.decode_optional("TDZ_ELEV")
    }

    pub fn visual_glideslope_indicator(&self) -> Result<Enumerated<VisualGlideslopeIndicator>> {
        self.row.decode_enumerated("VGSI_CODE")
    }

    pub fn approach_lights(&self) -> Result<Enumerated<ApproachLightSystem>> {
        self.row.decode_enumerated("APCH_LGT_SYSTEM_CODE")
    }

    pub fn end_lights(&self) -> Result<Option<bool>> {
        self.row.decode_optional("RWY_END_LGTS_FLAG")
    }

    pub fn centerline_lights(&self) -> Result<Option<bool>> {
        self.row.decode_optional("CNTRLN_LGTS_AVBL_FLAG")
    }

    pub fn touchdown_zone_lights(&self) -> Result<Option<bool>> {
        self.row.decode_optional("TDZ_LGT_AVBL_FLAG")
    }

    /// Controlling obstruction description, e.g. `TREES`
    pub fn obstruction(&self) -> Result<&str> {
        self.row.raw("OBSTN_TYPE")
    }

    pub fn obstruction_marking(&self) -> Result<Enumerated<ObstructionMarking>> {
        self.row.decode_enumerated("OBSTN_MRKD_CODE")
    }

    pub fn part77_category(&self) -> Result<Enumerated<Part77Category>> {
        self.row.decode_enumerated("FAR_PART_77_CODE")
    }

    pub fn declared_distances(&self) -> Result<DeclaredDistances> {
        Ok(DeclaredDistances {
            takeoff_run: self.row.decode_optional("TKOF_RUN_AVBL")?,
            takeoff_distance: self.row.decode_optional("TKOF_DIST_AVBL")?,
            accelerate_stop: self.row.decode_optional("ACLT_STOP_DIST_AVBL")?,
            landing_distance: self.row.decode_optional("LNDG_DIST_AVBL")?,
        })
    }
}
