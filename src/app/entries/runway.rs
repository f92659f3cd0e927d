//! Runway record (`APT_RWY`)

use super::codes::{
    PavementType, RunwayDeterminationMethod, RunwayLightsEdgeIntensity, SurfaceCondition,
    SurfaceTreatment, SurfaceType,
};
use crate::Result;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One material, or two joined by `-` or `/` (e.g. `ASPH-CONC`, `TURF/GRVL`)
static SURFACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^-/\s]+)(?:[-/]([^-/\s]+))?$").expect("surface pattern is valid"));

/// Written with a hyphen but a single material
const ROOF_TOP: &str = "ROOF-TOP";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("RWY_ID", FieldKind::Text),
    FieldSpec::required("RWY_LEN", FieldKind::Unsigned),
    FieldSpec::required("RWY_WIDTH", FieldKind::Unsigned),
    FieldSpec::optional("SURFACE_TYPE_CODE", FieldKind::Text),
    FieldSpec::optional("COND", FieldKind::Code(SurfaceCondition::is_known_code)),
    FieldSpec::optional("TREATMENT_CODE", FieldKind::Code(SurfaceTreatment::is_known_code)),
    FieldSpec::optional("PCN", FieldKind::Unsigned),
    FieldSpec::optional("PAVEMENT_TYPE_CODE", FieldKind::Code(PavementType::is_known_code)),
    FieldSpec::optional("SUBGRADE_STRENGTH_CODE", FieldKind::Character),
    FieldSpec::optional("TIRE_PRES_CODE", FieldKind::Character),
    FieldSpec::optional("DTRM_METHOD_CODE", FieldKind::Code(RunwayDeterminationMethod::is_known_code)),
    FieldSpec::optional("RWY_LGT_CODE", FieldKind::Code(RunwayLightsEdgeIntensity::is_known_code)),
    FieldSpec::optional("GROSS_WT_SW", FieldKind::Decimal),
    FieldSpec::optional("GROSS_WT_DW", FieldKind::Decimal),
    FieldSpec::optional("GROSS_WT_DTW", FieldKind::Decimal),
    FieldSpec::optional("GROSS_WT_DDTW", FieldKind::Decimal),
];

entry_type!(
    /// One runway: dimensions, surface and weight bearing capacity
    RunwayEntry,
    TableKind::AptRunway,
    FIELDS
);

/// Primary and optional secondary surface material of a runway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceComposition {
    pub primary: Enumerated<SurfaceType>,
    pub secondary: Enumerated<SurfaceType>,
}

impl SurfaceComposition {
    /// Split a surface code into its materials
    ///
    /// Non-empty text that is not one or two materials yields an
    /// unrecognized primary and an absent secondary.
    pub fn parse(text: &str) -> Self {
        let classify = |code: &str| Enumerated::classify(code, &SurfaceType::TABLE, SurfaceType::UNKNOWN);

        if text == ROOF_TOP {
            return Self {
                primary: classify(text),
                secondary: Enumerated::Absent,
            };
        }

        match SURFACE_PATTERN.captures(text) {
            Some(captures) => Self {
                primary: classify(captures.get(1).map_or("", |m| m.as_str())),
                secondary: classify(captures.get(2).map_or("", |m| m.as_str())),
            },
            None if text.is_empty() => Self {
                primary: Enumerated::Absent,
                secondary: Enumerated::Absent,
            },
            None => Self {
                primary: Enumerated::Unrecognized(SurfaceType::UNKNOWN),
                secondary: Enumerated::Absent,
            },
        }
    }
}

impl RunwayEntry {
    /// Runway designator, e.g. `17L/35R`
    pub fn runway_id(&self) -> Result<&str> {
        self.row.raw("RWY_ID")
    }

    /// Length in feet
    pub fn length(&self) -> Result<u32> {
        self.row.decode("RWY_LEN")
    }

    /// Width in feet
    pub fn width(&self) -> Result<u32> {
        self.row.decode("RWY_WIDTH")
    }

    pub fn surface(&self) -> Result<SurfaceComposition> {
        Ok(SurfaceComposition::parse(self.row.raw("SURFACE_TYPE_CODE")?))
    }

    pub fn condition(&self) -> Result<Enumerated<SurfaceCondition>> {
        self.row.decode_enumerated("COND")
    }

    pub fn treatment(&self) -> Result<Enumerated<SurfaceTreatment>> {
        self.row.decode_enumerated("TREATMENT_CODE")
    }

    /// Pavement classification number
    pub fn pcn(&self) -> Result<Option<u32>> {
        self.row.decode_optional("PCN")
    }

    pub fn pavement_type(&self) -> Result<Enumerated<PavementType>> {
        self.row.decode_enumerated("PAVEMENT_TYPE_CODE")
    }

    pub fn subgrade_strength(&self) -> Result<Option<char>> {
        self.row.decode_optional("SUBGRADE_STRENGTH_CODE")
    }

    pub fn tire_pressure(&self) -> Result<Option<char>> {
        self.row.decode_optional("TIRE_PRES_CODE")
    }

    pub fn determination_method(&self) -> Result<Enumerated<RunwayDeterminationMethod>> {
        self.row.decode_enumerated("DTRM_METHOD_CODE")
    }

    pub fn edge_lights(&self) -> Result<Enumerated<RunwayLightsEdgeIntensity>> {
        self.row.decode_enumerated("RWY_LGT_CODE")
    }

    /// Gross weight limits in thousands of pounds: single, dual, two dual, double dual tandem
    pub fn gross_weight_limits(&self) -> Result<[Option<f64>; 4]> {
        Ok([
            self.row.decode_optional("GROSS_WT_SW")?,
            self.row.decode_optional("GROSS_WT_DW")?,
            self.row.decode_optional("GROSS_WT_DTW")?,
            self.row.decode_optional("GROSS_WT_DDTW")?,
        ])
    }
}
