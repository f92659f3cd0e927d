//! Arresting gear record (`APT_ARS`)

use super::codes::ArrestingDevice;
use crate::Result;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("RWY_ID", FieldKind::Text),
    FieldSpec::required("RWY_END_ID", FieldKind::Text),
    FieldSpec::optional("ARREST_DEVICE_CODE", FieldKind::Code(ArrestingDevice::is_known_code)),
];

entry_type!(
    /// One arresting device installed on a runway end
    ArrestingEntry,
    TableKind::AptArresting,
    FIELDS
);

impl ArrestingEntry {
    pub fn runway_id(&self) -> Result<&str> {
        self.row.raw("RWY_ID")
    }

    pub fn runway_end_id(&self) -> Result<&str> {
        self.row.raw("RWY_END_ID")
    }

    pub fn device(&self) -> Result<Enumerated<ArrestingDevice>> {
        self.row.decode_enumerated("ARREST_DEVICE_CODE")
    }
}
