//! Attendance schedule record (`APT_ATT`)

use crate::Result;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{FieldKind, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("SKED_SEQ_NO", FieldKind::Unsigned),
    FieldSpec::optional("MONTH", FieldKind::Text),
    FieldSpec::optional("DAY", FieldKind::Text),
    FieldSpec::optional("HOUR", FieldKind::Text),
];

entry_type!(
    /// One attended period, e.g. `ALL` / `MON-FRI` / `0800-1700`
    AttendanceEntry,
    TableKind::AptAttendance,
    FIELDS
);

impl AttendanceEntry {
    pub fn sequence_number(&self) -> Result<Option<u32>> {
        self.row.decode_optional("SKED_SEQ_NO")
    }

    pub fn months(&self) -> Result<&str> {
        self.row.raw("MONTH")
    }

    pub fn days(&self) -> Result<&str> {
        self.row.raw("DAY")
    }

    pub fn hours(&self) -> Result<&str> {
        self.row.raw("HOUR")
    }
}
