//! Airport remarks record (`APT_RMK`)

use super::codes::RemarksTable;
use crate::Result;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{Enumerated, Enumeration, FieldKind, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("LEGACY_ELEMENT_NUMBER", FieldKind::Text),
    FieldSpec::optional("TAB_NAME", FieldKind::Code(RemarksTable::is_known_code)),
    FieldSpec::optional("REF_COL_NAME", FieldKind::Text),
    FieldSpec::optional("ELEMENT", FieldKind::Text),
    FieldSpec::optional("REF_COL_SEQ_NO", FieldKind::Unsigned),
    FieldSpec::required("REMARK", FieldKind::Text),
];

entry_type!(
    /// Free-text remark attached to an airport element
    RemarksEntry,
    TableKind::AptRemarks,
    FIELDS
);

impl RemarksEntry {
    pub fn legacy_element_number(&self) -> Result<&str> {
        self.row.raw("LEGACY_ELEMENT_NUMBER")
    }

    /// Table the remark refers to
    pub fn table(&self) -> Result<Enumerated<RemarksTable>> {
        self.row.decode_enumerated("TAB_NAME")
    }

    /// Column the remark refers to
    pub fn reference_column(&self) -> Result<&str> {
        self.row.raw("REF_COL_NAME")
    }

    /// Element within the referenced table, e.g. a runway designator
    pub fn element(&self) -> Result<&str> {
        self.row.raw("ELEMENT")
    }

    pub fn sequence_number(&self) -> Result<Option<u32>> {
        self.row.decode_optional("REF_COL_SEQ_NO")
    }

    pub fn remark(&self) -> Result<&str> {
        self.row.raw("REMARK")
    }
}
