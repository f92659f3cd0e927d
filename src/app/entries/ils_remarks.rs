//! ILS remarks record (`ILS_RMK`)

use super::IlsRecord;
use crate::Result;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{FieldKind, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("TAB_NAME", FieldKind::Text),
    FieldSpec::optional("ILS_COMP_TYPE_CODE", FieldKind::Text),
    FieldSpec::optional("REF_COL_NAME", FieldKind::Text),
    FieldSpec::optional("REF_COL_SEQ_NO", FieldKind::Unsigned),
    FieldSpec::required("REMARK", FieldKind::Text),
];

entry_type!(
    /// Free-text remark attached to an ILS component
    IlsRemarksEntry,
    TableKind::IlsRemarks,
    FIELDS,
    shared = super::ILS_SHARED_FIELDS
);

impl IlsRecord for IlsRemarksEntry {}

impl IlsRemarksEntry {
    pub fn table(&self) -> Result<&str> {
        self.row.raw("TAB_NAME")
    }

    /// Component the remark refers to, e.g. `GS` or `OM`
    pub fn component_type(&self) -> Result<&str> {
        self.row.raw("ILS_COMP_TYPE_CODE")
    }

    pub fn reference_column(&self) -> Result<&str> {
        self.row.raw("REF_COL_NAME")
    }

    pub fn sequence_number(&self) -> Result<Option<u32>> {
        self.row.decode_optional("REF_COL_SEQ_NO")
    }

    pub fn remark(&self) -> Result<&str> {
        self.row.raw("REMARK")
    }
}
