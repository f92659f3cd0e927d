//! Facility contact record (`APT_CON`)

use crate::Result;
use crate::app::services::airport_registry::TableKind;
use crate::app::services::field_decoding::{FieldKind, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("TITLE", FieldKind::Text),
    FieldSpec::optional("NAME", FieldKind::Text),
    FieldSpec::optional("ADDRESS1", FieldKind::Text),
    FieldSpec::optional("ADDRESS2", FieldKind::Text),
    FieldSpec::optional("TITLE_CITY", FieldKind::Text),
    FieldSpec::optional("STATE", FieldKind::Text),
    FieldSpec::optional("ZIP_CODE", FieldKind::Unsigned),
    FieldSpec::optional("ZIP_PLUS_FOUR", FieldKind::UnsignedShort),
    FieldSpec::optional("PHONE_NO", FieldKind::Text),
];

entry_type!(
    /// Owner or manager contact for a facility
    ContactEntry,
    TableKind::AptContact,
    FIELDS
);

impl ContactEntry {
    /// Role of the contact, e.g. `OWNER` or `MANAGER`
    pub fn title(&self) -> Result<&str> {
        self.row.raw("TITLE")
    }

    pub fn name(&self) -> Result<&str> {
        self.row.raw("NAME")
    }

    pub fn address(&self) -> Result<[&str; 2]> {
        Ok([self.row.raw("ADDRESS1")?, self.row.raw("ADDRESS2")?])
    }

    /// City of the contact's mailing address
    pub fn title_city(&self) -> Result<&str> {
        self.row.raw("TITLE_CITY")
    }

    pub fn state(&self) -> Result<&str> {
        self.row.raw("STATE")
    }

    pub fn zip_code(&self) -> Result<Option<u32>> {
        self.row.decode_optional("ZIP_CODE")
    }

    pub fn zip_plus_four(&self) -> Result<Option<u16>> {
        self.row.decode_optional("ZIP_PLUS_FOUR")
    }

    pub fn phone(&self) -> Result<&str> {
        self.row.raw("PHONE_NO")
    }
}
