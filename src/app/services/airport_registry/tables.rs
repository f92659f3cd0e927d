//! The twelve NASR extracts a registry joins

use crate::app::entries::{
    AirportBaseEntry, ArrestingEntry, AttendanceEntry, ContactEntry, DmeEntry, Entry,
    GlideslopeEntry, IlsBaseEntry, IlsRemarksEntry, MarkerEntry, RemarksEntry, RunwayEndEntry,
    RunwayEntry,
};
use crate::app::services::field_decoding::FieldSpec;
use crate::constants::files;
use serde::Serialize;
use std::fmt;

/// One extract file of the NASR CSV distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TableKind {
    AptBase,
    AptArresting,
    AptAttendance,
    AptContact,
    AptRemarks,
    AptRunway,
    AptRunwayEnd,
    IlsBase,
    IlsGlideslope,
    IlsDme,
    IlsMarker,
    IlsRemarks,
}

impl TableKind {
    /// Every extract, parent first, in load order
    pub const ALL: [TableKind; 12] = [
        TableKind::AptBase,
        TableKind::AptArresting,
        TableKind::AptAttendance,
        TableKind::AptContact,
        TableKind::AptRemarks,
        TableKind::AptRunway,
        TableKind::AptRunwayEnd,
        TableKind::IlsBase,
        TableKind::IlsGlideslope,
        TableKind::IlsDme,
        TableKind::IlsMarker,
        TableKind::IlsRemarks,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::AptBase => files::APT_BASE,
            TableKind::AptArresting => files::APT_ARRESTING,
            TableKind::AptAttendance => files::APT_ATTENDANCE,
            TableKind::AptContact => files::APT_CONTACT,
            TableKind::AptRemarks => files::APT_REMARKS,
            TableKind::AptRunway => files::APT_RUNWAY,
            TableKind::AptRunwayEnd => files::APT_RUNWAY_END,
            TableKind::IlsBase => files::ILS_BASE,
            TableKind::IlsGlideslope => files::ILS_GLIDESLOPE,
            TableKind::IlsDme => files::ILS_DME,
            TableKind::IlsMarker => files::ILS_MARKER,
            TableKind::IlsRemarks => files::ILS_REMARKS,
        }
    }

    /// File name without the `.csv` extension, e.g. `APT_RWY`
    pub fn table_name(self) -> &'static str {
        let file_name = self.file_name();
        file_name.strip_suffix(".csv").unwrap_or(file_name)
    }

    /// Whether this is the parent extract every other one joins to
    pub fn is_parent(self) -> bool {
        self == TableKind::AptBase
    }

    pub fn is_ils(self) -> bool {
        matches!(
            self,
            TableKind::IlsBase
                | TableKind::IlsGlideslope
                | TableKind::IlsDme
                | TableKind::IlsMarker
                | TableKind::IlsRemarks
        )
    }

    /// Column to type mapping of the entry read from this extract
    pub fn fields(self) -> Vec<FieldSpec> {
        match self {
            TableKind::AptBase => AirportBaseEntry::schema(),
            TableKind::AptArresting => ArrestingEntry::schema(),
            TableKind::AptAttendance => AttendanceEntry::schema(),
            TableKind::AptContact => ContactEntry::schema(),
            TableKind::AptRemarks => RemarksEntry::schema(),
            TableKind::AptRunway => RunwayEntry::schema(),
            TableKind::AptRunwayEnd => RunwayEndEntry::schema(),
            TableKind::IlsBase => IlsBaseEntry::schema(),
            TableKind::IlsGlideslope => GlideslopeEntry::schema(),
            TableKind::IlsDme => DmeEntry::schema(),
            TableKind::IlsMarker => MarkerEntry::schema(),
            TableKind::IlsRemarks => IlsRemarksEntry::schema(),
        }
    }

    /// Slot of this extract in a registry's table list
    pub(crate) fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
