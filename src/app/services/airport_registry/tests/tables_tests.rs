//! Tests for the extract catalog

use crate::app::services::airport_registry::TableKind;
use std::collections::HashSet;

#[test]
fn test_all_kinds_have_distinct_files() {
    let files: HashSet<&str> = TableKind::ALL.iter().map(|kind| kind.file_name()).collect();
    assert_eq!(files.len(), TableKind::ALL.len());
}

#[test]
fn test_positions_follow_load_order() {
    for (position, kind) in TableKind::ALL.iter().enumerate() {
        assert_eq!(kind.position(), position);
    }
}

#[test]
fn test_table_names() {
    assert_eq!(TableKind::AptRunwayEnd.table_name(), "APT_RWY_END");
    assert_eq!(TableKind::IlsGlideslope.to_string(), "ILS_GS");
    assert_eq!(TableKind::AptBase.file_name(), "APT_BASE.csv");
}

#[test]
fn test_parent_and_ils_classification() {
    assert!(TableKind::AptBase.is_parent());
    assert!(!TableKind::AptRunway.is_parent());

    let ils: Vec<TableKind> = TableKind::ALL.into_iter().filter(|k| k.is_ils()).collect();
    assert_eq!(ils.len(), 5);
    assert!(!TableKind::AptRemarks.is_ils());
    assert!(TableKind::IlsRemarks.is_ils());
}

#[test]
fn test_fields_include_shared_columns() {
    for kind in TableKind::ALL {
        let columns: Vec<&str> = kind.fields().iter().map(|spec| spec.column).collect();
        assert!(columns.contains(&"ARPT_ID"), "{} lacks ARPT_ID", kind);
        assert!(columns.contains(&"EFF_DATE"), "{} lacks EFF_DATE", kind);
    }

    let ils_columns: Vec<&str> = TableKind::IlsMarker
        .fields()
        .iter()
        .map(|spec| spec.column)
        .collect();
    assert!(ils_columns.contains(&"ILS_LOC_ID"));
}

#[test]
fn test_fields_have_no_duplicate_columns() {
    for kind in TableKind::ALL {
        let fields = kind.fields();
        let columns: HashSet<&str> = fields.iter().map(|spec| spec.column).collect();
        assert_eq!(columns.len(), fields.len(), "{} repeats a column", kind);
    }
}
