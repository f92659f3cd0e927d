//! Tests for entry schemas against the field inspection rules

use super::*;
use crate::app::entries::{
    AirportBaseEntry, COMMON_FIELDS, ILS_SHARED_FIELDS, IlsRemarksEntry, RunwayEntry,
};
use crate::app::services::field_decoding::{IssueKind, inspect_row, missing_columns};

#[test]
fn test_schema_starts_with_shared_fields() {
    let schema = RunwayEntry::schema();
    let columns: Vec<&str> = schema.iter().map(|spec| spec.column).collect();

    assert_eq!(&columns[..COMMON_FIELDS.len()], &[
        "EFF_DATE",
        "SITE_NO",
        "SITE_TYPE_CODE",
        "STATE_CODE",
        "ARPT_ID",
        "CITY",
        "COUNTRY_CODE",
    ]);
    assert!(columns.contains(&"RWY_LEN"));
}

#[test]
fn test_ils_schema_uses_ils_shared_fields() {
    let schema = IlsRemarksEntry::schema();
    assert_eq!(schema.len(), ILS_SHARED_FIELDS.len() + IlsRemarksEntry::FIELDS.len());
    assert_eq!(schema[ILS_SHARED_FIELDS.len() - 1].column, "SYSTEM_TYPE_CODE");
}

#[test]
fn test_missing_columns_for_partial_row() {
    let runway: RunwayEntry = create_entry(&[("RWY_ID", "17R/35L"), ("RWY_LEN", "9802")]);
    let missing = missing_columns(runway.row().header(), &RunwayEntry::schema());

    assert!(missing.contains(&"RWY_WIDTH"));
    assert!(!missing.contains(&"RWY_LEN"));
    assert!(!missing.contains(&"ARPT_ID"));
}

#[test]
fn test_inspect_entry_row() {
    let base: AirportBaseEntry = create_entry(&[("ARPT_NAME", ""), ("TPA", "ABC")]);
    let fields: Vec<_> = AirportBaseEntry::FIELDS
        .iter()
        .filter(|spec| base.row().header().contains(spec.column))
        .copied()
        .collect();

    let issues = inspect_row(base.row(), &fields).unwrap();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].column, "ARPT_NAME");
    assert_eq!(issues[0].kind, IssueKind::MissingRequired);
    assert_eq!(issues[1].column, "TPA");
    assert_eq!(
        issues[1].kind,
        IssueKind::Unparsable { expected: "non-negative integer" }
    );
}

#[test]
fn test_inspect_shared_codes() {
    let base: AirportBaseEntry = create_entry(&[]);
    assert!(inspect_row(base.row(), COMMON_FIELDS).unwrap().is_empty());
}

#[test]
fn test_inspection_agrees_with_runway_accessors() {
    let runway: RunwayEntry = create_entry(&[
        ("RWY_ID", "17R/35L"),
        ("RWY_LEN", "-100"),
        ("RWY_WIDTH", "5000000000"),
    ]);
    let fields: Vec<_> = RunwayEntry::FIELDS
        .iter()
        .filter(|spec| runway.row().header().contains(spec.column))
        .copied()
        .collect();

    let issues = inspect_row(runway.row(), &fields).unwrap();
    let columns: Vec<&str> = issues.iter().map(|issue| issue.column).collect();

    assert_eq!(columns, vec!["RWY_LEN", "RWY_WIDTH"]);
    assert!(runway.length().is_err());
    assert!(runway.width().is_err());
}
