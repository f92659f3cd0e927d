//! Tests for code tables and tri-state enumeration outcomes

use super::super::enumerated::{Enumerated, Enumeration};
use super::{TestSurface, create_row};
use crate::app::services::csv_table::Table;

#[test]
fn test_lookup_table_forward_and_inverse() {
    assert_eq!(TestSurface::from_code("ASPH"), Some(TestSurface::Asphalt));
    assert_eq!(TestSurface::from_code("GRAVEL"), Some(TestSurface::Gravel));
    assert_eq!(TestSurface::from_code("asph"), None);

    assert_eq!(TestSurface::Gravel.code(), Some("GRVL"));
    assert_eq!(TestSurface::Unknown.code(), None);
    assert_eq!(TestSurface::TABLE.len(), 5);
    assert_eq!(
        TestSurface::TABLE.codes().collect::<Vec<_>>(),
        vec!["ASPH", "CONC", "TURF", "GRVL", "GRAVEL"]
    );
}

#[test]
fn test_classify() {
    let table = TestSurface::TABLE;

    assert_eq!(
        Enumerated::classify("CONC", &table, TestSurface::Unknown),
        Enumerated::Matched(TestSurface::Concrete)
    );
    assert_eq!(
        Enumerated::classify("WATER", &table, TestSurface::Unknown),
        Enumerated::Unrecognized(TestSurface::Unknown)
    );
    assert_eq!(
        Enumerated::classify("", &table, TestSurface::Unknown),
        Enumerated::<TestSurface>::Absent
    );
}

#[test]
fn test_projections() {
    let matched = Enumerated::Matched(TestSurface::Turf);
    let unrecognized = Enumerated::Unrecognized(TestSurface::Unknown);
    let absent: Enumerated<TestSurface> = Enumerated::Absent;

    assert_eq!(matched.as_option(), Some(TestSurface::Turf));
    assert_eq!(unrecognized.as_option(), Some(TestSurface::Unknown));
    assert_eq!(absent.as_option(), None);

    assert_eq!(matched.matched(), Some(TestSurface::Turf));
    assert_eq!(unrecognized.matched(), None);

    assert_eq!(absent.value_or(TestSurface::Asphalt), TestSurface::Asphalt);
    assert_eq!(unrecognized.value_or(TestSurface::Asphalt), TestSurface::Unknown);

    assert!(matched.is_matched());
    assert!(unrecognized.is_unrecognized());
    assert!(absent.is_absent());
}

#[test]
fn test_row_decode_enumerated_uses_own_table() {
    let row = create_row(&[("SURFACE", "\"TURF\""), ("OTHER", "SAND"), ("EMPTY", "")]);

    assert_eq!(
        row.decode_enumerated::<TestSurface, _>("SURFACE").unwrap(),
        Enumerated::Matched(TestSurface::Turf)
    );
    assert!(row.decode_enumerated::<TestSurface, _>("OTHER").unwrap().is_unrecognized());
    assert!(row.decode_enumerated::<TestSurface, _>("EMPTY").unwrap().is_absent());
    assert!(row.decode_enumerated::<TestSurface, _>("MISSING").is_err());
}

#[test]
fn test_row_decode_repeated_enumerated() {
    let row = create_row(&[("LIST", "ASPH, CONC,SAND")]);

    let values = row.decode_repeated_enumerated::<TestSurface, _>("LIST").unwrap();
    assert_eq!(
        values,
        vec![
            Enumerated::Matched(TestSurface::Asphalt),
            Enumerated::Matched(TestSurface::Concrete),
            Enumerated::Unrecognized(TestSurface::Unknown),
        ]
    );
}

#[test]
fn test_matched_values_round_trip_through_inverse() {
    let text = "ID,SURFACE\n1,ASPH\n2,CONC\n3,\n4,WATER\n5,TURF\n6,ASPH";
    let table = Table::parse_text("APT_RWY", text).unwrap();

    let mut matched = 0;
    for row in table.rows() {
        let original = row.raw("SURFACE").unwrap();
        if let Enumerated::Matched(value) = row.decode_enumerated::<TestSurface, _>("SURFACE").unwrap() {
            assert_eq!(TestSurface::TABLE.code_of(value), Some(original));
            matched += 1;
        }
    }
    assert_eq!(matched, 4);
}
