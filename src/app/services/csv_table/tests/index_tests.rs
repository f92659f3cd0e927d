//! Tests for cached column indices

use super::super::index::ColumnIndex;
use super::super::table::Table;
use super::create_runway_table;

#[test]
fn test_index_build() {
    let index = ColumnIndex::build("ARPT_ID", ["ABC", "ABC", "XYZ", "ABC"]);

    assert_eq!(index.column(), "ARPT_ID");
    assert_eq!(index.positions("ABC"), &[0, 1, 3]);
    assert_eq!(index.positions("XYZ"), &[2]);
    assert!(index.positions("QQQ").is_empty());
    assert_eq!(index.distinct_values(), 2);
}

#[test]
fn test_index_cleans_query_value() {
    let index = ColumnIndex::build("ARPT_ID", ["ABC"]);

    assert_eq!(index.positions(" \"ABC\" "), &[0]);
    assert!(index.contains("\"ABC\""));
    assert!(!index.contains("abc"));
}

#[test]
fn test_where_equals_is_ascending() {
    let text = "ARPT_ID,N\nB,1\nA,2\nB,3\nA,4\nB,5";
    let table = Table::parse_text("T", text).unwrap();

    let positions = table.where_equals("ARPT_ID", "B").unwrap();
    assert_eq!(positions, &[0, 2, 4]);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_where_equals_empty_iff_no_match() {
    let table = create_runway_table();

    for value in ["ABC", "XYZ", "NOPE"] {
        let positions = table.where_equals("ARPT_ID", value).unwrap();
        let expected = table.column("ARPT_ID").unwrap().iter().filter(|v| **v == value).count();
        assert_eq!(positions.len(), expected);
    }
}

#[test]
fn test_index_is_cached() {
    let table = create_runway_table();

    let first = table.index("ARPT_ID").unwrap() as *const ColumnIndex;
    let second = table.index("ARPT_ID").unwrap() as *const ColumnIndex;
    assert_eq!(first, second);
}

#[test]
fn test_index_shared_across_threads() {
    let table = create_runway_table();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(table.where_equals("ARPT_ID", "ABC").unwrap().len(), 2);
            });
        }
    });
}
