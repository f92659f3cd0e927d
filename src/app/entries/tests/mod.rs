//! Test utilities for entry testing

use crate::app::entries::Entry;
use crate::app::services::csv_table::{Header, Row};
use std::sync::Arc;

mod airport_base_tests;
mod schema_tests;

/// Common columns for a facility, followed by `extra`
pub fn create_entry<E: Entry>(extra: &[(&str, &str)]) -> E {
    let shared = [
        ("EFF_DATE", "2023/01/26"),
        ("SITE_NO", "17321.*A"),
        ("SITE_TYPE_CODE", "A"),
        ("STATE_CODE", "OK"),
        ("ARPT_ID", "OKC"),
        ("CITY", "OKLAHOMA CITY"),
        ("COUNTRY_CODE", "US"),
    ];

    let cells: Vec<(&str, &str)> = shared.iter().chain(extra).copied().collect();
    let header = Arc::new(Header::new(cells.iter().map(|(name, _)| *name)).unwrap());
    let values: Vec<&str> = cells.iter().map(|(_, value)| *value).collect();

    E::from_row(Row::new(&values, header).unwrap())
}
