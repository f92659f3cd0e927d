//! Tests for airport base entries and the shared record accessors

use super::*;
use crate::app::entries::codes::{AirportService, AirportStatus, LandingFacilityType, OwnershipType};
use crate::app::entries::{AirportBaseEntry, AirportRecord, ContactEntry};
use crate::app::services::field_decoding::Enumerated;
use chrono::NaiveDate;

fn create_base(extra: &[(&str, &str)]) -> AirportBaseEntry {
    create_entry(extra)
}

#[test]
fn test_shared_record_accessors() {
    let base = create_base(&[("ARPT_NAME", "WILL ROGERS WORLD")]);

    assert_eq!(
        base.effective_date().unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 26).unwrap()
    );
    assert_eq!(base.site_number().unwrap(), "17321.*A");
    assert_eq!(base.site_type().unwrap(), Enumerated::Matched(LandingFacilityType::Airport));
    assert_eq!(base.state_code().unwrap(), "OK");
    assert_eq!(base.location_identifier().unwrap(), "OKC");
    assert_eq!(base.city().unwrap(), "OKLAHOMA CITY");
    assert_eq!(base.country_code().unwrap(), "US");
}

#[test]
fn test_shared_accessors_on_child_entry() {
    let contact: ContactEntry = create_entry(&[("TITLE", "MANAGER")]);
    assert_eq!(contact.location_identifier().unwrap(), "OKC");
    assert_eq!(contact.title().unwrap(), "MANAGER");
}

#[test]
fn test_reference_point_dms() {
    let base = create_base(&[
        ("LAT_DEG", "35"),
        ("LAT_MIN", "23"),
        ("LAT_SEC", "35.3"),
        ("LAT_HEMIS", "N"),
        ("LONG_DEG", "97"),
        ("LONG_MIN", "36"),
        ("LONG_SEC", "2.4"),
        ("LONG_HEMIS", "W"),
    ]);

    let point = base.reference_point().unwrap().unwrap();
    assert!((point.latitude - 35.393_139).abs() < 1e-5);
    assert!((point.longitude + 97.600_667).abs() < 1e-5);
}

#[test]
fn test_reference_point_partial_components() {
    let base = create_base(&[
        ("LAT_DEG", "35"),
        ("LAT_MIN", "23"),
        ("LAT_SEC", ""),
        ("LAT_HEMIS", "N"),
        ("LONG_DEG", "97"),
        ("LONG_MIN", "36"),
        ("LONG_SEC", "2.4"),
        ("LONG_HEMIS", "W"),
    ]);

    assert!(base.latitude().unwrap().is_none());
    assert!(base.longitude().unwrap().is_some());
    assert!(base.reference_point().unwrap().is_none());
}

#[test]
fn test_southern_zero_degree_latitude_is_negative() {
    let base = create_base(&[
        ("LAT_DEG", "0"),
        ("LAT_MIN", "30"),
        ("LAT_SEC", "0"),
        ("LAT_HEMIS", "S"),
        ("LONG_DEG", "0"),
        ("LONG_MIN", "15"),
        ("LONG_SEC", "0"),
        ("LONG_HEMIS", "W"),
    ]);

    let point = base.reference_point().unwrap().unwrap();
    assert_eq!(point.latitude, -0.5);
    assert_eq!(point.longitude, -0.25);
}

#[test]
fn test_reference_point_decimal() {
    let base = create_base(&[("LAT_DECIMAL", "35.3931"), ("LONG_DECIMAL", "-97.6007")]);
    let point = base.reference_point_decimal().unwrap().unwrap();
    assert_eq!(point.latitude, 35.3931);
    assert_eq!(point.longitude, -97.6007);
}

#[test]
fn test_coded_columns() {
    let base = create_base(&[
        ("OWNERSHIP_TYPE_CODE", "PU"),
        ("ARPT_STATUS", "X"),
        ("TWR_TYPE_CODE", ""),
    ]);

    assert_eq!(base.ownership().unwrap(), Enumerated::Matched(OwnershipType::Public));
    assert_eq!(
        base.status().unwrap(),
        Enumerated::Unrecognized(AirportStatus::Unknown)
    );
    assert!(base.tower_type().unwrap().is_absent());
}

#[test]
fn test_services_with_unknown_code() {
    let base = create_base(&[("OTHER_SERVICES", "AFRT, BOGUS,CARGO")]);
    let services = base.services().unwrap();

    assert_eq!(services.len(), 3);
    assert_eq!(services[0], Enumerated::Matched(AirportService::AirFreight));
    assert!(services[1].is_unrecognized());
    assert_eq!(services[2], Enumerated::Matched(AirportService::CargoHandling));
}

#[test]
fn test_magnetic_variation_sign() {
    let west = create_base(&[("MAG_VARN", "3"), ("MAG_HEMIS", "W")]);
    assert_eq!(west.magnetic_variation().unwrap(), Some(-3));

    let east = create_base(&[("MAG_VARN", "12"), ("MAG_HEMIS", "E")]);
    assert_eq!(east.magnetic_variation().unwrap(), Some(12));

    let missing = create_base(&[("MAG_VARN", "12"), ("MAG_HEMIS", "")]);
    assert_eq!(missing.magnetic_variation().unwrap(), None);
}

#[test]
fn test_flags_and_fuel() {
    let base = create_base(&[
        ("LNDG_FEE_FLAG", "Y"),
        ("MEDICAL_USE_FLAG", ""),
        ("FUEL_TYPES", "100LL,A"),
        ("LAST_INSPECTION", "2022/06/14"),
    ]);

    assert_eq!(base.landing_fee().unwrap(), Some(true));
    assert_eq!(base.medical_use().unwrap(), None);
    assert_eq!(base.fuel_types().unwrap(), vec!["100LL", "A"]);
    assert_eq!(
        base.last_inspection().unwrap(),
        NaiveDate::from_ymd_opt(2022, 6, 14)
    );
}

#[test]
fn test_based_aircraft_counts() {
    let base = create_base(&[
        ("BASED_SINGLE_ENG", "52"),
        ("BASED_MULTI_ENG", "14"),
        ("BASED_JET_ENG", ""),
        ("BASED_HEL", "3"),
    ]);

    assert_eq!(base.based_aircraft().unwrap(), [Some(52), Some(14), None, Some(3)]);
}
