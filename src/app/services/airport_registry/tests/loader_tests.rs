//! Tests for airport registry loading

use super::*;
use crate::Error;
use crate::app::services::airport_registry::AirportRegistry;
use crate::config::RegistryConfig;

#[test]
fn test_load_partial_directory() {
    let temp_dir = create_partial_extract_dir().unwrap();
    let config = RegistryConfig::new(temp_dir.path());

    let (registry, stats) = AirportRegistry::load(&config).unwrap();

    assert_eq!(stats.tables_loaded, 6);
    assert_eq!(stats.tables_invalid, 6);
    assert_eq!(stats.errors.len(), 6);
    assert!(stats.has_errors());
    assert!(!registry.is_initialized());

    // 3 base + 3 runway + 2 runway end + 1 APT remark + 1 ILS + 1 ILS remark
    assert_eq!(stats.rows_admitted, 11);
    assert_eq!(stats.lines_discarded, 1);
}

#[test]
fn test_load_records_missing_file_names() {
    let temp_dir = create_partial_extract_dir().unwrap();
    let (_registry, stats) = AirportRegistry::load(&RegistryConfig::new(temp_dir.path())).unwrap();

    assert!(stats.errors.iter().any(|e| e.starts_with("APT_ATT.csv")));
    assert!(stats.errors.iter().any(|e| e.starts_with("ILS_DME.csv")));
    assert!(!stats.errors.iter().any(|e| e.starts_with("APT_BASE.csv")));
}

#[test]
fn test_load_complete_directory() {
    let temp_dir = create_complete_extract_dir().unwrap();
    let (registry, stats) = AirportRegistry::load(&RegistryConfig::new(temp_dir.path())).unwrap();

    assert!(registry.is_initialized());
    assert_eq!(stats.tables_loaded, 12);
    assert_eq!(stats.tables_invalid, 0);
    assert!(!stats.has_errors());
    assert!(registry.invalid_tables().is_empty());
}

#[test]
fn test_load_empty_file_is_invalid() {
    let temp_dir = create_complete_extract_dir().unwrap();
    write_extract(temp_dir.path(), TableKind::IlsMarker, "").unwrap();

    let (registry, stats) = AirportRegistry::load(&RegistryConfig::new(temp_dir.path())).unwrap();

    assert!(!registry.is_initialized());
    assert_eq!(registry.invalid_tables(), vec![TableKind::IlsMarker]);
    assert_eq!(stats.tables_invalid, 1);
    assert!(stats.errors[0].contains("no header line"));
}

#[test]
fn test_load_duplicate_header_is_invalid() {
    let temp_dir = create_complete_extract_dir().unwrap();
    write_extract(
        temp_dir.path(),
        TableKind::AptContact,
        "\"ARPT_ID\",\"TITLE\",\"TITLE\"\n\"OKC\",\"MANAGER\",\"OWNER\"\n",
    )
    .unwrap();

    let (registry, stats) = AirportRegistry::load(&RegistryConfig::new(temp_dir.path())).unwrap();

    assert!(!registry.table(TableKind::AptContact).is_valid());
    assert_eq!(stats.tables_invalid, 1);
    assert!(stats.errors[0].contains("TITLE"));
}

#[test]
fn test_load_nonexistent_directory() {
    let config = RegistryConfig::new("/nonexistent/nasr/extracts");
    let result = AirportRegistry::load(&config);
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_load_with_prebuilt_indices() {
    let temp_dir = create_partial_extract_dir().unwrap();
    let config = RegistryConfig::new(temp_dir.path()).with_prebuilt_indices();

    let (registry, stats) = AirportRegistry::load(&config).unwrap();

    assert_eq!(stats.indices_built, 6);
    assert_eq!(
        registry
            .table(TableKind::AptRunway)
            .where_equals("ARPT_ID", "OKC")
            .unwrap(),
        &[0, 2]
    );
}

#[test]
fn test_prebuild_reports_missing_key_column() {
    let temp_dir = create_complete_extract_dir().unwrap();
    write_extract(temp_dir.path(), TableKind::IlsDme, "\"SITE_NO\",\"CHANNEL\"\n").unwrap();

    let config = RegistryConfig::new(temp_dir.path()).with_prebuilt_indices();
    let (_registry, stats) = AirportRegistry::load(&config).unwrap();

    assert_eq!(stats.tables_loaded, 12);
    assert_eq!(stats.indices_built, 11);
    assert!(stats.errors.iter().any(|e| e.starts_with("ILS_DME.csv")));
}

#[test]
fn test_load_with_progress_bar() {
    let temp_dir = create_partial_extract_dir().unwrap();
    let config = RegistryConfig::new(temp_dir.path()).with_progress();

    let (registry, _stats) = AirportRegistry::load(&config).unwrap();
    assert!(registry.table(TableKind::AptBase).is_valid());
}

#[test]
fn test_from_tables_fills_missing_slots() {
    let registry = AirportRegistry::from_tables(
        Vec::new(),
        std::path::PathBuf::from("/data"),
        "ARPT_ID",
        "ICAO_ID",
    );

    assert_eq!(registry.invalid_tables().len(), 12);
    assert_eq!(registry.table(TableKind::IlsRemarks).name(), "ILS_RMK");
    assert_eq!(registry.key_column(), "ARPT_ID");
}
