//! Shared test utilities and fixtures for airport registry tests

use crate::app::services::airport_registry::TableKind;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub mod loader_tests;
pub mod tables_tests;

const SHARED: &str = r#""EFF_DATE","SITE_NO","SITE_TYPE_CODE","STATE_CODE","ARPT_ID","CITY","COUNTRY_CODE""#;

/// Airport base extract with two facilities; OKC carries an ICAO identifier
pub fn apt_base_csv() -> String {
    format!(
        r#"{SHARED},"ARPT_NAME","LAT_DEG","LAT_MIN","LAT_SEC","LAT_HEMIS","LONG_DEG","LONG_MIN","LONG_SEC","LONG_HEMIS","ELEV","OTHER_SERVICES","ICAO_ID"
"2023/01/26","17321.*A","A","OK","OKC","OKLAHOMA CITY","US","WILL ROGERS WORLD","35","23","35.3","N","97","36","2.4","W","1295.4","AFRT,CARGO","KOKC"
"2023/01/26","17348.*A","A","OK","PWA","OKLAHOMA CITY","US","WILEY POST","35","32","4.6","N","97","38","48.9","W","1300.2","","KPWA"
"2023/01/26","17400.*H","H","OK","1OK9","NORMAN","US","HOSPITAL HELIPORT","","","","","","","","","1150","","""#
    )
}

/// Runway extract: two runways at OKC, one at PWA
pub fn apt_runway_csv() -> String {
    format!(
        r#"{SHARED},"RWY_ID","RWY_LEN","RWY_WIDTH","SURFACE_TYPE_CODE"
"2023/01/26","17321.*A","A","OK","OKC","OKLAHOMA CITY","US","17R/35L","9802","150","CONC"
"2023/01/26","17348.*A","A","OK","PWA","OKLAHOMA CITY","US","17L/35R","7199","150","ASPH-CONC"
"2023/01/26","17321.*A","A","OK","OKC","OKLAHOMA CITY","US","13/31","7800","150","ASPH"
this line is truncated"#
    )
}

/// Runway end extract for OKC 17R/35L
pub fn apt_runway_end_csv() -> String {
    format!(
        r#"{SHARED},"RWY_ID","RWY_END_ID","TRUE_ALIGNMENT","RWY_END_LAT_DEG","RWY_END_LAT_MIN","RWY_END_LAT_SEC","RWY_END_LAT_HEMIS","RWY_END_LONG_DEG","RWY_END_LONG_MIN","RWY_END_LONG_SEC","RWY_END_LONG_HEMIS"
"2023/01/26","17321.*A","A","OK","OKC","OKLAHOMA CITY","US","17R/35L","17R","176","35","24","28.1","N","97","35","45.2","W"
"2023/01/26","17321.*A","A","OK","OKC","OKLAHOMA CITY","US","17R/35L","35L","356","35","22","51.0","N","97","35","44.1","W""#
    )
}

/// ILS base extract with one localizer at OKC
pub fn ils_base_csv() -> String {
    format!(
        r#"{SHARED},"RWY_END_ID","ILS_LOC_ID","SYSTEM_TYPE_CODE","CATEGORY","LOC_FREQ"
"2023/01/26","17321.*A","A","OK","OKC","OKLAHOMA CITY","US","17R","I-OKC","LS","III","110.7""#
    )
}

/// ILS remarks extract; the APT remarks extract deliberately has no OKC row
pub fn ils_remarks_csv() -> String {
    format!(
        r#"{SHARED},"RWY_END_ID","ILS_LOC_ID","SYSTEM_TYPE_CODE","TAB_NAME","ILS_COMP_TYPE_CODE","REF_COL_NAME","REF_COL_SEQ_NO","REMARK"
"2023/01/26","17321.*A","A","OK","OKC","OKLAHOMA CITY","US","17R","I-OKC","LS","ILS_GS","GS","","1","GLIDESLOPE UNUSABLE BELOW 1500""#
    )
}

pub fn apt_remarks_csv() -> String {
    format!(
        r#"{SHARED},"LEGACY_ELEMENT_NUMBER","TAB_NAME","REF_COL_NAME","ELEMENT","REF_COL_SEQ_NO","REMARK"
"2023/01/26","17348.*A","A","OK","PWA","OKLAHOMA CITY","US","A81","APT_BASE","","","1","DEER ON AND INVOF ARPT""#
    )
}

/// Write one extract into `dir`
pub fn write_extract(dir: &Path, kind: TableKind, content: &str) -> std::io::Result<()> {
    fs::write(dir.join(kind.file_name()), content)
}

/// Extract directory with base, runway, runway end, ILS base and both remarks files
///
/// The remaining extracts are absent and load as invalid tables.
pub fn create_partial_extract_dir() -> std::io::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    write_extract(dir, TableKind::AptBase, &apt_base_csv())?;
    write_extract(dir, TableKind::AptRunway, &apt_runway_csv())?;
    write_extract(dir, TableKind::AptRunwayEnd, &apt_runway_end_csv())?;
    write_extract(dir, TableKind::AptRemarks, &apt_remarks_csv())?;
    write_extract(dir, TableKind::IlsBase, &ils_base_csv())?;
    write_extract(dir, TableKind::IlsRemarks, &ils_remarks_csv())?;

    Ok(temp_dir)
}

/// Extract directory where every file exists; files without fixtures hold only a header
pub fn create_complete_extract_dir() -> std::io::Result<TempDir> {
    let temp_dir = create_partial_extract_dir()?;

    for kind in TableKind::ALL {
        let path = temp_dir.path().join(kind.file_name());
        if !path.exists() {
            fs::write(path, format!("{SHARED}\n"))?;
        }
    }

    Ok(temp_dir)
}
