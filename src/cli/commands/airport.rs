//! Airport command implementation
//!
//! Assembles one facility from the registry and prints a summary of its base
//! record, runways, runway ends, ILS systems and remarks.

use super::shared::{load_registry, print_field, print_heading, print_json};
use crate::app::entries::codes::{IlsCategory, IlsSystemType, SurfaceType};
use crate::app::entries::{AirportRecord, IlsRecord};
use crate::app::models::LatitudeLongitude;
use crate::app::services::airport_registry::Airport;
use crate::app::services::field_decoding::Enumerated;
use crate::cli::args::{AirportArgs, OutputFormat};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::*;
use serde::Serialize;
use tracing::info;

/// Facility summary printed by the airport command
#[derive(Debug, Serialize)]
pub struct AirportReport {
    pub identifier: String,
    pub icao: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub effective_date: NaiveDate,
    pub reference_point: Option<LatitudeLongitude>,
    pub elevation: Option<f64>,
    pub runways: Vec<RunwayReport>,
    pub ils: Vec<IlsReport>,
    pub remarks: Vec<String>,
    pub ils_remarks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RunwayReport {
    pub id: String,
    pub length: u32,
    pub width: Option<u32>,
    pub surface: Enumerated<SurfaceType>,
    pub secondary_surface: Enumerated<SurfaceType>,
    pub ends: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IlsReport {
    pub identifier: String,
    pub runway_end: String,
    pub system_type: Enumerated<IlsSystemType>,
    pub category: Enumerated<IlsCategory>,
    pub frequency: Option<f64>,
}

impl AirportReport {
    /// Decode the fields shown in a summary
    pub fn from_airport(airport: &Airport) -> crate::Result<Self> {
        let base = &airport.base;

        let mut runways = Vec::with_capacity(airport.runways.len());
        for runway in &airport.runways {
            let id = runway.runway_id()?;
            let surface = runway.surface()?;
            let mut ends = Vec::new();
            for end in airport.ends_of_runway(id)? {
                ends.push(end.end_id()?.to_string());
            }

            runways.push(RunwayReport {
                id: id.to_string(),
                length: runway.length()?,
                width: runway.width().ok(),
                surface: surface.primary,
                secondary_surface: surface.secondary,
                ends,
            });
        }

        let mut ils = Vec::with_capacity(airport.ils.len());
        for system in &airport.ils {
            ils.push(IlsReport {
                identifier: system.ils_identifier()?.to_string(),
                runway_end: system.runway_end()?.to_string(),
                system_type: system.system_type()?,
                category: system.category()?,
                frequency: system.frequency()?,
            });
        }

        Ok(Self {
            identifier: base.location_identifier()?.to_string(),
            icao: base.icao_identifier()?.to_string(),
            name: base.name()?.to_string(),
            city: base.city()?.to_string(),
            state: base.state_code()?.to_string(),
            effective_date: base.effective_date()?,
            reference_point: base.reference_point()?,
            elevation: base.elevation()?,
            runways,
            ils,
            remarks: airport
                .remarks
                .iter()
                .map(|remark| remark.remark().map(str::to_string))
                .collect::<crate::Result<_>>()?,
            ils_remarks: airport
                .ils_remarks
                .iter()
                .map(|remark| remark.remark().map(str::to_string))
                .collect::<crate::Result<_>>()?,
        })
    }
}

/// Airport command runner
pub fn run_airport(args: AirportArgs) -> Result<()> {
    let (registry, _stats) = load_registry(&args.source, &args.output)?;

    let airport = if args.icao {
        registry.get_airport_by_icao(&args.identifier)
    } else {
        registry.get_airport(&args.identifier)
    }
    .with_context(|| format!("Failed to look up airport '{}'", args.identifier))?;

    let report = AirportReport::from_airport(&airport)
        .with_context(|| format!("Failed to decode airport '{}'", args.identifier))?;

    info!(
        "Assembled {}: {} runways, {} ILS systems",
        report.identifier,
        report.runways.len(),
        report.ils.len()
    );

    match args.output.output_format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Human => {
            print_human(&report);
            Ok(())
        }
    }
}

fn print_human(report: &AirportReport) {
    println!(
        "{} {}",
        report.identifier.bright_yellow().bold(),
        report.name.bright_white().bold()
    );

    print_field("ICAO", &report.icao);
    print_field("City", format!("{}, {}", report.city, report.state));
    print_field("Effective", report.effective_date);
    if let Some(point) = &report.reference_point {
        print_field("Reference point", point);
    }
    if let Some(elevation) = report.elevation {
        print_field("Elevation", format!("{:.1} ft", elevation));
    }

    if !report.runways.is_empty() {
        print_heading("Runways");
        for runway in &report.runways {
            let surface = match (runway.surface.as_option(), runway.secondary_surface.as_option()) {
                (Some(primary), Some(secondary)) => format!("{:?}/{:?}", primary, secondary),
                (Some(primary), None) => format!("{:?}", primary),
                _ => "-".to_string(),
            };
            let width = runway
                .width
                .map(|width| format!(" x {}", width))
                .unwrap_or_default();

            println!(
                "  {:<10} {}{} ft  {}  ends: {}",
                runway.id.bright_white(),
                runway.length,
                width,
                surface,
                runway.ends.join(", ")
            );
        }
    }

    if !report.ils.is_empty() {
        print_heading("Instrument landing systems");
        for system in &report.ils {
            let frequency = system
                .frequency
                .map(|frequency| format!("{:.2} MHz", frequency))
                .unwrap_or_default();
            let category = system
                .category
                .as_option()
                .map(|category| format!("CAT {:?}", category))
                .unwrap_or_default();

            println!(
                "  {:<8} RWY {:<5} {} {}",
                system.identifier.bright_white(),
                system.runway_end,
                frequency,
                category
            );
        }
    }

    for (title, remarks) in [("Remarks", &report.remarks), ("ILS remarks", &report.ils_remarks)] {
        if !remarks.is_empty() {
            print_heading(title);
            for remark in remarks {
                println!("  - {}", remark);
            }
        }
    }
}
