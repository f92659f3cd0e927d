//! Value types derived from NASR cells
//!
//! This module contains the composite values built from several decoded
//! cells (coordinates) and the AIRAC cycle numbering computed from dates.

use crate::constants::{AIRAC_CYCLE_DAYS, AIRAC_EPOCH};
use crate::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Coordinates
// =============================================================================

/// Compass hemisphere of one coordinate component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// +1 for north/east, -1 for south/west
    pub fn sign(&self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            other => Err(Error::invalid_coordinate(format!(
                "Unrecognized hemisphere '{}'",
                other
            ))),
        }
    }
}

/// One coordinate component in degrees, minutes and seconds
///
/// Magnitudes are stored unsigned; the hemisphere carries the sign, so a
/// component of zero degrees south still converts to a negative value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateDms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl CoordinateDms {
    /// Create a validated coordinate
    ///
    /// # Errors
    /// * Returns `Error::InvalidCoordinate` for an unknown hemisphere letter or a
    ///   negative (or non-finite) degree, minute or second value
    pub fn new(degrees: f64, minutes: f64, seconds: f64, hemisphere: char) -> Result<Self> {
        let hemisphere = Hemisphere::try_from(hemisphere)?;

        for (label, value) in [("degrees", degrees), ("minutes", minutes), ("seconds", seconds)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_coordinate(format!(
                    "{} must be non-negative, got {}",
                    label, value
                )));
            }
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        })
    }

    /// Compose from optional parts; any absent or invalid part yields `None`
    pub fn make_optional(
        degrees: Option<f64>,
        minutes: Option<f64>,
        seconds: Option<f64>,
        hemisphere: Option<char>,
    ) -> Option<Self> {
        Self::new(degrees?, minutes?, seconds?, hemisphere?).ok()
    }

    /// Signed decimal degrees
    pub fn decimal_degrees(&self) -> f64 {
        self.hemisphere.sign() * (self.degrees + self.minutes / 60.0 + self.seconds / 3600.0)
    }
}

impl fmt::Display for CoordinateDms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}'{:05.2}\"{}",
            self.degrees,
            self.minutes,
            self.seconds,
            self.hemisphere.as_char()
        )
    }
}

/// Position in signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatitudeLongitude {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatitudeLongitude {
    pub fn from_decimal(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn from_dms(latitude: &CoordinateDms, longitude: &CoordinateDms) -> Self {
        Self::from_decimal(latitude.decimal_degrees(), longitude.decimal_degrees())
    }

    /// Compose from optional components; absent if either is absent
    pub fn make_optional(
        latitude: Option<CoordinateDms>,
        longitude: Option<CoordinateDms>,
    ) -> Option<Self> {
        Some(Self::from_dms(&latitude?, &longitude?))
    }

    /// Compose from optional decimal values; absent if either is absent
    pub fn make_optional_decimal(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        Some(Self::from_decimal(latitude?, longitude?))
    }
}

impl fmt::Display for LatitudeLongitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

// =============================================================================
// AIRAC Cycle
// =============================================================================

/// One 28-day AIRAC publication cycle
///
/// `identifier` is `(year % 100) * 100 + number`, e.g. `2301` for the first
/// cycle attributed to 2023.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AiracCycle {
    pub identifier: u32,

    /// Calendar year the cycle is attributed to
    pub year: i32,

    /// Cycle number within the year, starting at 1
    pub number: u32,

    /// Date the cycle takes effect
    pub effective: NaiveDate,
}

impl AiracCycle {
    /// The cycle in effect on `date`
    ///
    /// A cycle whose start falls before January 1 of the date's year belongs to
    /// the previous year. Whole cycles are counted with floor division, so dates
    /// before the epoch are handled consistently. A cycle that would start before
    /// the earliest representable date starts on that date instead.
    pub fn containing(date: NaiveDate) -> Self {
        let elapsed = (date - airac_epoch()).num_days();
        let into_cycle = Duration::days(elapsed.rem_euclid(AIRAC_CYCLE_DAYS));
        let effective = date.checked_sub_signed(into_cycle).unwrap_or(NaiveDate::MIN);

        let mut year = date.year();
        if effective < start_of_year(year) {
            year -= 1;
        }

        let into_year = (effective - start_of_year(year)).num_days();
        let number = (into_year.div_euclid(AIRAC_CYCLE_DAYS) + 1) as u32;
        let identifier = (year.rem_euclid(100) as u32) * 100 + number;

        Self {
            identifier,
            year,
            number,
            effective,
        }
    }

    /// The following cycle
    ///
    /// # Errors
    /// * `Error::CycleOutOfRange` if the next cycle starts after the latest
    ///   representable date
    pub fn next(&self) -> Result<Self> {
        self.effective
            .checked_add_signed(Duration::days(AIRAC_CYCLE_DAYS))
            .map(Self::containing)
            .ok_or(Error::CycleOutOfRange {
                identifier: self.identifier,
                effective: self.effective,
            })
    }

    /// Last date the cycle is in effect, clamped to the latest representable date
    pub fn last_day(&self) -> NaiveDate {
        self.effective
            .checked_add_signed(Duration::days(AIRAC_CYCLE_DAYS - 1))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.effective && date <= self.last_day()
    }
}

impl fmt::Display for AiracCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.identifier)
    }
}

/// Cycle identifier for a date, e.g. `2001` for 2020-01-02
pub fn cycle_identifier(date: NaiveDate) -> u32 {
    AiracCycle::containing(date).identifier
}

fn airac_epoch() -> NaiveDate {
    let (year, month, day) = AIRAC_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn start_of_year(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    mod coordinate_tests {
        use super::*;

        #[test]
        fn test_decimal_degrees_south() {
            let coordinate = CoordinateDms::new(10.0, 30.0, 0.0, 'S').unwrap();
            assert_eq!(coordinate.decimal_degrees(), -10.5);
        }

        #[test]
        fn test_decimal_degrees_components() {
            let coordinate = CoordinateDms::new(35.0, 15.0, 36.0, 'N').unwrap();
            assert!((coordinate.decimal_degrees() - 35.26).abs() < 1e-9);

            let west = CoordinateDms::new(97.0, 0.0, 0.0, 'W').unwrap();
            assert_eq!(west.decimal_degrees(), -97.0);
        }

        #[test]
        fn test_zero_degrees_keeps_hemisphere_sign() {
            let coordinate = CoordinateDms::new(0.0, 30.0, 0.0, 'W').unwrap();
            assert_eq!(coordinate.decimal_degrees(), -0.5);
        }

        #[test]
        fn test_invalid_hemisphere() {
            assert!(matches!(
                CoordinateDms::new(1.0, 1.0, 1.0, 'X'),
                Err(Error::InvalidCoordinate { .. })
            ));
            assert!(CoordinateDms::new(1.0, 1.0, 1.0, 'n').is_err());
        }

        #[test]
        fn test_negative_components_rejected() {
            assert!(CoordinateDms::new(-1.0, 0.0, 0.0, 'N').is_err());
            assert!(CoordinateDms::new(1.0, -1.0, 0.0, 'N').is_err());
            assert!(CoordinateDms::new(1.0, 0.0, -0.5, 'N').is_err());
            assert!(CoordinateDms::new(f64::NAN, 0.0, 0.0, 'N').is_err());
        }

        #[test]
        fn test_make_optional_propagates_absence() {
            assert!(CoordinateDms::make_optional(Some(1.0), Some(2.0), Some(3.0), Some('E')).is_some());
            assert!(CoordinateDms::make_optional(None, Some(2.0), Some(3.0), Some('E')).is_none());
            assert!(CoordinateDms::make_optional(Some(1.0), Some(2.0), Some(3.0), None).is_none());
            assert!(CoordinateDms::make_optional(Some(1.0), Some(2.0), Some(3.0), Some('Q')).is_none());
        }

        #[test]
        fn test_latitude_longitude() {
            let latitude = CoordinateDms::make_optional(Some(10.0), Some(30.0), Some(0.0), Some('S'));
            let longitude = CoordinateDms::make_optional(Some(20.0), Some(15.0), Some(0.0), Some('E'));

            let position = LatitudeLongitude::make_optional(latitude, longitude).unwrap();
            assert_eq!(position.latitude, -10.5);
            assert_eq!(position.longitude, 20.25);

            assert!(LatitudeLongitude::make_optional(latitude, None).is_none());
            assert!(LatitudeLongitude::make_optional_decimal(Some(1.0), None).is_none());
            assert_eq!(
                LatitudeLongitude::make_optional_decimal(Some(1.0), Some(2.0)),
                Some(LatitudeLongitude::from_decimal(1.0, 2.0))
            );
        }
    }

    mod cycle_tests {
        use super::*;

        #[test]
        fn test_epoch_is_first_cycle_of_2020() {
            let cycle = AiracCycle::containing(date(2020, 1, 2));

            assert_eq!(cycle.identifier, 2001);
            assert_eq!(cycle.year, 2020);
            assert_eq!(cycle.number, 1);
            assert_eq!(cycle.effective, date(2020, 1, 2));
            assert_eq!(cycle_identifier(date(2020, 1, 29)), 2001);
            assert_eq!(cycle_identifier(date(2020, 1, 30)), 2002);
        }

        #[test]
        fn test_year_boundary_straddle() {
            // Cycle 2014 runs 2020-12-31 through 2021-01-27
            let straddling = AiracCycle::containing(date(2021, 1, 1));
            assert_eq!(straddling.identifier, 2014);
            assert_eq!(straddling.effective, date(2020, 12, 31));
            assert_eq!(cycle_identifier(date(2021, 1, 27)), 2014);

            let first = AiracCycle::containing(date(2021, 1, 28));
            assert_eq!(first.identifier, 2101);
            assert_eq!(first.effective, date(2021, 1, 28));
        }

        #[test]
        fn test_published_2023_cycles() {
            assert_eq!(cycle_identifier(date(2023, 1, 26)), 2301);
            assert_eq!(cycle_identifier(date(2023, 12, 28)), 2313);
            assert_eq!(cycle_identifier(date(2024, 1, 25)), 2401);
        }

        #[test]
        fn test_dates_before_epoch() {
            let cycle = AiracCycle::containing(date(2020, 1, 1));
            assert_eq!(cycle.effective, date(2019, 12, 5));
            assert_eq!(cycle.identifier, 1913);
        }

        #[test]
        fn test_non_decreasing_within_year_and_reset() {
            let mut day = date(2022, 1, 1);
            let mut previous = cycle_identifier(day);

            while day < date(2022, 12, 31) {
                day += Duration::days(1);
                let current = cycle_identifier(day);
                assert!(current >= previous, "{} went backwards at {}", current, day);
                previous = current;
            }

            assert_eq!(cycle_identifier(date(2022, 1, 27)), 2201);
            assert_eq!(cycle_identifier(date(2023, 1, 26)), 2301);
        }

        #[test]
        fn test_next_and_contains() {
            let cycle = AiracCycle::containing(date(2020, 12, 31));
            let next = cycle.next().unwrap();

            assert_eq!(next.identifier, 2101);
            assert!(cycle.contains(date(2021, 1, 27)));
            assert!(!cycle.contains(date(2021, 1, 28)));
            assert_eq!(cycle.last_day(), date(2021, 1, 27));
            assert_eq!(next.to_string(), "2101");
        }

        #[test]
        fn test_cycles_at_calendar_limits() {
            let last = AiracCycle::containing(NaiveDate::MAX);
            assert!(last.contains(NaiveDate::MAX));
            assert_eq!(last.last_day(), NaiveDate::MAX);
            assert!(matches!(last.next(), Err(Error::CycleOutOfRange { .. })));

            let first = AiracCycle::containing(NaiveDate::MIN);
            assert!(first.contains(NaiveDate::MIN));
            assert!(first.next().unwrap().effective > first.effective);
        }
    }
}
