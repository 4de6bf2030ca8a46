// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Subsolar point assembly.
//!
//! Latitude is the solar declination; longitude follows from the UTC time
//! of day corrected by the equation of time. Both are computed from the
//! **same** captured instant so the two halves of a [`SubsolarPoint`] never
//! drift apart.

use chrono::{DateTime, Timelike, Utc};
use log::debug;
use qtty::Centuries;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEGREES_PER_HOUR, HOURS_PER_DAY, MINUTES_PER_HOUR, NOON_HOUR, SECONDS_PER_HOUR,
};
use crate::ephemeris::{self, normalize_degrees, SolarAngles};
use crate::format::format_coordinates;
use crate::instant::{JulianDate, UtcInstant};

/// Fractional UTC hour of day, `[0, 24)`.
fn utc_hours(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 / 1e9;
    seconds / SECONDS_PER_HOUR
}

/// Longitude under the Sun for a UTC hour of day and an equation of time
/// \[minutes\]. East longitude in `[0, 360)`.
pub fn longitude_from_clock(utc_hours: f64, equation_of_time: f64) -> f64 {
    let gmt = (utc_hours - equation_of_time / MINUTES_PER_HOUR).rem_euclid(HOURS_PER_DAY);
    let noon_hour_delta = (NOON_HOUR - gmt).rem_euclid(HOURS_PER_DAY);
    normalize_degrees(noon_hour_delta * DEGREES_PER_HOUR)
}

/// Subsolar longitude at an instant, east longitude in `[0, 360)`.
pub fn subsolar_longitude<I: UtcInstant + ?Sized>(instant: &I) -> f64 {
    let utc = instant.to_utc();
    longitude_from_clock(utc_hours(&utc), ephemeris::equation_of_time(&utc))
}

/// Geographic point with the Sun at zenith.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubsolarPoint {
    /// Latitude \[degrees\], `|latitude| ≤ 23.43715`.
    pub latitude: f64,
    /// East longitude \[degrees\], in `[0, 360)`.
    pub longitude: f64,
}

impl SubsolarPoint {
    /// Subsolar point at `instant`.
    pub fn at<I: UtcInstant + ?Sized>(instant: &I) -> Self {
        let utc = instant.to_utc();
        let t: Centuries = JulianDate::from_utc(&utc).julian_centuries();
        let angles = SolarAngles::at(t);

        let point = Self {
            latitude: angles.declination,
            longitude: longitude_from_clock(utc_hours(&utc), angles.equation_of_time),
        };
        debug!(
            "subsolar point at {utc}: lat {:.4}°, lon {:.4}° (EoT {:.2} min)",
            point.latitude, point.longitude, angles.equation_of_time
        );
        point
    }

    /// Subsolar point at the current system time.
    pub fn now() -> Self {
        Self::at(&Utc::now())
    }

    /// Longitude folded into `[-180, 180)`, negative west of Greenwich.
    pub fn signed_longitude(&self) -> f64 {
        if self.longitude >= 180.0 {
            self.longitude - 360.0
        } else {
            self.longitude
        }
    }
}

impl std::fmt::Display for SubsolarPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_coordinates(self.latitude, self.longitude))
    }
}

/// Subsolar point as a `(latitude, longitude)` pair, both in degrees.
pub fn subsolar_point<I: UtcInstant + ?Sized>(instant: &I) -> (f64, f64) {
    let point = SubsolarPoint::at(instant);
    (point.latitude, point.longitude)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_TILT_DEG;
    use chrono::{Duration, TimeZone};

    #[test]
    fn noon_without_eot_is_greenwich() {
        assert_eq!(longitude_from_clock(12.0, 0.0), 0.0);
    }

    #[test]
    fn clock_hours_map_to_east_longitude() {
        // 13:00 UTC puts the Sun 15° west, i.e. 345° east.
        assert!((longitude_from_clock(13.0, 0.0) - 345.0).abs() < 1e-9);
        assert!((longitude_from_clock(6.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((longitude_from_clock(0.0, 0.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn equation_of_time_shifts_by_quarter_degree_per_minute() {
        let base = longitude_from_clock(9.0, 0.0);
        let shifted = longitude_from_clock(9.0, 4.0);
        assert!((shifted - base - 1.0).abs() < 1e-9, "{base} -> {shifted}");
    }

    #[test]
    fn longitude_stays_in_range_over_a_day() {
        let start = Utc.with_ymd_and_hms(2024, 2, 11, 0, 0, 0).unwrap();
        for minute in 0..(24 * 60) {
            let lon = subsolar_longitude(&(start + Duration::minutes(minute)));
            assert!((0.0..360.0).contains(&lon), "lon = {lon}");
        }
    }

    #[test]
    fn sub_minute_clock_is_used() {
        let a = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let b = a + Duration::seconds(30);
        let delta = subsolar_longitude(&a) - subsolar_longitude(&b);
        // 30 s of clock time is 0.125° of longitude.
        assert!((delta - 0.125).abs() < 1e-3, "delta = {delta}");
    }

    #[test]
    fn point_is_idempotent() {
        let instant = Utc.with_ymd_and_hms(2024, 7, 4, 18, 30, 15).unwrap();
        let a = SubsolarPoint::at(&instant);
        let b = SubsolarPoint::at(&instant);
        assert_eq!(a.latitude.to_bits(), b.latitude.to_bits());
        assert_eq!(a.longitude.to_bits(), b.longitude.to_bits());
        assert_eq!(subsolar_point(&instant), (a.latitude, a.longitude));
    }

    #[test]
    fn point_matches_component_functions() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 22, 3, 27, 0).unwrap();
        let point = SubsolarPoint::at(&instant);
        assert_eq!(point.latitude, ephemeris::solar_latitude(&instant));
        assert_eq!(point.longitude, subsolar_longitude(&instant));
    }

    #[test]
    fn latitude_bounded_across_a_year() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        for hours in (0..365 * 24).step_by(7) {
            let point = SubsolarPoint::at(&(start + Duration::hours(hours)));
            assert!(point.latitude.abs() <= EARTH_TILT_DEG + 1e-9);
        }
    }

    #[test]
    fn signed_longitude_folds_west() {
        let point = SubsolarPoint {
            latitude: 0.0,
            longitude: 345.0,
        };
        assert_eq!(point.signed_longitude(), -15.0);
        let point = SubsolarPoint {
            latitude: 0.0,
            longitude: 179.5,
        };
        assert_eq!(point.signed_longitude(), 179.5);
    }

    #[test]
    fn now_is_in_range() {
        let point = SubsolarPoint::now();
        assert!(point.latitude.abs() <= EARTH_TILT_DEG + 1e-9);
        assert!((0.0..360.0).contains(&point.longitude));
    }
}
