// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Subsolar point tracker
//!
//! Computes the geographic point with the Sun at zenith from a UTC instant,
//! using a low-order closed-form solar model, and renders it as
//! degrees/minutes with hemisphere labels.
//!
//! # Pipeline
//!
//! ```text
//! instant → JulianDate → Julian centuries t
//!         → eccentricity, mean anomaly, mean longitude
//!         → equation of center → true longitude → declination (latitude)
//!         → equation of time → subsolar longitude
//! ```
//!
//! # Core types
//!
//! - [`UtcInstant`] — anything readable as a UTC timestamp.
//! - [`JulianDate`] — Julian Day number with the J2000 century argument.
//! - [`SolarAngles`] — every intermediate term of the model at one instant.
//! - [`SubsolarPoint`] — latitude and east longitude (`[0, 360)`) in degrees.
//! - [`DmsCoordinate`] — display-only degrees/minutes/seconds split.
//! - [`Reporter`] — periodic text report driven by a [`Clock`].
//!
//! # Quick example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use subsolar::SubsolarPoint;
//!
//! let solstice = Utc.with_ymd_and_hms(2023, 12, 22, 3, 27, 0).unwrap();
//! let point = SubsolarPoint::at(&solstice);
//! assert!((point.latitude + 23.43).abs() < 0.05);
//! println!("{point}");
//! ```

pub mod constants;
mod ephemeris;
mod error;
mod format;
pub(crate) mod instant;
mod report;
mod subsolar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use ephemeris::{
    declination, equation_of_center, equation_of_time, equation_of_time_at,
    geometric_mean_longitude, julian_century, julian_date, mean_anomaly, normalize_degrees,
    orbit_eccentricity, solar_latitude, true_longitude, SolarAngles,
};
pub use error::Error;
pub use format::{format_coordinates, Axis, DmsCoordinate, Hemisphere};
pub use instant::{JulianDate, UtcInstant};
pub use report::{
    format_full_time, Clock, ReportConfig, Reporter, SystemClock, FULL_TIME_FORMAT,
    LOCAL_TIME_FORMAT, WHOLE_SECOND_TIME_FORMAT,
};
pub use subsolar::{longitude_from_clock, subsolar_longitude, subsolar_point, SubsolarPoint};

/// Stateless facade over the solar model.
///
/// Every method forwards to the free function of the same name.
#[derive(Debug, Copy, Clone, Default)]
pub struct SolarEphemerisCalculator;

impl SolarEphemerisCalculator {
    /// Julian Date of `instant`.
    pub fn julian_date<I: UtcInstant + ?Sized>(instant: &I) -> JulianDate {
        julian_date(instant)
    }

    /// Julian centuries since J2000.0 of `instant`.
    pub fn julian_century<I: UtcInstant + ?Sized>(instant: &I) -> qtty::Centuries {
        julian_century(instant)
    }

    /// Subsolar latitude (solar declination) \[degrees\].
    pub fn solar_latitude<I: UtcInstant + ?Sized>(instant: &I) -> f64 {
        solar_latitude(instant)
    }

    /// Equation of time \[minutes\].
    pub fn equation_of_time<I: UtcInstant + ?Sized>(instant: &I) -> f64 {
        equation_of_time(instant)
    }

    /// Subsolar east longitude in `[0, 360)` \[degrees\].
    pub fn subsolar_longitude<I: UtcInstant + ?Sized>(instant: &I) -> f64 {
        subsolar_longitude(instant)
    }

    /// Latitude and longitude from one instant.
    pub fn subsolar_point<I: UtcInstant + ?Sized>(instant: &I) -> SubsolarPoint {
        SubsolarPoint::at(instant)
    }
}
