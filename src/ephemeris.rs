// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Low-order solar ephemeris
//!
//! Closed-form expressions for the Sun's apparent motion, all driven by a
//! single argument: Julian centuries `t` since J2000.0.
//!
//! | Quantity | Unit | Expression |
//! |----------|------|------------|
//! | Orbital eccentricity `e` | – | `0.016708634 − t·(0.000042037 + 0.0000001267·t)` |
//! | Mean anomaly `M` | deg | `357.52911 + 35999.05029·t − 0.0001537·t²` |
//! | Geometric mean longitude `L₀` | deg | `(280.46646 + 36000.76983·t + 0.0003032·t²) mod 360` |
//! | Equation of center `C` | deg | three-harmonic series in `M` |
//! | True longitude `λ` | deg | `L₀ + C` |
//! | Declination `δ` | deg | `asin(sin λ · sin ε)` |
//! | Equation of time | min | five-term series in `L₀`, `M`, `e`, `y = tan²(ε/2)` |
//!
//! Accuracy is that of a display utility: a few hundredths of a degree in
//! declination, well under a minute in the equation of time.
//!
//! ## References
//! * Meeus, *Astronomical Algorithms* (2nd ed. 1998), ch. 25 and 28
//! * NOAA Solar Calculator spreadsheet

use log::trace;
use qtty::Centuries;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_TILT_DEG, EOT_OBLIQUITY_Y, FULL_TURN_DEG};
use crate::instant::{JulianDate, UtcInstant};

/// Wrap an angle into `[0, 360)`.
///
/// `rem_euclid` may round up to exactly `360.0` for tiny negative inputs;
/// that case folds back to `0.0`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Time arguments
// ═══════════════════════════════════════════════════════════════════════════

/// Julian Date of an instant.
#[inline]
pub fn julian_date<I: UtcInstant + ?Sized>(instant: &I) -> JulianDate {
    JulianDate::from_utc(instant)
}

/// Julian centuries since J2000.0 of an instant.
#[inline]
pub fn julian_century<I: UtcInstant + ?Sized>(instant: &I) -> Centuries {
    julian_date(instant).julian_centuries()
}

// ═══════════════════════════════════════════════════════════════════════════
// Orbital terms
// ═══════════════════════════════════════════════════════════════════════════

/// Eccentricity of Earth's orbit (dimensionless).
#[inline]
pub fn orbit_eccentricity(t: Centuries) -> f64 {
    let t = t.value();
    0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t)
}

/// Mean anomaly of the Sun \[degrees\], not wrapped.
#[inline]
pub fn mean_anomaly(t: Centuries) -> f64 {
    let t = t.value();
    357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t
}

/// Geometric mean longitude of the Sun \[degrees\], in `[0, 360)`.
#[inline]
pub fn geometric_mean_longitude(t: Centuries) -> f64 {
    let t = t.value();
    normalize_degrees(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// Equation of center \[degrees\]: truncated series (three harmonics of the
/// mean anomaly) taking the mean anomaly to the true anomaly.
pub fn equation_of_center(t: Centuries) -> f64 {
    let m = mean_anomaly(t).to_radians();
    let t = t.value();

    m.sin() * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
        + (2.0 * m).sin() * (0.019_993 - 0.000_101 * t)
        + (3.0 * m).sin() * 0.000_289
}

/// True geometric longitude of the Sun \[degrees\]: `L₀ + C`.
///
/// Not wrapped; only its sine is used downstream.
#[inline]
pub fn true_longitude(t: Centuries) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

/// Solar declination \[degrees\] for a true longitude \[degrees\].
///
/// Bounded by the axial tilt: `|δ| ≤ 23.43715°`.
#[inline]
pub fn declination(true_longitude_deg: f64) -> f64 {
    let sin_delta = true_longitude_deg.to_radians().sin() * EARTH_TILT_DEG.to_radians().sin();
    sin_delta.asin().to_degrees()
}

/// Equation of time \[minutes\] (apparent minus mean solar time).
///
/// Five-term series; `y = tan²(ε/2)` is fixed at
/// [`EOT_OBLIQUITY_Y`](crate::constants::EOT_OBLIQUITY_Y).
pub fn equation_of_time_at(t: Centuries) -> f64 {
    let l0 = geometric_mean_longitude(t).to_radians();
    let m = mean_anomaly(t).to_radians();
    let e = orbit_eccentricity(t);
    let y = EOT_OBLIQUITY_Y;

    let term1 = y * (2.0 * l0).sin();
    let term2 = 2.0 * e * m.sin();
    let term3 = 4.0 * e * y * m.sin() * (2.0 * l0).cos();
    let term4 = 0.5 * y * y * (4.0 * l0).sin();
    let term5 = 1.25 * e * e * (2.0 * m).sin();

    // Radians of hour angle → degrees → minutes of time (4 min per degree).
    4.0 * (term1 - term2 + term3 - term4 - term5).to_degrees()
}

// ═══════════════════════════════════════════════════════════════════════════
// Instant-level entry points
// ═══════════════════════════════════════════════════════════════════════════

/// Latitude of the subsolar point (the solar declination) \[degrees\].
pub fn solar_latitude<I: UtcInstant + ?Sized>(instant: &I) -> f64 {
    declination(true_longitude(julian_century(instant)))
}

/// Equation of time at an instant \[minutes\].
pub fn equation_of_time<I: UtcInstant + ?Sized>(instant: &I) -> f64 {
    equation_of_time_at(julian_century(instant))
}

// ═══════════════════════════════════════════════════════════════════════════
// SolarAngles
// ═══════════════════════════════════════════════════════════════════════════

/// All intermediate quantities of the model at one Julian century.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarAngles {
    /// Julian centuries since J2000.0.
    pub centuries: f64,
    /// Mean anomaly \[degrees\].
    pub mean_anomaly: f64,
    /// Geometric mean longitude \[degrees\], in `[0, 360)`.
    pub geometric_mean_longitude: f64,
    /// Equation of center \[degrees\].
    pub equation_of_center: f64,
    /// True longitude \[degrees\].
    pub true_longitude: f64,
    /// Orbital eccentricity.
    pub eccentricity: f64,
    /// Solar declination \[degrees\].
    pub declination: f64,
    /// Equation of time \[minutes\].
    pub equation_of_time: f64,
}

impl SolarAngles {
    /// Evaluate every term of the model at `t`.
    pub fn at(t: Centuries) -> Self {
        let geometric_mean_longitude = geometric_mean_longitude(t);
        let equation_of_center = equation_of_center(t);
        let true_longitude = geometric_mean_longitude + equation_of_center;

        let angles = Self {
            centuries: t.value(),
            mean_anomaly: mean_anomaly(t),
            geometric_mean_longitude,
            equation_of_center,
            true_longitude,
            eccentricity: orbit_eccentricity(t),
            declination: declination(true_longitude),
            equation_of_time: equation_of_time_at(t),
        };
        trace!("solar angles: {angles:?}");
        angles
    }

    /// Evaluate the model at an instant.
    pub fn from_instant<I: UtcInstant + ?Sized>(instant: &I) -> Self {
        Self::at(julian_century(instant))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
