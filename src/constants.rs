// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed numeric constants of the solar model.
//!
//! Nothing here is configurable at runtime; the model is a single
//! low-order approximation.

/// Julian Date of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 epoch, 2000-01-01T12:00:00Z.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Earth's axial tilt \[degrees\].
pub const EARTH_TILT_DEG: f64 = 23.437_15;

/// `tan²(ε/2)` for the obliquity used by the equation of time.
pub const EOT_OBLIQUITY_Y: f64 = 0.043_026_491_654_516_5;

/// Degrees of longitude the sun crosses per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Hour of local (apparent) noon.
pub const NOON_HOUR: f64 = 12.0;

/// Hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;
/// Minutes in an hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Seconds in an hour, and arc-seconds in a degree.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
/// Seconds in a minute, and arc-seconds in an arc-minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Full turn \[degrees\].
pub const FULL_TURN_DEG: f64 = 360.0;
