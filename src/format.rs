// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degrees/minutes/seconds rendering of decimal coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Which axis a coordinate belongs to; selects the hemisphere labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// North/South.
    Latitude,
    /// East/West.
    Longitude,
}

/// Hemisphere label of a coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Non-negative latitude.
    North,
    /// Negative latitude.
    South,
    /// Non-negative longitude.
    East,
    /// Negative longitude.
    West,
}

impl Hemisphere {
    /// Label for a signed value on `axis`: non-negative is North/East.
    pub fn of(value: f64, axis: Axis) -> Self {
        match (axis, value < 0.0) {
            (Axis::Latitude, false) => Self::North,
            (Axis::Latitude, true) => Self::South,
            (Axis::Longitude, false) => Self::East,
            (Axis::Longitude, true) => Self::West,
        }
    }

    /// Label as printed in reports, e.g. `"North"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decimal-degree value split into whole degrees, minutes and seconds.
///
/// `degrees` keeps the sign of the value; `minutes` and `seconds` are
/// magnitudes. Seconds are truncated, not rounded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsCoordinate {
    /// Whole degrees, signed like the decimal value.
    pub degrees: i32,
    /// Arc-minutes, `0..60`.
    pub minutes: u32,
    /// Truncated arc-seconds, `0..60`.
    pub seconds: u32,
    /// Hemisphere of the decimal value.
    pub hemisphere: Hemisphere,
}

impl DmsCoordinate {
    /// Split `value` \[degrees\] on `axis`, truncating toward zero.
    ///
    /// ```rust
    /// use subsolar::{Axis, DmsCoordinate, Hemisphere};
    ///
    /// let dms = DmsCoordinate::from_degrees(-74.5, Axis::Longitude);
    /// assert_eq!((dms.degrees, dms.minutes, dms.hemisphere), (-74, 30, Hemisphere::West));
    /// assert_eq!(dms.to_string(), " 74° 30' West");
    /// ```
    pub fn from_degrees(value: f64, axis: Axis) -> Self {
        let total_seconds = (value * SECONDS_PER_HOUR) as i64;
        let seconds_per_degree = SECONDS_PER_HOUR as i64;
        let degrees = total_seconds / seconds_per_degree;
        let remainder = (total_seconds % seconds_per_degree).abs();

        Self {
            degrees: degrees as i32,
            minutes: (remainder / SECONDS_PER_MINUTE) as u32,
            seconds: (remainder % SECONDS_PER_MINUTE) as u32,
            hemisphere: Hemisphere::of(value, axis),
        }
    }

    /// Split a latitude \[degrees\].
    #[inline]
    pub fn latitude(value: f64) -> Self {
        Self::from_degrees(value, Axis::Latitude)
    }

    /// Split a longitude \[degrees\].
    #[inline]
    pub fn longitude(value: f64) -> Self {
        Self::from_degrees(value, Axis::Longitude)
    }
}

/// Renders as `"{D:>3}° {M:02}' {Hemisphere}"`; seconds are not shown.
impl fmt::Display for DmsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:3}° {:02}' {}",
            self.degrees.unsigned_abs(),
            self.minutes,
            self.hemisphere
        )
    }
}

/// Latitude block, two spaces, longitude block.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!(
        "{}  {}",
        DmsCoordinate::latitude(latitude),
        DmsCoordinate::longitude(longitude)
    )
}
