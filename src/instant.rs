// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants and Julian dates.
//!
//! [`UtcInstant`] abstracts over anything that can be read as a UTC
//! timestamp (any `chrono::DateTime<Tz>`, or a [`SystemTime`]).
//! [`JulianDate`] stores a single [`Days`] quantity on the Julian-day axis
//! and provides the Julian-century argument used by every solar formula.
//!
//! The clock reading is taken as-is: no ΔT correction is applied, which is
//! well below the precision of the solar model built on top of it.

use chrono::{DateTime, TimeZone, Utc};
use qtty::{Centuries, Day, Days, Seconds, Simplify};
use std::ops::{Add, Sub};
use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD, UNIX_EPOCH_JD};

// ═══════════════════════════════════════════════════════════════════════════
// UtcInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// A point in time that can be interpreted as UTC.
pub trait UtcInstant {
    /// This instant as a `chrono::DateTime<Utc>`.
    fn to_utc(&self) -> DateTime<Utc>;
}

impl<Tz: TimeZone> UtcInstant for DateTime<Tz> {
    #[inline]
    fn to_utc(&self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

impl UtcInstant for SystemTime {
    #[inline]
    fn to_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from(*self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JulianDate
// ═══════════════════════════════════════════════════════════════════════════

/// Julian Date — continuous count of days since the Julian Period.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// 1970-01-01T00:00:00Z (JD 2 440 587.5).
    pub const UNIX_EPOCH: Self = Self::new(UNIX_EPOCH_JD);

    /// J2000.0 epoch: 2000-01-01T12:00:00Z (JD 2 451 545.0).
    pub const J2000: Self = Self::new(J2000_JD);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(DAYS_PER_JULIAN_CENTURY);

    /// Create from a raw Julian Day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying Julian Day number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian Date of a UTC instant: `2440587.5 + unix_seconds / 86400`.
    ///
    /// Sub-second precision of the instant is kept.
    pub fn from_utc<I: UtcInstant + ?Sized>(instant: &I) -> Self {
        let utc = instant.to_utc();
        let seconds_since_epoch = Seconds::new(utc.timestamp() as f64);
        let nanos = Seconds::new(utc.timestamp_subsec_nanos() as f64 / 1e9);
        Self::UNIX_EPOCH + (seconds_since_epoch + nanos).to::<Day>()
    }

    /// Julian centuries since J2000.0, the argument of the solar polynomials.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Julian Day: {}", self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<JulianDate> for Centuries {
    fn from(jd: JulianDate) -> Self {
        jd.julian_centuries()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
