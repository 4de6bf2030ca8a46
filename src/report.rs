// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Periodic subsolar report.
//!
//! A [`Reporter`] reads its [`Clock`] once per iteration and uses that
//! single reading both for the displayed local time and for the subsolar
//! point, so the printed time and coordinates always agree.

use chrono::{DateTime, Local, TimeZone, Timelike};
use log::info;
use std::fmt::Display;
use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::error::Error;
use crate::subsolar::SubsolarPoint;

/// Short local-time stamp, `MM-DD-YY HH:MM:SS`.
pub const LOCAL_TIME_FORMAT: &str = "%m-%d-%y %H:%M:%S";

/// Full local datetime shown after the coordinates.
pub const FULL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// [`FULL_TIME_FORMAT`] without the fraction, used on whole seconds.
pub const WHOLE_SECOND_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Full datetime with microseconds, omitted when they are zero.
pub fn format_full_time<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let format = if datetime.nanosecond() / 1_000 == 0 {
        WHOLE_SECOND_TIME_FORMAT
    } else {
        FULL_TIME_FORMAT
    };
    datetime.format(format).to_string()
}

/// Settings of the report loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Pause between two reports.
    pub interval: Duration,
}

impl ReportConfig {
    /// Five seconds between reports.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
        }
    }
}

/// Source of the current time.
pub trait Clock {
    /// Zone the time is displayed in.
    type Tz: TimeZone;

    /// Current time in [`Clock::Tz`].
    fn now(&self) -> DateTime<Self::Tz>;
}

/// Host wall clock in the local time zone.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Writes subsolar reports from a [`Clock`].
#[derive(Debug, Clone)]
pub struct Reporter<C: Clock> {
    clock: C,
    config: ReportConfig,
}

impl<C> Reporter<C>
where
    C: Clock,
    <C::Tz as TimeZone>::Offset: Display,
{
    /// Reporter reading `clock` and pacing itself with `config`.
    pub fn new(clock: C, config: ReportConfig) -> Self {
        Self { clock, config }
    }

    /// Read the clock once and write one report to `out`.
    pub fn report_once<W: Write + ?Sized>(&self, out: &mut W) -> Result<SubsolarPoint, Error> {
        let now = self.clock.now();
        let point = SubsolarPoint::at(&now);

        writeln!(
            out,
            "Formatted local time: {}",
            now.format(LOCAL_TIME_FORMAT)
        )?;
        writeln!(
            out,
            "The subsolar point is now at: {} (at {})",
            point,
            format_full_time(&now)
        )?;
        out.flush()?;
        Ok(point)
    }

    /// Write a report every [`ReportConfig::interval`] until writing fails.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), Error> {
        info!(
            "reporting the subsolar point every {:?}",
            self.config.interval
        );
        loop {
            self.report_once(out)?;
            thread::sleep(self.config.interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use std::io;

    struct FixedClock(DateTime<FixedOffset>);

    impl Clock for FixedClock {
        type Tz = FixedOffset;

        fn now(&self) -> DateTime<FixedOffset> {
            self.0
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn clock_at(offset_hours: i32) -> FixedClock {
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let utc = Utc.with_ymd_and_hms(2023, 12, 22, 3, 27, 0).unwrap();
        FixedClock(utc.with_timezone(&offset))
    }

    fn second_line(reporter: &Reporter<FixedClock>) -> String {
        let mut out = Vec::new();
        reporter.report_once(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        text.lines().nth(1).unwrap().to_string()
    }

    #[test]
    fn default_config_reports_every_five_seconds() {
        let config = ReportConfig::default();
        assert_eq!(config.interval, Duration::from_secs(5));
    }

    #[test]
    fn report_uses_a_single_clock_reading() {
        let reporter = Reporter::new(clock_at(-5), ReportConfig::default());
        let mut out = Vec::new();
        let point = reporter.report_once(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Formatted local time: 12-21-23 22:27:00");
        assert_eq!(
            lines[1],
            format!(
                "The subsolar point is now at: {point} (at 2023-12-21 22:27:00)"
            )
        );
        assert!(lines[1].contains("South"));
    }

    #[test]
    fn whole_seconds_print_without_fraction() {
        let time = clock_at(0).0;
        assert_eq!(format_full_time(&time), "2023-12-22 03:27:00");
    }

    #[test]
    fn fractional_seconds_print_six_digits() {
        let clock = clock_at(0);
        let time = FixedClock(clock.0 + chrono::Duration::microseconds(1_500));
        assert_eq!(format_full_time(&time.0), "2023-12-22 03:27:00.001500");

        let line = second_line(&Reporter::new(time, ReportConfig::default()));
        assert!(line.ends_with("(at 2023-12-22 03:27:00.001500)"), "{line}");
    }

    #[test]
    fn sub_microsecond_fraction_is_dropped() {
        let clock = clock_at(0);
        let time = clock.0 + chrono::Duration::nanoseconds(400);
        assert_eq!(format_full_time(&time), "2023-12-22 03:27:00");
    }

    #[test]
    fn display_offset_does_not_move_the_point() {
        let mut sink = Vec::new();
        let west = Reporter::new(clock_at(-5), ReportConfig::default())
            .report_once(&mut sink)
            .unwrap();
        let east = Reporter::new(clock_at(9), ReportConfig::default())
            .report_once(&mut sink)
            .unwrap();
        assert_eq!(west, east);
    }

    #[test]
    fn write_failures_surface_as_io_errors() {
        let reporter = Reporter::new(clock_at(0), ReportConfig::default());
        let err = reporter.report_once(&mut BrokenSink).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn run_stops_on_write_failure() {
        let config = ReportConfig {
            interval: Duration::from_millis(1),
        };
        let reporter = Reporter::new(clock_at(0), config);
        assert!(matches!(reporter.run(&mut BrokenSink), Err(Error::Io(_))));
    }
}
