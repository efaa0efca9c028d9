//! Time conversions for the sidereal position engine.
//!
//! This crate provides:
//! - Civil calendar ↔ Julian Day Number conversion (proleptic Gregorian)
//! - An [`Instant`] type wrapping a UT Julian Day
//! - ΔT (TT − UT) estimates for converting UT to dynamical time
//! - Greenwich mean and local sidereal time

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

use std::str::FromStr;

pub use delta_t::{decimal_year, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, julian_day,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};

/// A moment in time, stored as a Julian Day on the UT axis.
///
/// The engine never resolves time zones: callers hand in an instant that is
/// already UTC/UT. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_ut: f64,
}

impl Instant {
    /// Wrap a UT Julian Day.
    pub const fn from_jd_ut(jd_ut: f64) -> Self {
        Self { jd_ut }
    }

    /// Build from a civil date and fractional UT hours.
    pub fn from_utc(year: i32, month: u32, day: u32, ut_hours: f64) -> Self {
        Self {
            jd_ut: julian_day(year, month, day, ut_hours),
        }
    }

    /// Build from a civil date and a UT clock reading.
    pub fn from_utc_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: f64) -> Self {
        let hours = hour as f64 + min as f64 / 60.0 + sec / 3600.0;
        Self::from_utc(year, month, day, hours)
    }

    /// Julian Day (UT).
    pub const fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Julian Day in Terrestrial Time, `jd_ut + ΔT`.
    pub fn jd_tt(self) -> f64 {
        self.jd_ut + delta_t_seconds(decimal_year(self.jd_ut)) / SECONDS_PER_DAY
    }

    /// Julian centuries (UT) since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.jd_ut - J2000_JD) / 36525.0
    }

    /// A new instant shifted by `days` (may be negative).
    pub fn offset_days(self, days: f64) -> Self {
        Self {
            jd_ut: self.jd_ut + days,
        }
    }

    /// Civil date of this instant as `(year, month, day_with_fraction)`.
    pub fn to_calendar(self) -> (i32, u32, f64) {
        jd_to_calendar(self.jd_ut)
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm[:ss[.fff]][Z]` (a space may replace the `T`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let mut date_parts = date.splitn(3, '-');
        let year = parse_field::<i32>(date_parts.next(), "year")?;
        let month = parse_field::<u32>(date_parts.next(), "month")?;
        let day = parse_field::<u32>(date_parts.next(), "day")?;
        if !(1..=12).contains(&month) {
            return Err(TimeError::OutOfRange("month must be 1-12"));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::OutOfRange("day must be 1-31"));
        }

        let (hour, min, sec) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut parts = t.splitn(3, ':');
                let hour = parse_field::<u32>(parts.next(), "hour")?;
                let min = parse_field::<u32>(parts.next(), "minute")?;
                let sec = match parts.next() {
                    Some(p) => parse_field::<f64>(Some(p), "second")?,
                    None => 0.0,
                };
                (hour, min, sec)
            }
        };
        if hour > 23 || min > 59 || !(0.0..61.0).contains(&sec) {
            return Err(TimeError::OutOfRange("time of day out of range"));
        }

        Ok(Self::from_utc_hms(year, month, day, hour, min, sec))
    }
}

fn parse_field<T: FromStr>(field: Option<&str>, name: &'static str) -> Result<T, TimeError> {
    field
        .ok_or(TimeError::Parse(name))?
        .parse::<T>()
        .map_err(|_| TimeError::Parse(name))
}
