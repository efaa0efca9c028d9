//! Civil calendar ↔ Julian Day Number.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7. The calendar is
//! treated as proleptic Gregorian in both directions.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minutes in one day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Julian Day for a calendar date with a fractional day.
///
/// January and February are counted as months 13 and 14 of the previous
/// year; `b` is the Gregorian century correction.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian Day for a civil date plus UT hours (which may carry minutes,
/// seconds and sub-seconds folded into one real number).
///
/// Month and day are not validated.
pub fn julian_day(year: i32, month: u32, day: u32, ut_hours: f64) -> f64 {
    calendar_to_jd(year, month, day as f64 + ut_hours / 24.0)
}

/// Inverse of [`calendar_to_jd`]: `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_midnight() {
        assert_eq!(julian_day(2000, 1, 1, 0.0), 2_451_544.5);
    }

    #[test]
    fn j2000_noon() {
        assert_eq!(julian_day(2000, 1, 1, 12.0), J2000_JD);
    }

    #[test]
    fn meeus_sputnik() {
        // Meeus example 7.a: 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn january_carry() {
        // Meeus table 7.a: 1987 Jan 27.0 = 2446822.5
        assert_eq!(julian_day(1987, 1, 27, 0.0), 2_446_822.5);
        assert_eq!(julian_day(1999, 1, 1, 0.0), 2_451_179.5);
    }

    #[test]
    fn fractional_hours() {
        let jd = julian_day(2023, 1, 1, 6.0 + 30.0 / 60.0 + 15.5 / 3600.0);
        let expected = 2_459_945.5 + (6.5 + 15.5 / 3600.0) / 24.0;
        assert!((jd - expected).abs() < 1e-10);
    }

    #[test]
    fn calendar_round_trip() {
        for &jd in &[2_451_544.5, 2_459_945.75, 2_436_116.31, 2_305_447.5, 2_488_069.5] {
            let (y, m, d) = jd_to_calendar(jd);
            let back = calendar_to_jd(y, m, d);
            assert!((back - jd).abs() < 1e-8, "jd {jd} -> {y}-{m}-{d} -> {back}");
        }
    }

    #[test]
    fn inverse_known_date() {
        let (y, m, d) = jd_to_calendar(2_459_945.5);
        assert_eq!((y, m), (2023, 1));
        assert!((d - 1.0).abs() < 1e-9);
    }
}
