//! General precession in ecliptic longitude.
//!
//! Moves a J2000.0 ecliptic longitude onto the mean equinox of date.
//! IAU 2006 expression (Capitaine, Wallace & Chapront 2003, Table 1).

/// Accumulated general precession since J2000.0, in degrees.
///
/// `t` = Julian centuries (TT) since J2000.0. About 1.397 deg per century.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let arcsec = 5028.796_195 * t + 1.105_434_8 * t * t + 0.000_079_64 * t.powi(3)
        - 0.000_023_857 * t.powi(4)
        - 0.000_000_038_3 * t.powi(5);
    arcsec / 3600.0
}
