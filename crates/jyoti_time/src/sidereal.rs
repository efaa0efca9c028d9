//! Greenwich mean sidereal time and local sidereal time, in degrees.
//!
//! GMST from Meeus, "Astronomical Algorithms", Eq. 12.4 (IAU 1982 model
//! expressed for any instant, UT Julian Day input).

use crate::julian::J2000_JD;

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / 36525.0;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local sidereal time in degrees from GMST and the observer's longitude.
///
/// Longitude is east-positive. A place east of Greenwich has its meridian
/// turned further toward the east, so its sidereal time runs ahead:
/// `LST = GMST + λ_east`.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}
