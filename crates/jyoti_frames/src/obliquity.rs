//! Mean obliquity of the ecliptic.

/// Mean obliquity at J2000.0: 84381.406 arcsec (IAU 2006).
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// Linear-in-century approximation, adequate for the low-order model.
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_linear_deg(t: f64) -> f64 {
    23.439_291 - 0.013_004_2 * t
}

/// IAU 2006 mean obliquity polynomial (Capitaine et al. 2003), degrees.
pub fn mean_obliquity_iau2006_deg(t: f64) -> f64 {
    let arcsec = 84_381.406 - 46.836_769 * t - 0.000_183_1 * t * t + 0.002_003_40 * t.powi(3)
        - 0.000_000_576 * t.powi(4)
        - 0.000_000_043_4 * t.powi(5);
    arcsec / 3600.0
}
