//! Mean lunar nodes (Rahu and Ketu).
//!
//! Mean longitude of the ascending node, Meeus *Astronomical Algorithms*
//! eq. 47.7. `t` = Julian centuries since J2000.0.

use jyoti_frames::normalize_360;

/// Mean Rahu longitude, deg in [0, 360).
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(
        125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t * t + t * t * t / 467_441.0,
    )
}

/// Mean Ketu longitude: exactly opposite Rahu.
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}
