//! Longitude arithmetic on the 360-degree circle.

/// Normalize an angle to [0, 360) degrees.
///
/// `normalize_360(x) == normalize_360(x + 360 k)` for every integer `k`.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Wrap an angle difference into [-180, 180).
pub fn wrap_180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_separation_deg(a: f64, b: f64) -> f64 {
    wrap_180(a - b).abs()
}
