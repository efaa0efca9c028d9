//! Cartesian ↔ spherical coordinate conversion.

use crate::angle::normalize_360;

/// Longitude/latitude in degrees plus radius in the caller's length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, [0, 360), from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, [-90, 90].
    pub lat_deg: f64,
    /// Distance from the origin.
    pub distance: f64,
}

/// Convert `[x, y, z]` to spherical coordinates. The origin maps to zeros.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    SphericalCoords {
        lon_deg: normalize_360(y.atan2(x).to_degrees()),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sl, cl) = s.lon_deg.to_radians().sin_cos();
    let (sb, cb) = s.lat_deg.to_radians().sin_cos();
    [s.distance * cb * cl, s.distance * cb * sl, s.distance * sb]
}
