//! Rotation between the equatorial and ecliptic frames about the x axis.

/// Rotate an equatorial vector into the ecliptic frame for obliquity `eps_deg`.
pub fn equatorial_to_ecliptic(v: &[f64; 3], eps_deg: f64) -> [f64; 3] {
    let (s, c) = eps_deg.to_radians().sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}

/// Rotate an ecliptic vector into the equatorial frame for obliquity `eps_deg`.
pub fn ecliptic_to_equatorial(v: &[f64; 3], eps_deg: f64) -> [f64; 3] {
    let (s, c) = eps_deg.to_radians().sin_cos();
    [v[0], c * v[1] - s * v[2], s * v[1] + c * v[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OBLIQUITY_J2000_DEG;

    #[test]
    fn x_axis_unchanged() {
        let v = equatorial_to_ecliptic(&[1.0, 0.0, 0.0], OBLIQUITY_J2000_DEG);
        assert_eq!(v, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn celestial_pole_tilts_by_obliquity() {
        let v = equatorial_to_ecliptic(&[0.0, 0.0, 1.0], OBLIQUITY_J2000_DEG);
        let lat = v[2].asin().to_degrees();
        assert!((lat - (90.0 - OBLIQUITY_J2000_DEG)).abs() < 1e-10, "lat = {lat}");
    }

    #[test]
    fn inverse_rotation() {
        let v = [0.3, -0.7, 0.2];
        let back = ecliptic_to_equatorial(&equatorial_to_ecliptic(&v, 23.4), 23.4);
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() < 1e-14);
        }
    }
}
