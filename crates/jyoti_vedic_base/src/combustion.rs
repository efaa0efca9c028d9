//! Combustion: a body too close to the Sun.
//!
//! Orbs per Brihat Parashara Hora Shastra. Mercury and Venus use tighter
//! orbs when retrograde.

use jyoti_core::Body;
use jyoti_frames::angular_separation_deg;

use crate::graha::Graha;

/// Combustion orb in degrees, `None` where combustion does not apply
/// (Sun, nodes, outer planets).
pub fn combustion_orb(body: Body, is_retrograde: bool) -> Option<f64> {
    match Graha::from_body(body)? {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => Some(if is_retrograde { 12.0 } else { 14.0 }),
        Graha::Guru => Some(11.0),
        Graha::Shukra => Some(if is_retrograde { 8.0 } else { 10.0 }),
        Graha::Shani => Some(15.0),
    }
}

/// Strictly inside the orb; exactly at the orb is not combust.
pub fn is_combust(body: Body, body_lon_deg: f64, sun_lon_deg: f64, is_retrograde: bool) -> bool {
    combustion_orb(body, is_retrograde)
        .is_some_and(|orb| angular_separation_deg(body_lon_deg, sun_lon_deg) < orb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbs() {
        assert_eq!(combustion_orb(Body::Moon, false), Some(12.0));
        assert_eq!(combustion_orb(Body::Mercury, false), Some(14.0));
        assert_eq!(combustion_orb(Body::Mercury, true), Some(12.0));
        assert_eq!(combustion_orb(Body::Venus, true), Some(8.0));
        assert_eq!(combustion_orb(Body::Sun, false), None);
        assert_eq!(combustion_orb(Body::Ketu, false), None);
        assert_eq!(combustion_orb(Body::Neptune, false), None);
    }

    #[test]
    fn strict_threshold() {
        assert!(is_combust(Body::Mars, 116.9, 100.0, false));
        assert!(!is_combust(Body::Mars, 117.0, 100.0, false));
    }

    #[test]
    fn wraps_across_aries() {
        assert!(is_combust(Body::Jupiter, 355.0, 5.0, false));
        assert!(!is_combust(Body::Saturn, 340.0, 5.0, false));
    }

    #[test]
    fn retrograde_mercury_tighter() {
        assert!(is_combust(Body::Mercury, 113.0, 100.0, false));
        assert!(!is_combust(Body::Mercury, 113.0, 100.0, true));
    }

    #[test]
    fn sun_and_outer_planets_never() {
        assert!(!is_combust(Body::Sun, 100.0, 100.0, false));
        assert!(!is_combust(Body::Uranus, 100.0, 100.0, false));
        assert!(!is_combust(Body::Rahu, 100.0, 100.0, false));
    }
}
