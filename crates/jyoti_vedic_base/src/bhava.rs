//! Whole-sign house placement.

use crate::rashi::sign_index;

/// House (1..=12) of a body sign counted from the ascendant sign.
///
/// Signs are 1-based; values past 12 wrap around the zodiac.
pub fn house_of(body_sign: u8, ascendant_sign: u8) -> u8 {
    let offset = (i32::from(body_sign) - i32::from(ascendant_sign)).rem_euclid(12);
    offset as u8 + 1
}

/// House of a sidereal longitude for a sidereal ascendant.
pub fn house_from_longitudes(body_lon_deg: f64, ascendant_deg: f64) -> u8 {
    house_of(sign_index(body_lon_deg), sign_index(ascendant_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_sign_is_first_house() {
        for s in 1..=12 {
            assert_eq!(house_of(s, s), 1);
        }
    }

    #[test]
    fn counts_forward_and_wraps() {
        assert_eq!(house_of(7, 6), 2);
        assert_eq!(house_of(5, 6), 12);
        assert_eq!(house_of(1, 12), 2);
        assert_eq!(house_of(12, 1), 12);
    }

    #[test]
    fn out_of_range_signs_wrap() {
        assert_eq!(house_of(13, 1), 1);
        assert_eq!(house_of(1, 13), 1);
        assert_eq!(house_of(0, 12), 1);
        for (b, a) in [(255, 1), (1, 255), (200, 7), (0, 0)] {
            assert!((1..=12).contains(&house_of(b, a)), "house_of({b}, {a})");
        }
    }

    #[test]
    fn longitudes() {
        assert_eq!(house_from_longitudes(167.5, 160.0), 1);
        assert_eq!(house_from_longitudes(10.0, 167.1), 8);
    }
}
