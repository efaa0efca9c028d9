//! Low-order closed-form series for the Sun and Moon.
//!
//! Sun: Meeus, *Astronomical Algorithms* ch. 25 (apparent longitude, low
//! accuracy). Moon: the leading 19 longitude terms of Meeus ch. 47.
//! Both take `t`, Julian centuries since J2000.0, and return tropical
//! ecliptic longitude of date in degrees [0, 360).

use jyoti_frames::normalize_360;

/// Apparent geocentric longitude of the Sun.
pub fn sun_longitude_deg(t: f64) -> f64 {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// (coefficient deg, D, M, M', F) multipliers of the lunar longitude terms.
const MOON_TERMS: [(f64, f64, f64, f64, f64); 19] = [
    (6.288_774, 0.0, 0.0, 1.0, 0.0),
    (1.274_027, 2.0, 0.0, -1.0, 0.0),
    (0.658_314, 2.0, 0.0, 0.0, 0.0),
    (0.213_618, 0.0, 0.0, 2.0, 0.0),
    (-0.185_116, 0.0, 1.0, 0.0, 0.0),
    (-0.114_332, 0.0, 0.0, 0.0, 2.0),
    (0.058_793, 2.0, 0.0, -2.0, 0.0),
    (0.057_066, 2.0, -1.0, -1.0, 0.0),
    (0.053_322, 2.0, 0.0, 1.0, 0.0),
    (0.045_758, 2.0, -1.0, 0.0, 0.0),
    (-0.040_923, 0.0, 1.0, -1.0, 0.0),
    (-0.034_720, 1.0, 0.0, 0.0, 0.0),
    (-0.030_383, 0.0, 1.0, 1.0, 0.0),
    (0.015_327, 2.0, 0.0, 0.0, -2.0),
    (-0.012_528, 0.0, 0.0, 1.0, 2.0),
    (0.010_980, 0.0, 0.0, 1.0, -2.0),
    (0.010_675, 4.0, 0.0, -1.0, 0.0),
    (0.010_034, 0.0, 0.0, 3.0, 0.0),
    (0.008_548, 4.0, 0.0, -2.0, 0.0),
];

/// Geocentric longitude of the Moon, mean equinox of date.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let l = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();
    let sum: f64 = MOON_TERMS
        .iter()
        .map(|&(c, kd, km, kmp, kf)| c * (kd * d + km * m + kmp * mp + kf * f).sin())
        .sum();
    normalize_360(l + sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(jd: f64) -> f64 {
        (jd - 2_451_545.0) / 36_525.0
    }

    #[test]
    fn sun_meeus_example_25a() {
        // 1992 Oct 13.0 TD: apparent longitude 199.90895 deg
        let lon = sun_longitude_deg(t(2_448_908.5));
        assert!((lon - 199.909).abs() < 0.01, "lon = {lon}");
    }

    #[test]
    fn moon_meeus_example_47a() {
        // 1992 Apr 12.0 TD: geometric longitude 133.162655 deg
        let lon = moon_longitude_deg(t(2_448_724.5));
        assert!((lon - 133.163).abs() < 0.1, "lon = {lon}");
    }

    #[test]
    fn new_year_2023() {
        let tt = t(2_459_945.5);
        assert!((sun_longitude_deg(tt) - 280.288).abs() < 0.01);
        assert!((moon_longitude_deg(tt) - 33.637).abs() < 0.01);
    }
}
