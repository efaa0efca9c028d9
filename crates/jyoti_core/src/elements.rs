//! Mean orbital elements with linear secular rates.
//!
//! Element values and rates from Paul Schlyter, "How to compute planetary
//! positions", epoch 2000 Jan 0.0 UT (JD 2451543.5). Pluto uses the
//! J2000 osculating elements with the node and mean-anomaly drift only.

use jyoti_frames::normalize_360;

use crate::body::Body;

/// JD of the element epoch, 1999 Dec 31.0 = 2000 Jan 0.0.
pub const ELEMENT_EPOCH_JD: f64 = 2_451_543.5;

/// Days from the element epoch.
pub fn days_since_element_epoch(jd: f64) -> f64 {
    jd - ELEMENT_EPOCH_JD
}

/// A value that drifts linearly with time: `base + per_day * d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secular {
    pub base: f64,
    pub per_day: f64,
}

impl Secular {
    pub const fn new(base: f64, per_day: f64) -> Self {
        Self { base, per_day }
    }

    pub const fn fixed(base: f64) -> Self {
        Self { base, per_day: 0.0 }
    }

    pub fn at(self, d: f64) -> f64 {
        self.base + self.per_day * d
    }
}

/// Orbital elements as secular polynomials in days since the epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRates {
    /// Longitude of the ascending node, deg.
    pub node: Secular,
    /// Inclination to the ecliptic, deg.
    pub inclination: Secular,
    /// Argument of perihelion, deg.
    pub perihelion: Secular,
    /// Semi-major axis, AU.
    pub semi_major_axis: Secular,
    pub eccentricity: Secular,
    /// Mean anomaly, deg.
    pub mean_anomaly: Secular,
}

/// Elements evaluated at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub node_deg: f64,
    pub inclination_deg: f64,
    pub perihelion_deg: f64,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    /// Normalised to [0, 360).
    pub mean_anomaly_deg: f64,
}

impl ElementRates {
    pub fn at(&self, d: f64) -> OrbitalElements {
        OrbitalElements {
            node_deg: self.node.at(d),
            inclination_deg: self.inclination.at(d),
            perihelion_deg: self.perihelion.at(d),
            semi_major_axis_au: self.semi_major_axis.at(d),
            eccentricity: self.eccentricity.at(d),
            mean_anomaly_deg: normalize_360(self.mean_anomaly.at(d)),
        }
    }
}

/// Solar orbit as seen from Earth (node and inclination zero).
///
/// Evaluated through the orbit pipeline it gives the geocentric Sun, the
/// negative of Earth's heliocentric vector.
pub const SOLAR_ORBIT: ElementRates = ElementRates {
    node: Secular::fixed(0.0),
    inclination: Secular::fixed(0.0),
    perihelion: Secular::new(282.9404, 4.709_35e-5),
    semi_major_axis: Secular::fixed(1.0),
    eccentricity: Secular::new(0.016_709, -1.151e-9),
    mean_anomaly: Secular::new(356.0470, 0.985_600_258_5),
};

/// Element table for a body, `None` for points not on a heliocentric orbit.
///
/// `Body::Sun` maps to [`SOLAR_ORBIT`].
pub const fn element_rates(body: Body) -> Option<ElementRates> {
    let e = match body {
        Body::Sun => SOLAR_ORBIT,
        Body::Mercury => ElementRates {
            node: Secular::new(48.3313, 3.245_87e-5),
            inclination: Secular::new(7.0047, 5.00e-8),
            perihelion: Secular::new(29.1241, 1.014_44e-5),
            semi_major_axis: Secular::fixed(0.387_098),
            eccentricity: Secular::new(0.205_635, 5.59e-10),
            mean_anomaly: Secular::new(168.6562, 4.092_334_436_8),
        },
        Body::Venus => ElementRates {
            node: Secular::new(76.6799, 2.465_90e-5),
            inclination: Secular::new(3.3946, 2.75e-8),
            perihelion: Secular::new(54.8910, 1.383_74e-5),
            semi_major_axis: Secular::fixed(0.723_330),
            eccentricity: Secular::new(0.006_773, -1.302e-9),
            mean_anomaly: Secular::new(48.0052, 1.602_130_224_4),
        },
        Body::Mars => ElementRates {
            node: Secular::new(49.5574, 2.110_81e-5),
            inclination: Secular::new(1.8497, -1.78e-8),
            perihelion: Secular::new(286.5016, 2.929_61e-5),
            semi_major_axis: Secular::fixed(1.523_688),
            eccentricity: Secular::new(0.093_405, 2.516e-9),
            mean_anomaly: Secular::new(18.6021, 0.524_020_776_6),
        },
        Body::Jupiter => ElementRates {
            node: Secular::new(100.4542, 2.768_54e-5),
            inclination: Secular::new(1.3030, -1.557e-7),
            perihelion: Secular::new(273.8777, 1.645_05e-5),
            semi_major_axis: Secular::fixed(5.202_56),
            eccentricity: Secular::new(0.048_498, 4.469e-9),
            mean_anomaly: Secular::new(19.8950, 0.083_085_300_1),
        },
        Body::Saturn => ElementRates {
            node: Secular::new(113.6634, 2.389_80e-5),
            inclination: Secular::new(2.4886, -1.081e-7),
            perihelion: Secular::new(339.3939, 2.976_61e-5),
            semi_major_axis: Secular::fixed(9.554_75),
            eccentricity: Secular::new(0.055_546, -9.499e-9),
            mean_anomaly: Secular::new(316.9670, 0.033_444_228_2),
        },
        Body::Uranus => ElementRates {
            node: Secular::new(74.0005, 1.3978e-5),
            inclination: Secular::new(0.7733, 1.9e-8),
            perihelion: Secular::new(96.6612, 3.0565e-5),
            semi_major_axis: Secular::new(19.181_71, -1.55e-8),
            eccentricity: Secular::new(0.047_318, 7.45e-9),
            mean_anomaly: Secular::new(142.5905, 0.011_725_806),
        },
        Body::Neptune => ElementRates {
            node: Secular::new(131.7806, 3.0173e-5),
            inclination: Secular::new(1.7700, -2.55e-7),
            perihelion: Secular::new(272.8461, -6.027e-6),
            semi_major_axis: Secular::new(30.058_26, 3.313e-8),
            eccentricity: Secular::new(0.008_606, 2.15e-9),
            mean_anomaly: Secular::new(260.2471, 0.005_995_147),
        },
        Body::Pluto => ElementRates {
            node: Secular::new(110.303_47, 3.8246e-5),
            inclination: Secular::fixed(17.141_75),
            perihelion: Secular::fixed(113.763_29),
            semi_major_axis: Secular::fixed(39.481_686_77),
            eccentricity: Secular::fixed(0.248_807_66),
            mean_anomaly: Secular::new(14.856, 0.003_975_3),
        },
        Body::Moon | Body::Rahu | Body::Ketu => return None,
    };
    Some(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_offset() {
        assert_eq!(days_since_element_epoch(2_451_543.5), 0.0);
        assert_eq!(days_since_element_epoch(2_451_545.0), 1.5);
    }

    #[test]
    fn every_planet_has_elements() {
        for &b in Body::all() {
            let has = element_rates(b).is_some();
            assert_eq!(has, b.is_planet() || b == Body::Sun, "{b}");
        }
    }

    #[test]
    fn eccentricities_are_elliptic() {
        for &b in Body::all() {
            if let Some(rates) = element_rates(b) {
                for d in [-36_525.0, 0.0, 36_525.0] {
                    let e = rates.at(d).eccentricity;
                    assert!((0.0..0.3).contains(&e), "{b} e={e} at d={d}");
                }
            }
        }
    }

    #[test]
    fn mean_anomaly_normalised() {
        let el = element_rates(Body::Mercury).map(|r| r.at(10_000.0));
        let m = el.map(|e| e.mean_anomaly_deg).unwrap_or(f64::NAN);
        assert!((0.0..360.0).contains(&m));
    }
}
