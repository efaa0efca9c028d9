//! Orbit → heliocentric ecliptic → geocentric longitude.

use jyoti_frames::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};

use crate::body::Body;
use crate::elements::{OrbitalElements, SOLAR_ORBIT, element_rates};
use crate::error::EngineError;
use crate::kepler::solve_kepler;

/// Heliocentric ecliptic position of date, AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl HeliocentricPosition {
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub const fn from_array(v: [f64; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    pub fn spherical(self) -> SphericalCoords {
        cartesian_to_spherical(&self.to_array())
    }
}

/// Place a body on its orbit and rotate into the ecliptic frame.
pub fn orbit_position(el: &OrbitalElements) -> Result<HeliocentricPosition, EngineError> {
    let e = el.eccentricity;
    let a = el.semi_major_axis_au;
    let ecc = solve_kepler(el.mean_anomaly_deg, e)?.eccentric_anomaly_rad;

    let xv = a * (ecc.cos() - e);
    let yv = a * (1.0 - e * e).sqrt() * ecc.sin();
    let v = yv.atan2(xv);
    let r = xv.hypot(yv);

    let l = v + el.perihelion_deg.to_radians();
    let (sn, cn) = el.node_deg.to_radians().sin_cos();
    let (si, ci) = el.inclination_deg.to_radians().sin_cos();
    let (sl, cl) = l.sin_cos();
    Ok(HeliocentricPosition {
        x: r * (cn * cl - sn * sl * ci),
        y: r * (sn * cl + cn * sl * ci),
        z: r * sl * si,
    })
}

/// Principal mutual perturbations of Jupiter, Saturn and Uranus, deg of longitude.
///
/// `mj`, `ms`, `mu` are the mean anomalies of the three planets in radians.
pub fn perturbation_longitude_deg(body: Body, mj: f64, ms: f64, mu: f64) -> f64 {
    let r = f64::to_radians;
    match body {
        Body::Jupiter => {
            -0.332 * (2.0 * mj - 5.0 * ms - r(67.6)).sin()
                - 0.056 * (2.0 * mj - 2.0 * ms + r(21.0)).sin()
                + 0.042 * (3.0 * mj - 5.0 * ms + r(21.0)).sin()
                - 0.036 * (mj - 2.0 * ms).sin()
                + 0.022 * (mj - ms).cos()
                + 0.023 * (2.0 * mj - 3.0 * ms + r(52.0)).sin()
                - 0.016 * (mj - 5.0 * ms - r(69.0)).sin()
        }
        Body::Saturn => {
            0.812 * (2.0 * mj - 5.0 * ms - r(67.6)).sin()
                - 0.229 * (2.0 * mj - 4.0 * ms - r(2.0)).cos()
                + 0.119 * (mj - 2.0 * ms - r(3.0)).sin()
                + 0.046 * (2.0 * mj - 6.0 * ms - r(69.0)).sin()
                + 0.014 * (mj - 3.0 * ms + r(32.0)).sin()
        }
        Body::Uranus => {
            0.040 * (ms - 2.0 * mu + r(6.0)).sin() + 0.035 * (ms - 3.0 * mu + r(33.0)).sin()
                - 0.015 * (mj - mu + r(20.0)).sin()
        }
        _ => 0.0,
    }
}

fn mean_anomaly_rad(body: Body, d: f64) -> f64 {
    element_rates(body).map_or(0.0, |r| r.at(d).mean_anomaly_deg.to_radians())
}

/// Heliocentric position of a planet `d` days after the element epoch,
/// perturbations included.
pub fn heliocentric_position(body: Body, d: f64) -> Result<HeliocentricPosition, EngineError> {
    let rates = element_rates(body)
        .filter(|_| body.is_planet())
        .ok_or(EngineError::UnsupportedBody(body.name()))?;
    let pos = orbit_position(&rates.at(d))?;
    if !matches!(body, Body::Jupiter | Body::Saturn | Body::Uranus) {
        return Ok(pos);
    }
    let dl = perturbation_longitude_deg(
        body,
        mean_anomaly_rad(Body::Jupiter, d),
        mean_anomaly_rad(Body::Saturn, d),
        mean_anomaly_rad(Body::Uranus, d),
    );
    let mut s = pos.spherical();
    s.lon_deg += dl;
    Ok(HeliocentricPosition::from_array(spherical_to_cartesian(&s)))
}

/// Geocentric position of the Sun, the negative of Earth's heliocentric vector.
pub fn sun_geocentric(d: f64) -> Result<HeliocentricPosition, EngineError> {
    orbit_position(&SOLAR_ORBIT.at(d))
}

/// Geocentric ecliptic vector of a planet: `planet - earth`.
///
/// Identical for inferior and superior planets; the sign convention is
/// carried by Earth's vector, which is `-sun_geocentric`.
pub fn geocentric_vector(body: Body, d: f64) -> Result<[f64; 3], EngineError> {
    let p = heliocentric_position(body, d)?;
    let s = sun_geocentric(d)?;
    Ok([p.x + s.x, p.y + s.y, p.z + s.z])
}

/// Geocentric tropical longitude of a planet, deg in [0, 360).
pub fn geocentric_longitude_deg(body: Body, d: f64) -> Result<f64, EngineError> {
    Ok(cartesian_to_spherical(&geocentric_vector(body, d)?).lon_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::days_since_element_epoch;

    #[test]
    fn circular_orbit_in_ecliptic() {
        let el = OrbitalElements {
            node_deg: 0.0,
            inclination_deg: 0.0,
            perihelion_deg: 90.0,
            semi_major_axis_au: 2.0,
            eccentricity: 0.0,
            mean_anomaly_deg: 0.0,
        };
        let p = orbit_position(&el).expect("orbit");
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn inclination_lifts_out_of_plane() {
        let el = OrbitalElements {
            node_deg: 0.0,
            inclination_deg: 30.0,
            perihelion_deg: 90.0,
            semi_major_axis_au: 1.0,
            eccentricity: 0.0,
            mean_anomaly_deg: 0.0,
        };
        let p = orbit_position(&el).expect("orbit");
        assert!((p.z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sun_distance_near_one_au() {
        for d in [0.0, 100.0, 200.0, 300.0] {
            let r = sun_geocentric(d).expect("sun").spherical().distance;
            assert!((0.98..1.02).contains(&r), "d={d} r={r}");
        }
    }

    #[test]
    fn perturbations_only_for_gas_giants() {
        assert_eq!(perturbation_longitude_deg(Body::Mars, 1.0, 2.0, 3.0), 0.0);
        assert!(perturbation_longitude_deg(Body::Saturn, 1.0, 2.0, 3.0).abs() < 1.3);
    }

    #[test]
    fn nodes_and_luminaries_rejected() {
        assert!(matches!(
            heliocentric_position(Body::Moon, 0.0),
            Err(EngineError::UnsupportedBody("Moon"))
        ));
        assert!(heliocentric_position(Body::Sun, 0.0).is_err());
        assert!(heliocentric_position(Body::Rahu, 0.0).is_err());
    }

    #[test]
    fn planet_longitudes_2023_new_year() {
        let d = days_since_element_epoch(2_459_945.5);
        let cases = [
            (Body::Mercury, 293.708),
            (Body::Venus, 297.40),
            (Body::Mars, 69.073),
            (Body::Jupiter, 1.202),
            (Body::Saturn, 322.429),
            (Body::Uranus, 45.168),
            (Body::Neptune, 352.88),
            (Body::Pluto, 297.646),
        ];
        for (b, expected) in cases {
            let lon = geocentric_longitude_deg(b, d).expect("longitude");
            assert!((lon - expected).abs() < 0.05, "{b}: {lon} vs {expected}");
        }
    }
}
