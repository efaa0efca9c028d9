//! Pure-algorithmic backend: orbital elements, Sun/Moon series, mean nodes.

use jyoti_frames::mean_obliquity_linear_deg;
use jyoti_time::J2000_JD;

use crate::backend::{BackendKind, EphemerisBackend};
use crate::body::Body;
use crate::elements::days_since_element_epoch;
use crate::error::EngineError;
use crate::heliocentric::geocentric_longitude_deg;
use crate::nodes::{mean_ketu_deg, mean_rahu_deg};
use crate::series::{moon_longitude_deg, sun_longitude_deg};

fn centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Always available; needs no data files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticBackend;

impl AnalyticBackend {
    pub const fn new() -> Self {
        Self
    }
}

impl EphemerisBackend for AnalyticBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Analytic
    }

    fn tropical_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EngineError> {
        let t = centuries(jd_ut);
        match body {
            Body::Sun => Ok(sun_longitude_deg(t)),
            Body::Moon => Ok(moon_longitude_deg(t)),
            Body::Rahu => Ok(mean_rahu_deg(t)),
            Body::Ketu => Ok(mean_ketu_deg(t)),
            _ => geocentric_longitude_deg(body, days_since_element_epoch(jd_ut)),
        }
    }

    fn obliquity_deg(&self, jd_ut: f64) -> f64 {
        mean_obliquity_linear_deg(centuries(jd_ut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD_2023: f64 = 2_459_945.5;

    #[test]
    fn all_bodies_supported() {
        let b = AnalyticBackend::new();
        for &body in Body::all() {
            let lon = b.tropical_longitude(JD_2023, body).expect("longitude");
            assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
        }
    }

    #[test]
    fn speeds_2023() {
        let b = AnalyticBackend::new();
        let step = 1.0 / 1440.0;
        let cases = [
            (Body::Mercury, -0.5085),
            (Body::Venus, 1.2526),
            (Body::Mars, -0.1602),
            (Body::Jupiter, 0.1206),
        ];
        for (body, expected) in cases {
            let v = b.tropical_speed(JD_2023, body, step).expect("speed");
            assert!((v - expected).abs() < 0.005, "{body}: {v} vs {expected}");
        }
    }

    #[test]
    fn angles_at_greenwich_equator() {
        let (asc, mc) = AnalyticBackend::new().tropical_angles(JD_2023, 0.0, 0.0);
        assert!((asc - 191.3026).abs() < 0.01, "asc = {asc}");
        assert!((mc - 99.55).abs() < 0.05, "mc = {mc}");
    }

    #[test]
    fn provided_julian_day() {
        let jd = AnalyticBackend::new().julian_day(2000, 1, 1, 0.0);
        assert_eq!(jd, 2_451_544.5);
    }
}
