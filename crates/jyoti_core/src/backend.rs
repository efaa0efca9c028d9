//! Strategy seam between the engine and its numeric sources.

use jyoti_time::{gmst_deg, local_sidereal_time_deg};

use crate::body::Body;
use crate::error::EngineError;
use crate::houses::{ascendant_deg, mc_deg};
use crate::motion::central_difference_speed;

/// Which implementation serves a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SPK kernel evaluation.
    Kernel,
    /// Orbital elements and closed-form series.
    Analytic,
}

impl BackendKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kernel => "kernel",
            Self::Analytic => "analytic",
        }
    }
}

/// Source of tropical longitudes and the obliquity of the ecliptic.
///
/// Implementors supply the two primitives; speed and angle operations
/// are built on top of them so both backends share the same contract.
pub trait EphemerisBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Tropical geocentric longitude of date, deg in [0, 360).
    fn tropical_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EngineError>;

    /// Mean obliquity of the ecliptic of date, deg.
    fn obliquity_deg(&self, jd_ut: f64) -> f64;

    fn julian_day(&self, year: i32, month: u32, day: u32, ut_hours: f64) -> f64 {
        jyoti_time::julian_day(year, month, day, ut_hours)
    }

    /// Tropical longitude rate, deg/day, by central difference of half-width `step_days`.
    fn tropical_speed(&self, jd_ut: f64, body: Body, step_days: f64) -> Result<f64, EngineError> {
        let before = self.tropical_longitude(jd_ut - step_days, body)?;
        let after = self.tropical_longitude(jd_ut + step_days, body)?;
        Ok(central_difference_speed(before, after, step_days))
    }

    /// Tropical ascendant and MC for an observer (east longitude positive).
    fn tropical_angles(&self, jd_ut: f64, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let lst = local_sidereal_time_deg(gmst_deg(jd_ut), lon_deg);
        let eps = self.obliquity_deg(jd_ut);
        (ascendant_deg(lst, lat_deg, eps), mc_deg(lst, eps))
    }
}
