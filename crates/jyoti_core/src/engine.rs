//! Public position and house operations over a selected backend.

use std::sync::Arc;

use jyoti_frames::normalize_360;
use serde::Serialize;

use crate::analytic::AnalyticBackend;
use crate::ayanamsha::ayanamsha_deg;
use crate::backend::{BackendKind, EphemerisBackend};
use crate::body::Body;
use crate::config::EngineConfig;
use crate::dispatch::{Dispatcher, SharedBackend};
use crate::error::EngineError;
use crate::houses::{HouseCusps, HouseSystem, cusps_for, validate_observer};

/// What `body_longitude` should compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalcFlags {
    /// Subtract the configured ayanamsha.
    pub sidereal: bool,
    /// Fill in the longitude rate.
    pub speed: bool,
}

impl CalcFlags {
    pub const SPEED_BIT: u32 = 256;
    pub const SIDEREAL_BIT: u32 = 64 * 1024;

    pub const TROPICAL: Self = Self {
        sidereal: false,
        speed: false,
    };
    pub const SIDEREAL_WITH_SPEED: Self = Self {
        sidereal: true,
        speed: true,
    };

    /// Decode the usual flag bits (`256` speed, `65536` sidereal); others are ignored.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            sidereal: bits & Self::SIDEREAL_BIT != 0,
            speed: bits & Self::SPEED_BIT != 0,
        }
    }

    pub const fn bits(self) -> u32 {
        let mut b = 0;
        if self.sidereal {
            b |= Self::SIDEREAL_BIT;
        }
        if self.speed {
            b |= Self::SPEED_BIT;
        }
        b
    }
}

/// Longitude and its rate. The rate is zero unless requested.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LongitudeResult {
    pub longitude_deg: f64,
    pub speed_deg_per_day: f64,
}

/// Computes longitudes, ascendant and cusps.
///
/// `Engine` is [`Send`] + [`Sync`]; clone the `Arc` it was built from to
/// share the backend across engines with different configurations.
pub struct Engine {
    backend: SharedBackend,
    config: EngineConfig,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("backend", &self.backend.kind())
            .field("config", &self.config)
            .finish()
    }
}

impl Engine {
    pub fn new(backend: SharedBackend, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    /// Engine on the analytic backend, ignoring `ephemeris_path`.
    pub fn analytic(config: EngineConfig) -> Result<Self, EngineError> {
        Self::new(Arc::new(AnalyticBackend::new()), config)
    }

    /// Engine on whatever backend `dispatcher` selects for this config.
    pub async fn from_dispatcher(
        dispatcher: &Dispatcher,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let backend = dispatcher.init(config.ephemeris_path.clone()).await;
        Self::new(backend, config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn backend(&self) -> &dyn EphemerisBackend {
        self.backend.as_ref()
    }

    pub fn julian_day(&self, year: i32, month: u32, day: u32, ut_hours: f64) -> f64 {
        self.backend.julian_day(year, month, day, ut_hours)
    }

    /// Ayanamsha of the configured system at `jd_ut`.
    pub fn ayanamsha_deg(&self, jd_ut: f64) -> f64 {
        ayanamsha_deg(self.config.ayanamsha, jd_ut)
    }

    /// Tropical → sidereal with the configured system.
    pub fn to_sidereal(&self, jd_ut: f64, tropical_deg: f64) -> f64 {
        normalize_360(tropical_deg - self.ayanamsha_deg(jd_ut))
    }

    /// Geocentric longitude of `body`, optionally sidereal and with its rate.
    pub fn body_longitude(
        &self,
        jd_ut: f64,
        body: Body,
        flags: CalcFlags,
    ) -> Result<LongitudeResult, EngineError> {
        let tropical = self.backend.tropical_longitude(jd_ut, body)?;
        let longitude_deg = if flags.sidereal {
            self.to_sidereal(jd_ut, tropical)
        } else {
            tropical
        };
        let speed_deg_per_day = if flags.speed {
            let v = self
                .backend
                .tropical_speed(jd_ut, body, self.config.speed_step_days)?;
            // The linear ayanamsha shifts every sidereal rate by the same constant.
            if flags.sidereal {
                v - self.config.ayanamsha.daily_rate_deg()
            } else {
                v
            }
        } else {
            0.0
        };
        Ok(LongitudeResult {
            longitude_deg,
            speed_deg_per_day,
        })
    }

    /// Sidereal ascendant, MC and cusps for an observer (east longitude positive).
    pub fn ascendant_and_houses(
        &self,
        jd_ut: f64,
        lat_deg: f64,
        lon_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EngineError> {
        validate_observer(jd_ut, lat_deg, lon_deg)?;
        let (asc, mc) = self.backend.tropical_angles(jd_ut, lat_deg, lon_deg);
        if !asc.is_finite() || !mc.is_finite() {
            return Err(EngineError::InvalidHouses("ascendant is not finite"));
        }
        let ascendant_deg = self.to_sidereal(jd_ut, asc);
        Ok(HouseCusps {
            ascendant_deg,
            mc_deg: self.to_sidereal(jd_ut, mc),
            cusps: cusps_for(system, ascendant_deg),
            system,
        })
    }
}
