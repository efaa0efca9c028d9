//! Sidereal position and house engine.
//!
//! Computes geocentric ecliptic longitudes of the Sun, Moon, planets and
//! mean lunar nodes, their daily motion, and the ascendant, MC and house
//! cusps for an observer. Two interchangeable backends serve the
//! longitudes:
//!
//! - [`KernelBackend`]: a JPL SPK kernel found on the ephemeris data path
//! - [`AnalyticBackend`]: Keplerian orbital elements and closed-form series
//!
//! A [`Dispatcher`] selects one of them once, preferring the kernel.

pub mod analytic;
pub mod ayanamsha;
pub mod backend;
pub mod body;
pub mod config;
pub mod dispatch;
pub mod elements;
pub mod engine;
pub mod error;
pub mod heliocentric;
pub mod houses;
pub mod kepler;
pub mod kernel_backend;
pub mod motion;
pub mod nodes;
pub mod series;

pub use analytic::AnalyticBackend;
pub use ayanamsha::{ALL_AYANAMSHAS, AyanamshaSystem, ayanamsha_deg};
pub use backend::{BackendKind, EphemerisBackend};
pub use body::{ALL_BODIES, Body};
pub use config::EngineConfig;
pub use dispatch::{Dispatcher, SharedBackend};
pub use elements::{ElementRates, OrbitalElements, element_rates};
pub use engine::{CalcFlags, Engine, LongitudeResult};
pub use error::EngineError;
pub use heliocentric::HeliocentricPosition;
pub use houses::{HouseCusps, HouseSystem};
pub use kepler::{KeplerSolution, solve_kepler};
pub use kernel_backend::KernelBackend;
pub use motion::{DEFAULT_SPEED_STEP_DAYS, RETROGRADE_THRESHOLD_DEG_PER_DAY, is_retrograde};
