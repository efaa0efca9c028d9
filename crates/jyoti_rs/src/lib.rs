//! Convenience facade for the jyoti engine.
//!
//! Holds the two process-wide settings (ephemeris data path and precession
//! model), a global backend [`Dispatcher`](jyoti_core::Dispatcher), and
//! entry points that take raw identifiers.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use jyoti_rs::*;
//!
//! set_ephemeris_data_path("kernels/data");
//! set_precession_model(1); // Lahiri
//! init().await;
//!
//! let jd = julian_day(2023, 1, 1, 0.0);
//! let moon = body_longitude_by_id(jd, 1, CalcFlags::SIDEREAL_WITH_SPEED.bits())?;
//! println!("Moon: {:.4}°", moon.longitude_deg);
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{
    ascendant_and_houses, ayanamsha, body_longitude, body_longitude_by_id, chart, julian_day,
    sidereal_longitude,
};
pub use error::JyotiError;
pub use global::{
    backend_kind, engine, init, is_initialized, precession_model, set_ephemeris_data_path,
    set_precession_model,
};

pub use jyoti_core::{
    AyanamshaSystem, BackendKind, Body, CalcFlags, EngineConfig, HouseCusps, HouseSystem,
    LongitudeResult,
};
pub use jyoti_time::Instant;
pub use jyoti_vedic_base::{BodyPosition, Chart, ChartRequest};
