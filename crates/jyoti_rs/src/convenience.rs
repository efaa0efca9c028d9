use jyoti_core::{Body, CalcFlags, HouseCusps, HouseSystem, LongitudeResult};
use jyoti_vedic_base::{Chart, ChartRequest, compute_chart};
use log::warn;

use crate::error::JyotiError;
use crate::global::engine;

/// Julian Day (UT) of a civil date and fractional UT hours.
///
/// Pure; does not need [`init`](crate::init).
pub fn julian_day(year: i32, month: u32, day: u32, ut_hours: f64) -> f64 {
    jyoti_time::julian_day(year, month, day, ut_hours)
}

/// Longitude of `body` with the global engine.
pub fn body_longitude(
    jd_ut: f64,
    body: Body,
    flags: CalcFlags,
) -> Result<LongitudeResult, JyotiError> {
    Ok(engine()?.body_longitude(jd_ut, body, flags)?)
}

/// Longitude by numeric body id and raw flag bits.
///
/// An unknown id logs a warning and yields an all-zero result instead of
/// an error.
pub fn body_longitude_by_id(
    jd_ut: f64,
    body_id: i32,
    flag_bits: u32,
) -> Result<LongitudeResult, JyotiError> {
    let Some(body) = Body::from_code(body_id) else {
        warn!("unsupported body id {body_id}, returning zero longitude");
        return Ok(LongitudeResult::default());
    };
    body_longitude(jd_ut, body, CalcFlags::from_bits(flag_bits))
}

/// Sidereal longitude in degrees. Shorthand for [`body_longitude`].
pub fn sidereal_longitude(jd_ut: f64, body: Body) -> Result<f64, JyotiError> {
    let flags = CalcFlags {
        sidereal: true,
        speed: false,
    };
    Ok(body_longitude(jd_ut, body, flags)?.longitude_deg)
}

/// Ascendant, MC and cusps; `house_system` is a one-letter code (`W`, `E`).
pub fn ascendant_and_houses(
    jd_ut: f64,
    lat_deg: f64,
    lon_deg: f64,
    house_system: char,
) -> Result<HouseCusps, JyotiError> {
    let system = HouseSystem::from_code(house_system)?;
    Ok(engine()?.ascendant_and_houses(jd_ut, lat_deg, lon_deg, system)?)
}

/// Ayanamsha of the current precession model, deg.
pub fn ayanamsha(jd_ut: f64) -> Result<f64, JyotiError> {
    Ok(engine()?.ayanamsha_deg(jd_ut))
}

/// Whole-sign chart of every body for an observer.
pub fn chart(jd_ut: f64, lat_deg: f64, lon_deg: f64) -> Result<Chart, JyotiError> {
    let request = ChartRequest::new(jd_ut, lat_deg, lon_deg);
    Ok(compute_chart(&engine()?, &request)?)
}
