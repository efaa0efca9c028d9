//! Ascendant, midheaven and house cusps.
//!
//! Ascendant: rising intersection of the ecliptic with the eastern
//! horizon, Meeus *Astronomical Algorithms* eq. 14.2 turned so that
//! `atan2` lands on the eastern point. MC: ecliptic point on the
//! meridian.

use jyoti_frames::normalize_360;
use serde::Serialize;

use crate::error::EngineError;

/// Supported cusp layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HouseSystem {
    /// Each house is one whole sign, first house = ascendant's sign.
    #[default]
    WholeSign,
    /// 30-degree houses starting at the ascendant degree.
    Equal,
}

impl HouseSystem {
    /// Single-letter code, `W` or `E`.
    pub const fn code(self) -> char {
        match self {
            Self::WholeSign => 'W',
            Self::Equal => 'E',
        }
    }

    pub fn from_code(code: char) -> Result<Self, EngineError> {
        match code.to_ascii_uppercase() {
            'W' => Ok(Self::WholeSign),
            'E' => Ok(Self::Equal),
            other => Err(EngineError::UnsupportedHouseSystem(other)),
        }
    }
}

/// Sidereal ascendant, MC and twelve cusps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusps {
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    /// `cusps[0]` is the first house.
    pub cusps: [f64; 12],
    pub system: HouseSystem,
}

/// Tropical ascendant for local sidereal time, latitude and obliquity (deg).
pub fn ascendant_deg(lst_deg: f64, lat_deg: f64, eps_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let (se, ce) = eps_deg.to_radians().sin_cos();
    let y = lst.cos();
    let x = -(lst.sin() * ce + lat_deg.to_radians().tan() * se);
    normalize_360(y.atan2(x).to_degrees())
}

/// Tropical midheaven for local sidereal time and obliquity (deg).
pub fn mc_deg(lst_deg: f64, eps_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    normalize_360(lst.sin().atan2(lst.cos() * eps_deg.to_radians().cos()).to_degrees())
}

/// Cusps starting at the beginning of the ascendant's sign.
pub fn whole_sign_cusps(ascendant_deg: f64) -> [f64; 12] {
    let first = (normalize_360(ascendant_deg) / 30.0).floor() * 30.0;
    std::array::from_fn(|k| normalize_360(first + 30.0 * k as f64))
}

/// Cusps at 30-degree steps from the ascendant degree.
pub fn equal_cusps(ascendant_deg: f64) -> [f64; 12] {
    std::array::from_fn(|k| normalize_360(ascendant_deg + 30.0 * k as f64))
}

pub fn cusps_for(system: HouseSystem, ascendant_deg: f64) -> [f64; 12] {
    match system {
        HouseSystem::WholeSign => whole_sign_cusps(ascendant_deg),
        HouseSystem::Equal => equal_cusps(ascendant_deg),
    }
}

/// Reject observers and instants for which no horizon can be defined.
pub fn validate_observer(jd_ut: f64, lat_deg: f64, lon_deg: f64) -> Result<(), EngineError> {
    if !jd_ut.is_finite() {
        return Err(EngineError::InvalidHouses("julian day must be finite"));
    }
    if !lat_deg.is_finite() || !lon_deg.is_finite() {
        return Err(EngineError::InvalidHouses("observer coordinates must be finite"));
    }
    if lat_deg.abs() >= 90.0 {
        return Err(EngineError::InvalidHouses("latitude must lie strictly between -90 and 90"));
    }
    Ok(())
}
