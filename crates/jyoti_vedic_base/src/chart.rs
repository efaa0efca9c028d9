//! Full chart: ascendant, houses and every body's placement and condition.

use jyoti_core::{
    ALL_BODIES, AyanamshaSystem, Body, CalcFlags, Engine, HouseCusps, HouseSystem,
    LongitudeResult, is_retrograde,
};
use jyoti_frames::normalize_360;
use serde::Serialize;

use crate::bhava::house_of;
use crate::combustion::is_combust;
use crate::dignity::{is_debilitated, is_exalted};
use crate::error::VedicError;
use crate::nakshatra::{NakshatraPlacement, nakshatra_placement};
use crate::rashi::{SignPlacement, sign_placement};

/// Classical condition flags of one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConditionFlags {
    pub combust: bool,
    pub exalted: bool,
    pub debilitated: bool,
}

/// One body placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: Body,
    pub name: &'static str,
    /// Sidereal longitude, deg.
    pub longitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub is_retrograde: bool,
    pub sign: SignPlacement,
    pub nakshatra: NakshatraPlacement,
    /// Whole-sign house, 1..=12.
    pub house: u8,
    pub conditions: ConditionFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub jd_ut: f64,
    pub ayanamsha: AyanamshaSystem,
    pub ayanamsha_deg: f64,
    pub houses: HouseCusps,
    pub ascendant: SignPlacement,
    pub positions: Vec<BodyPosition>,
}

impl Chart {
    pub fn position(&self, body: Body) -> Option<&BodyPosition> {
        self.positions.iter().find(|p| p.body == body)
    }
}

/// Instant, observer and bodies for [`compute_chart`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub jd_ut: f64,
    pub latitude_deg: f64,
    /// East positive.
    pub longitude_deg: f64,
    /// Cusp layout reported in `houses`; placement is always whole-sign.
    pub house_system: HouseSystem,
    pub bodies: Vec<Body>,
}

impl ChartRequest {
    /// Whole-sign chart of every body.
    pub fn new(jd_ut: f64, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            jd_ut,
            latitude_deg,
            longitude_deg,
            house_system: HouseSystem::WholeSign,
            bodies: ALL_BODIES.to_vec(),
        }
    }

    pub fn with_house_system(mut self, system: HouseSystem) -> Self {
        self.house_system = system;
        self
    }

    pub fn with_bodies(mut self, bodies: &[Body]) -> Self {
        self.bodies = bodies.to_vec();
        self
    }
}

/// Compute houses, then place and classify each requested body.
///
/// Ketu is derived from Rahu so the two stay exactly opposite and share
/// their motion.
pub fn compute_chart(engine: &Engine, request: &ChartRequest) -> Result<Chart, VedicError> {
    if request.bodies.is_empty() {
        return Err(VedicError::InvalidRequest("no bodies requested"));
    }
    let jd = request.jd_ut;
    let houses = engine.ascendant_and_houses(
        jd,
        request.latitude_deg,
        request.longitude_deg,
        request.house_system,
    )?;
    let asc_sign = sign_placement(houses.ascendant_deg);

    let flags = CalcFlags::SIDEREAL_WITH_SPEED;
    let sun = engine.body_longitude(jd, Body::Sun, flags)?;
    let mut rahu: Option<LongitudeResult> = None;

    let mut positions = Vec::with_capacity(request.bodies.len());
    for &body in &request.bodies {
        let lr = match body {
            Body::Sun => sun,
            Body::Rahu | Body::Ketu => {
                let r = match rahu {
                    Some(r) => r,
                    None => {
                        let r = engine.body_longitude(jd, Body::Rahu, flags)?;
                        rahu = Some(r);
                        r
                    }
                };
                if body == Body::Ketu {
                    LongitudeResult {
                        longitude_deg: normalize_360(r.longitude_deg + 180.0),
                        ..r
                    }
                } else {
                    r
                }
            }
            _ => engine.body_longitude(jd, body, flags)?,
        };
        positions.push(place(body, lr, sun.longitude_deg, asc_sign.sign_index));
    }

    Ok(Chart {
        jd_ut: jd,
        ayanamsha: engine.config().ayanamsha,
        ayanamsha_deg: engine.ayanamsha_deg(jd),
        houses,
        ascendant: asc_sign,
        positions,
    })
}

fn place(body: Body, lr: LongitudeResult, sun_lon: f64, asc_sign: u8) -> BodyPosition {
    let retro = is_retrograde(lr.speed_deg_per_day);
    let sign = sign_placement(lr.longitude_deg);
    BodyPosition {
        body,
        name: body.name(),
        longitude_deg: lr.longitude_deg,
        speed_deg_per_day: lr.speed_deg_per_day,
        is_retrograde: retro,
        sign,
        nakshatra: nakshatra_placement(lr.longitude_deg),
        house: house_of(sign.sign_index, asc_sign),
        conditions: ConditionFlags {
            combust: is_combust(body, lr.longitude_deg, sun_lon, retro),
            exalted: is_exalted(body, sign.sign_index),
            debilitated: is_debilitated(body, sign.sign_index),
        },
    }
}
