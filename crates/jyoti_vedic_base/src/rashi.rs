//! Rashi (zodiac sign) placement.
//!
//! Twelve signs of 30 deg from Mesha (Aries) at 0 deg sidereal. Position
//! inside the sign is reported as whole degrees and minutes by truncation
//! and whole seconds by rounding, never spilling into the next sign.

use jyoti_frames::normalize_360;
use serde::Serialize;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 1-based sign number (Mesha = 1).
    pub const fn number(self) -> u8 {
        match self {
            Self::Mesha => 1,
            Self::Vrishabha => 2,
            Self::Mithuna => 3,
            Self::Karka => 4,
            Self::Simha => 5,
            Self::Kanya => 6,
            Self::Tula => 7,
            Self::Vrischika => 8,
            Self::Dhanu => 9,
            Self::Makara => 10,
            Self::Kumbha => 11,
            Self::Meena => 12,
        }
    }

    /// Rashi for a 1-based sign number.
    pub const fn from_number(n: u8) -> Option<Self> {
        if n == 0 || n > 12 {
            return None;
        }
        Some(ALL_RASHIS[(n - 1) as usize])
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Sign and position inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignPlacement {
    /// 1..=12.
    pub sign_index: u8,
    pub rashi: Rashi,
    /// 0..=29.
    pub degree: u8,
    /// 0..=59.
    pub minute: u8,
    /// 0..=59, rounded.
    pub second: u8,
}

/// 1-based sign number of a longitude.
pub fn sign_index(longitude_deg: f64) -> u8 {
    ((normalize_360(longitude_deg) / 30.0).floor() as u8).min(11) + 1
}

/// Decompose a sidereal longitude into sign, degree, minute and second.
pub fn sign_placement(longitude_deg: f64) -> SignPlacement {
    let lon = normalize_360(longitude_deg);
    let sign_index = sign_index(lon);
    let within = (lon - f64::from(sign_index - 1) * 30.0).clamp(0.0, 30.0);

    let mut degree = within.trunc() as u8;
    let minutes_total = (within - f64::from(degree)) * 60.0;
    let mut minute = minutes_total.floor() as u8;
    let mut second = ((minutes_total - f64::from(minute)) * 60.0).round() as u8;

    if second >= 60 {
        second = 0;
        minute += 1;
    }
    if minute >= 60 {
        minute = 0;
        degree += 1;
    }
    if degree >= 30 {
        // rounding reached the next sign boundary
        degree = 29;
        minute = 59;
        second = 59;
    }

    SignPlacement {
        sign_index,
        rashi: ALL_RASHIS[(sign_index - 1) as usize],
        degree,
        minute,
        second,
    }
}

/// Longitude at the start of the placement's second.
pub fn placement_to_deg(p: &SignPlacement) -> f64 {
    f64::from(p.sign_index - 1) * 30.0
        + f64::from(p.degree)
        + f64::from(p.minute) / 60.0
        + f64::from(p.second) / 3600.0
}
