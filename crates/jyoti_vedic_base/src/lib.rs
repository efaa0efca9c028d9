//! Vedic post-processing of sidereal longitudes.
//!
//! This crate provides:
//! - Rashi (sign) placement with truncated degrees-minutes-seconds
//! - 27-nakshatra and pada lookup
//! - Graha table mapped onto engine bodies
//! - Combustion, exaltation and debilitation flags
//! - Whole-sign house placement and full chart assembly

pub mod bhava;
pub mod chart;
pub mod combustion;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;

pub use bhava::{house_from_longitudes, house_of};
pub use chart::{BodyPosition, Chart, ChartRequest, ConditionFlags, compute_chart};
pub use combustion::{combustion_orb, is_combust};
pub use dignity::{debilitation_sign, exaltation_sign, is_debilitated, is_exalted};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPlacement, PADA_SPAN, nakshatra_placement,
};
pub use rashi::{ALL_RASHIS, Rashi, SignPlacement, placement_to_deg, sign_index, sign_placement};
