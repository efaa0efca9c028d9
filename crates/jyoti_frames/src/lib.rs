//! Angle and frame helpers shared by the ephemeris backends.
//!
//! Provides longitude normalisation, the obliquity of the ecliptic,
//! equatorial → ecliptic rotation, Cartesian ↔ spherical conversion and
//! the general precession in longitude.

pub mod angle;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use angle::{angular_separation_deg, normalize_360, wrap_180};
pub use obliquity::{
    OBLIQUITY_J2000_DEG, mean_obliquity_iau2006_deg, mean_obliquity_linear_deg,
};
pub use precession::general_precession_longitude_deg;
pub use rotation::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
