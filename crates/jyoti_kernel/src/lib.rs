//! NAIF SPK ephemeris kernel reader.
//!
//! Parses the DAF container (file record, summary records) and evaluates
//! Type 2 (Chebyshev position-only) segments. Positions are in km and
//! epochs in TDB seconds past J2000.0, matching the kernel contents.
//!
//! Layout references: NAIF "DAF Required Reading" and "SPK Required Reading".

pub mod chebyshev;
mod daf;
mod error;
mod spk;
mod writer;

pub use daf::{DafHeader, Endian};
pub use error::KernelError;
pub use spk::{SpkEvaluation, SpkKernel, SpkSegment, planet_body_to_barycenter};
pub use writer::{Type2Segment, write_type2_spk};

/// Seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a TDB Julian date into TDB seconds past J2000.0.
pub fn jd_to_tdb_seconds(jd_tdb: f64) -> f64 {
    (jd_tdb - J2000_JD) * SECONDS_PER_DAY
}
