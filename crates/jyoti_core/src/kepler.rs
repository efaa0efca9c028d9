//! Newton–Raphson solution of Kepler's equation `E - e sin E = M`.

use jyoti_frames::normalize_360;

use crate::error::EngineError;

/// Residual below which the eccentric anomaly is accepted, radians.
pub const KEPLER_TOLERANCE_RAD: f64 = 1e-6;

/// Upper bound on Newton steps.
pub const KEPLER_MAX_ITERATIONS: u32 = 50;

/// Eccentric anomaly and the number of Newton steps it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly_rad: f64,
    pub iterations: u32,
}

/// Solve for the eccentric anomaly of an elliptic orbit.
///
/// `mean_anomaly_deg` is normalised to [0, 360) first. Fails for
/// `e` outside [0, 1) or when the residual does not fall below
/// [`KEPLER_TOLERANCE_RAD`] within [`KEPLER_MAX_ITERATIONS`] steps.
pub fn solve_kepler(mean_anomaly_deg: f64, e: f64) -> Result<KeplerSolution, EngineError> {
    if !(0.0..1.0).contains(&e) {
        return Err(EngineError::NoConvergence("eccentricity outside [0, 1)"));
    }
    if !mean_anomaly_deg.is_finite() {
        return Err(EngineError::NoConvergence("mean anomaly is not finite"));
    }
    let m = normalize_360(mean_anomaly_deg).to_radians();
    let mut ecc = m + e * m.sin() * (1.0 + e * m.cos());
    for iterations in 0..=KEPLER_MAX_ITERATIONS {
        let residual = ecc - e * ecc.sin() - m;
        if residual.abs() < KEPLER_TOLERANCE_RAD {
            return Ok(KeplerSolution {
                eccentric_anomaly_rad: ecc,
                iterations,
            });
        }
        ecc -= residual / (1.0 - e * ecc.cos());
    }
    Err(EngineError::NoConvergence("Kepler iteration cap reached"))
}
