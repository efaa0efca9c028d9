//! Backend evaluating a JPL SPK kernel.
//!
//! Geocentric ICRF vectors are rotated onto the J2000 ecliptic and carried
//! to the mean equinox of date with the IAU 2006 general precession in
//! longitude. One light-time iteration; no aberration or nutation.
//!
//! Instants or bodies the kernel does not cover are answered by the
//! analytic backend, so callers never see a coverage gap.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use jyoti_frames::{
    OBLIQUITY_J2000_DEG, cartesian_to_spherical, equatorial_to_ecliptic,
    general_precession_longitude_deg, mean_obliquity_iau2006_deg, normalize_360,
};
use jyoti_kernel::{KernelError, SpkKernel, jd_to_tdb_seconds};
use jyoti_time::{Instant, J2000_JD};
use log::{debug, warn};

use crate::analytic::AnalyticBackend;
use crate::backend::{BackendKind, EphemerisBackend};
use crate::body::Body;
use crate::error::EngineError;
use crate::motion::central_difference_speed;
use crate::nodes::{mean_ketu_deg, mean_rahu_deg};

/// Speed of light, km/s.
const C_KM_S: f64 = 299_792.458;
const EARTH: i32 = 399;
const SUN: i32 = 10;

/// SPK-backed longitudes. Holds the whole kernel in memory.
#[derive(Debug)]
pub struct KernelBackend {
    kernel: SpkKernel,
    source: PathBuf,
    fallback: AnalyticBackend,
    gap_reported: AtomicBool,
}

/// First `*.bsp` file (by name) in a directory, or the path itself.
pub fn find_kernel_file(path: &Path) -> Result<PathBuf, EngineError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if !path.is_dir() {
        return Err(EngineError::BackendUnavailable(format!(
            "{} does not exist",
            path.display()
        )));
    }
    let entries = std::fs::read_dir(path)
        .map_err(|e| EngineError::BackendUnavailable(format!("{}: {e}", path.display())))?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("bsp"))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next().ok_or_else(|| {
        EngineError::BackendUnavailable(format!("no .bsp kernel in {}", path.display()))
    })
}

impl KernelBackend {
    /// Load from an SPK file or a directory holding one.
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let file = find_kernel_file(path)?;
        let kernel = SpkKernel::load(&file)?;
        let backend = Self::from_kernel(kernel, file)?;
        debug!("kernel backend ready from {}", backend.source.display());
        Ok(backend)
    }

    /// Wrap a loaded kernel. It must chain Earth and the Sun to the barycenter.
    pub fn from_kernel(kernel: SpkKernel, source: PathBuf) -> Result<Self, EngineError> {
        for code in [EARTH, SUN] {
            if kernel.center_for(code).is_none() {
                return Err(EngineError::BackendUnavailable(format!(
                    "kernel has no segment for body {code}"
                )));
            }
        }
        Ok(Self {
            kernel,
            source,
            fallback: AnalyticBackend::new(),
            gap_reported: AtomicBool::new(false),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn kernel(&self) -> &SpkKernel {
        &self.kernel
    }

    fn ssb_position(&self, code: i32, epoch_tdb_s: f64) -> Result<[f64; 3], EngineError> {
        let s = self.kernel.resolve_to_ssb(code, epoch_tdb_s)?;
        Ok([s[0], s[1], s[2]])
    }

    /// Geocentric ICRF position in km, target corrected for light time.
    pub fn geocentric_icrf_km(&self, naif: i32, epoch_tdb_s: f64) -> Result<[f64; 3], EngineError> {
        let earth = self.ssb_position(EARTH, epoch_tdb_s)?;
        let rel = |p: [f64; 3]| [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]];
        let first = rel(self.ssb_position(naif, epoch_tdb_s)?);
        let light_time = (first[0] * first[0] + first[1] * first[1] + first[2] * first[2]).sqrt()
            / C_KM_S;
        Ok(rel(self.ssb_position(naif, epoch_tdb_s - light_time)?))
    }

    fn kernel_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EngineError> {
        let jd_tt = Instant::from_jd_ut(jd_ut).jd_tt();
        let t = (jd_tt - J2000_JD) / 36_525.0;
        let naif = match (body, body.naif_code()) {
            (Body::Rahu, _) => return Ok(mean_rahu_deg(t)),
            (Body::Ketu, _) => return Ok(mean_ketu_deg(t)),
            (_, Some(code)) => code,
            (_, None) => return Err(EngineError::UnsupportedBody(body.name())),
        };
        let icrf = self.geocentric_icrf_km(naif, jd_to_tdb_seconds(jd_tt))?;
        let ecl = equatorial_to_ecliptic(&icrf, OBLIQUITY_J2000_DEG);
        let lon_j2000 = cartesian_to_spherical(&ecl).lon_deg;
        Ok(normalize_360(lon_j2000 + general_precession_longitude_deg(t)))
    }

    /// Log the first coverage gap at `warn`, later ones at `debug`.
    fn report_gap(&self, body: Body, jd_ut: f64, err: &EngineError) {
        if self.gap_reported.swap(true, Ordering::Relaxed) {
            debug!("{} at JD {jd_ut} outside kernel ({err}), using analytic backend", body.name());
        } else {
            warn!(
                "{} at JD {jd_ut} outside kernel {} ({err}), using analytic backend",
                body.name(),
                self.source.display()
            );
        }
    }
}

/// Missing segment or epoch outside every segment.
fn is_coverage_gap(err: &EngineError) -> bool {
    matches!(
        err,
        EngineError::Kernel(
            KernelError::EpochOutOfRange { .. } | KernelError::SegmentNotFound { .. }
        )
    )
}

impl EphemerisBackend for KernelBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Kernel
    }

    fn tropical_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EngineError> {
        match self.kernel_longitude(jd_ut, body) {
            Err(e) if is_coverage_gap(&e) => {
                self.report_gap(body, jd_ut, &e);
                self.fallback.tropical_longitude(jd_ut, body)
            }
            other => other,
        }
    }

    /// Both difference points come from the same source; a step that leaves
    /// the kernel switches the whole difference to the analytic backend.
    fn tropical_speed(&self, jd_ut: f64, body: Body, step_days: f64) -> Result<f64, EngineError> {
        let pair = self
            .kernel_longitude(jd_ut - step_days, body)
            .and_then(|before| Ok((before, self.kernel_longitude(jd_ut + step_days, body)?)));
        match pair {
            Ok((before, after)) => Ok(central_difference_speed(before, after, step_days)),
            Err(e) if is_coverage_gap(&e) => {
                self.report_gap(body, jd_ut, &e);
                self.fallback.tropical_speed(jd_ut, body, step_days)
            }
            Err(e) => Err(e),
        }
    }

    fn obliquity_deg(&self, jd_ut: f64) -> f64 {
        let jd_tt = Instant::from_jd_ut(jd_ut).jd_tt();
        mean_obliquity_iau2006_deg((jd_tt - J2000_JD) / 36_525.0)
    }
}
