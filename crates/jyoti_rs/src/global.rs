//! Process-wide settings and the global backend dispatcher.
//!
//! Settings are write-once-read-many. A later write changes every call that
//! follows it; ordering concurrent writers is up to the caller. The data
//! path is only read by the first [`init`], since the backend is memoised.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use jyoti_core::{AyanamshaSystem, BackendKind, Dispatcher, Engine, EngineConfig};

use crate::error::JyotiError;

struct Settings {
    ephemeris_path: Option<PathBuf>,
    precession_model: i32,
}

static SETTINGS: RwLock<Settings> = RwLock::new(Settings {
    ephemeris_path: None,
    precession_model: AyanamshaSystem::Lahiri.id(),
});

static DISPATCHER: Dispatcher = Dispatcher::new();

/// Directory (or `.bsp` file) searched for the ephemeris kernel.
pub fn set_ephemeris_data_path(path: impl Into<PathBuf>) {
    let mut s = SETTINGS.write().unwrap_or_else(PoisonError::into_inner);
    s.ephemeris_path = Some(path.into());
}

/// Select the ayanamsha by numeric id. The raw value is stored as given;
/// an unknown id surfaces as an error on the next sidereal computation.
pub fn set_precession_model(model_id: i32) {
    let mut s = SETTINGS.write().unwrap_or_else(PoisonError::into_inner);
    s.precession_model = model_id;
}

/// Currently stored precession model id.
pub fn precession_model() -> i32 {
    SETTINGS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .precession_model
}

/// Snapshot of the settings as an engine configuration.
fn config_snapshot() -> Result<EngineConfig, JyotiError> {
    let s = SETTINGS.read().unwrap_or_else(PoisonError::into_inner);
    let ayanamsha = AyanamshaSystem::from_id(s.precession_model)
        .ok_or(JyotiError::UnknownPrecessionModel(s.precession_model))?;
    let mut config = EngineConfig::default().with_ayanamsha(ayanamsha);
    config.ephemeris_path = s.ephemeris_path.clone();
    Ok(config)
}

/// Select the backend from the current data path. Only the first call does
/// any work; it never fails, falling back to the analytic backend.
pub async fn init() -> BackendKind {
    let path = SETTINGS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .ephemeris_path
        .clone();
    DISPATCHER.init(path).await.kind()
}

pub fn is_initialized() -> bool {
    DISPATCHER.is_initialized()
}

/// Backend chosen by [`init`], if it has run.
pub fn backend_kind() -> Option<BackendKind> {
    DISPATCHER.kind()
}

/// An engine over the global backend and a snapshot of current settings.
pub fn engine() -> Result<Engine, JyotiError> {
    let backend = DISPATCHER.get().ok_or(JyotiError::NotInitialized)?;
    Ok(Engine::new(backend, config_snapshot()?)?)
}
