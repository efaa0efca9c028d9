//! One-time backend selection.
//!
//! The first `init` tries to build a [`KernelBackend`] on a blocking task.
//! On failure it logs once and settles on the [`AnalyticBackend`]. Every
//! later call returns the same backend without retrying.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::OnceCell;

use crate::analytic::AnalyticBackend;
use crate::backend::{BackendKind, EphemerisBackend};
use crate::kernel_backend::KernelBackend;

/// Shared handle to whichever backend was selected.
pub type SharedBackend = Arc<dyn EphemerisBackend>;

/// Memoised backend selection.
#[derive(Default)]
pub struct Dispatcher {
    backend: OnceCell<SharedBackend>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("backend", &self.kind().map(BackendKind::name))
            .finish()
    }
}

impl Dispatcher {
    pub const fn new() -> Self {
        Self {
            backend: OnceCell::const_new(),
        }
    }

    /// Select a backend on first call; return the memoised one afterwards.
    ///
    /// `ephemeris_path` is only consulted by the first call.
    pub async fn init(&self, ephemeris_path: Option<PathBuf>) -> SharedBackend {
        self.backend
            .get_or_init(|| select_backend(ephemeris_path))
            .await
            .clone()
    }

    pub fn get(&self) -> Option<SharedBackend> {
        self.backend.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.backend.initialized()
    }

    pub fn kind(&self) -> Option<BackendKind> {
        self.backend.get().map(|b| b.kind())
    }
}

async fn select_backend(ephemeris_path: Option<PathBuf>) -> SharedBackend {
    let Some(path) = ephemeris_path else {
        warn!("no ephemeris data path set, using analytic backend");
        return Arc::new(AnalyticBackend::new());
    };
    let shown = path.display().to_string();
    match tokio::task::spawn_blocking(move || KernelBackend::from_path(&path)).await {
        Ok(Ok(kernel)) => {
            debug!("selected kernel backend ({shown})");
            Arc::new(kernel)
        }
        Ok(Err(e)) => {
            warn!("kernel backend unavailable ({e}), using analytic backend");
            Arc::new(AnalyticBackend::new())
        }
        Err(e) => {
            warn!("kernel load task failed ({e}), using analytic backend");
            Arc::new(AnalyticBackend::new())
        }
    }
}
