use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_kernel::KernelError;

/// Errors from the position and house engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidConfig(&'static str),
    /// Observer or instant cannot yield a meaningful ascendant.
    InvalidHouses(&'static str),
    UnsupportedHouseSystem(char),
    UnknownAyanamsha(String),
    /// Kepler iteration failed to reach tolerance.
    NoConvergence(&'static str),
    /// Backend has no model for the requested body.
    UnsupportedBody(&'static str),
    Kernel(KernelError),
    /// Kernel backend could not be constructed from the configured path.
    BackendUnavailable(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidHouses(msg) => write!(f, "invalid house computation: {msg}"),
            Self::UnsupportedHouseSystem(code) => write!(f, "unsupported house system '{code}'"),
            Self::UnknownAyanamsha(name) => write!(f, "unknown ayanamsha system: {name}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::UnsupportedBody(name) => write!(f, "unsupported body: {name}"),
            Self::Kernel(e) => write!(f, "kernel error: {e}"),
            Self::BackendUnavailable(msg) => write!(f, "backend unavailable: {msg}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kernel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KernelError> for EngineError {
    fn from(e: KernelError) -> Self {
        Self::Kernel(e)
    }
}
