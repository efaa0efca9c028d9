use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_core::EngineError;
use jyoti_vedic_base::VedicError;

/// Errors from the facade entry points.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JyotiError {
    /// [`init`](crate::init) has not completed yet.
    NotInitialized,
    /// The stored precession model id names no ayanamsha system.
    UnknownPrecessionModel(i32),
    Engine(EngineError),
    Vedic(VedicError),
}

impl Display for JyotiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "engine not initialized; call init() first"),
            Self::UnknownPrecessionModel(id) => write!(f, "unknown precession model id {id}"),
            Self::Engine(e) => write!(f, "{e}"),
            Self::Vedic(e) => write!(f, "{e}"),
        }
    }
}

impl Error for JyotiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Vedic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for JyotiError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<VedicError> for JyotiError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}
