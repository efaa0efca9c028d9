use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_core::EngineError;

/// Errors from chart assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    Engine(EngineError),
    InvalidRequest(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::InvalidRequest(msg) => write!(f, "invalid chart request: {msg}"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::InvalidRequest(_) => None,
        }
    }
}

impl From<EngineError> for VedicError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}
