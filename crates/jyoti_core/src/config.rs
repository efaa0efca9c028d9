//! Engine configuration passed in at construction.

use std::path::PathBuf;

use crate::ayanamsha::AyanamshaSystem;
use crate::error::EngineError;
use crate::motion::DEFAULT_SPEED_STEP_DAYS;

/// Settings an [`Engine`](crate::Engine) is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub ayanamsha: AyanamshaSystem,
    /// SPK file, or a directory searched for the first `*.bsp`.
    pub ephemeris_path: Option<PathBuf>,
    /// Half-width of the speed finite difference, days.
    pub speed_step_days: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            ephemeris_path: None,
            speed_step_days: DEFAULT_SPEED_STEP_DAYS,
        }
    }
}

impl EngineConfig {
    pub fn with_ayanamsha(mut self, ayanamsha: AyanamshaSystem) -> Self {
        self.ayanamsha = ayanamsha;
        self
    }

    pub fn with_ephemeris_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ephemeris_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.speed_step_days.is_finite() || self.speed_step_days <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "speed_step_days must be finite and positive",
            ));
        }
        if self
            .ephemeris_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(EngineError::InvalidConfig("ephemeris_path must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = EngineConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.ayanamsha, AyanamshaSystem::Lahiri);
        assert!((c.speed_step_days * 1440.0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_step() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let c = EngineConfig {
                speed_step_days: step,
                ..EngineConfig::default()
            };
            assert!(matches!(c.validate(), Err(EngineError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_empty_path() {
        let c = EngineConfig::default().with_ephemeris_path("");
        assert!(matches!(c.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn builders() {
        let c = EngineConfig::default()
            .with_ayanamsha(AyanamshaSystem::Raman)
            .with_ephemeris_path("/data/de440s.bsp");
        assert_eq!(c.ayanamsha, AyanamshaSystem::Raman);
        assert!(c.ephemeris_path.is_some());
    }
}
