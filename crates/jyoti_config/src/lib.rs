//! Configuration file loader.
//!
//! ```toml
//! [engine]
//! ayanamsha = "lahiri"
//! ephemeris_path = "kernels"      # relative to this file
//! speed_step_minutes = 1.0
//! house_system = "W"
//!
//! [observer]
//! latitude = 28.6139
//! longitude = 77.2090
//! ```

use std::path::{Path, PathBuf};

use jyoti_core::{AyanamshaSystem, EngineConfig, EngineError, HouseSystem};
use serde::Deserialize;
use thiserror::Error;

/// `[engine]` table. Every key is optional.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EngineSection {
    #[serde(default)]
    pub ayanamsha: Option<String>,
    #[serde(default)]
    pub ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    pub speed_step_minutes: Option<f64>,
    #[serde(default)]
    pub house_system: Option<String>,
}

/// `[observer]` table, degrees, east longitude positive.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ObserverConfig {
    pub latitude: f64,
    pub longitude: f64,
}

/// Parsed configuration file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JyotiConfig {
    #[serde(default)]
    pub engine: EngineSection,
    #[serde(default)]
    pub observer: Option<ObserverConfig>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid engine settings: {0}")]
    Engine(#[from] EngineError),
    #[error("unknown house system '{0}'")]
    HouseSystem(String),
    #[error("observer latitude {0} outside [-90, 90]")]
    Latitude(f64),
}

/// Parse configuration text. Relative paths are kept as written.
pub fn parse_config(text: &str) -> Result<JyotiConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load a configuration file, resolving a relative `ephemeris_path`
/// against the file's directory.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<JyotiConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let mut config = parse_config(&contents)?;
    if let (Some(eph), Some(dir)) = (config.engine.ephemeris_path.as_mut(), path.parent()) {
        if eph.is_relative() {
            *eph = dir.join(&*eph);
        }
    }
    Ok(config)
}

impl JyotiConfig {
    /// Build and validate the engine settings.
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut cfg = EngineConfig::default();
        if let Some(name) = &self.engine.ayanamsha {
            cfg.ayanamsha = name.parse::<AyanamshaSystem>()?;
        }
        cfg.ephemeris_path = self.engine.ephemeris_path.clone();
        if let Some(minutes) = self.engine.speed_step_minutes {
            cfg.speed_step_days = minutes / 1440.0;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// House system code, whole-sign when absent.
    pub fn house_system(&self) -> Result<HouseSystem, ConfigError> {
        match self.engine.house_system.as_deref().map(str::trim) {
            None | Some("") => Ok(HouseSystem::WholeSign),
            Some(code) => {
                let mut chars = code.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(HouseSystem::from_code(c)?),
                    _ => Ok(match code.to_ascii_lowercase().as_str() {
                        "whole-sign" | "whole_sign" | "wholesign" => HouseSystem::WholeSign,
                        "equal" => HouseSystem::Equal,
                        _ => return Err(ConfigError::HouseSystem(code.to_string())),
                    }),
                }
            }
        }
    }

    /// Observer coordinates, checked for a valid latitude.
    pub fn observer(&self) -> Result<Option<ObserverConfig>, ConfigError> {
        match self.observer {
            Some(o) if !(-90.0..=90.0).contains(&o.latitude) => Err(ConfigError::Latitude(o.latitude)),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse_config("").expect("parse");
        assert_eq!(cfg, JyotiConfig::default());
        assert_eq!(cfg.engine_config().expect("engine"), EngineConfig::default());
        assert_eq!(cfg.house_system().expect("houses"), HouseSystem::WholeSign);
        assert_eq!(cfg.observer().expect("observer"), None);
    }

    #[test]
    fn full_engine_section() {
        let cfg = parse_config(
            r#"
            [engine]
            ayanamsha = "raman"
            ephemeris_path = "/opt/ephe/de440s.bsp"
            speed_step_minutes = 2.0
            house_system = "equal"
            "#,
        )
        .expect("parse");
        let engine = cfg.engine_config().expect("engine");
        assert_eq!(engine.ayanamsha, AyanamshaSystem::Raman);
        assert_eq!(engine.ephemeris_path, Some(PathBuf::from("/opt/ephe/de440s.bsp")));
        assert!((engine.speed_step_days - 2.0 / 1440.0).abs() < 1e-15);
        assert_eq!(cfg.house_system().expect("houses"), HouseSystem::Equal);
    }

    #[test]
    fn single_letter_house_code() {
        let cfg = parse_config("[engine]\nhouse_system = \"e\"").expect("parse");
        assert_eq!(cfg.house_system().expect("houses"), HouseSystem::Equal);
        let cfg = parse_config("[engine]\nhouse_system = \"P\"").expect("parse");
        assert!(matches!(cfg.house_system(), Err(ConfigError::Engine(_))));
        let cfg = parse_config("[engine]\nhouse_system = \"placidus\"").expect("parse");
        assert!(matches!(cfg.house_system(), Err(ConfigError::HouseSystem(_))));
    }

    #[test]
    fn unknown_ayanamsha_is_an_engine_error() {
        let cfg = parse_config("[engine]\nayanamsha = \"sidereal-ish\"").expect("parse");
        assert!(matches!(
            cfg.engine_config(),
            Err(ConfigError::Engine(EngineError::UnknownAyanamsha(_)))
        ));
    }

    #[test]
    fn zero_step_rejected() {
        let cfg = parse_config("[engine]\nspeed_step_minutes = 0.0").expect("parse");
        assert!(matches!(
            cfg.engine_config(),
            Err(ConfigError::Engine(EngineError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(matches!(
            parse_config("[engine]\nayanamsa = \"lahiri\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn observer_latitude_checked() {
        let cfg = parse_config("[observer]\nlatitude = 91.0\nlongitude = 0.0").expect("parse");
        assert!(matches!(cfg.observer(), Err(ConfigError::Latitude(_))));
    }
}
