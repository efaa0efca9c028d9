use std::fs;

use jyoti_config::{ConfigError, load_config};
use jyoti_core::AyanamshaSystem;

#[test]
fn relative_ephemeris_path_resolves_next_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("jyoti.toml");
    fs::write(
        &path,
        "[engine]\nayanamsha = \"kp\"\nephemeris_path = \"kernels\"\n\n[observer]\nlatitude = 28.6139\nlongitude = 77.2090\n",
    )
    .expect("write config");

    let cfg = load_config(&path).expect("load");
    assert_eq!(cfg.engine.ephemeris_path, Some(dir.path().join("kernels")));
    let engine = cfg.engine_config().expect("engine");
    assert_eq!(engine.ayanamsha, AyanamshaSystem::Krishnamurti);
    let obs = cfg.observer().expect("observer").expect("present");
    assert!((obs.latitude - 28.6139).abs() < 1e-12);
}

#[test]
fn absolute_path_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("jyoti.toml");
    fs::write(&path, "[engine]\nephemeris_path = \"/srv/ephe\"\n").expect("write");
    let cfg = load_config(&path).expect("load");
    assert_eq!(
        cfg.engine.ephemeris_path.as_deref(),
        Some(std::path::Path::new("/srv/ephe"))
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        load_config(dir.path().join("absent.toml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[engine\nayanamsha = ").expect("write");
    assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
}
