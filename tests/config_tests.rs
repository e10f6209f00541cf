//! Trail configuration tests: defaults, YAML persistence, validation.

use cursor_trail::config::{Config, ConfigError};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.trail_delay, 0.0);
    assert_eq!(config.decay_fast, 0.1);
    assert_eq!(config.decay_slow, 0.4);
    assert_eq!(config.start_threshold, 2);
    assert_eq!(config.beam_thickness, 1.5);
    assert_eq!(config.underline_thickness, 2.0);
    assert!(!config.choreographed);
}

#[test]
fn test_config_new_matches_default() {
    assert_eq!(Config::new(), Config::default());
}

#[test]
fn test_config_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.yaml");

    let config = Config {
        trail_delay: 0.25,
        decay_fast: 0.05,
        decay_slow: 0.9,
        start_threshold: 0,
        choreographed: true,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_from_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.yaml");
    std::fs::write(&path, "choreographed: true\ndecay_slow: 1.0\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.choreographed);
    assert_eq!(config.decay_slow, 1.0);
    assert_eq!(config.decay_fast, 0.1);
    assert_eq!(config.start_threshold, 2);
}

#[test]
fn test_load_from_rejects_invalid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.yaml");
    std::fs::write(&path, "decay_fast: [not a number\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.downcast_ref::<ConfigError>().is_some());
}

#[test]
fn test_load_from_rejects_invalid_decay_pair() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.yaml");
    std::fs::write(&path, "decay_fast: 0.5\ndecay_slow: 0.2\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    let cfg_err = err.downcast_ref::<ConfigError>().expect("typed error");
    assert!(matches!(cfg_err, ConfigError::Validation(_)));
}

#[test]
fn test_load_from_rejects_non_finite_values() {
    // YAML `.inf` parses as f32 infinity, so validation has to catch it
    let dir = tempfile::tempdir().unwrap();
    for contents in [
        "trail_delay: .inf\n",
        "decay_fast: .inf\n",
        "decay_slow: .inf\n",
        "decay_fast: .nan\n",
    ] {
        let path = dir.path().join("trail.yaml");
        std::fs::write(&path, contents).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        let cfg_err = err.downcast_ref::<ConfigError>().expect("typed error");
        assert!(
            matches!(cfg_err, ConfigError::Validation(_)),
            "expected validation error for {contents:?}"
        );
    }
}

#[test]
fn test_save_to_refuses_invalid_config() {
    // save must never persist a file that load_from would reject
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.yaml");

    let config = Config {
        trail_delay: f32::INFINITY,
        ..Default::default()
    };
    let err = config.save_to(&path).unwrap_err();
    let cfg_err = err.downcast_ref::<ConfigError>().expect("typed error");
    assert!(matches!(cfg_err, ConfigError::Validation(_)));
    assert!(!path.exists());
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(&dir.path().join("missing.yaml")).unwrap_err();
    let cfg_err = err.downcast_ref::<ConfigError>().expect("typed error");
    assert!(matches!(cfg_err, ConfigError::Io(_)));
}
