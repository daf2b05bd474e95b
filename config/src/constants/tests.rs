//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.max_vertices >= MIN_POLYGON_VERTICES);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 64).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 2).unwrap_err(),
        ConfigError::InvalidVertexLimit(2)
    );
}

#[test]
fn new_rejects_nan_tolerance() {
    assert!(matches!(
        GlobalConfig::new(f64::NAN, 64),
        Err(ConfigError::InvalidTolerance(_))
    ));
    assert!(GlobalConfig::new(f64::INFINITY, 64).is_err());
}

#[test]
fn error_messages_name_the_field() {
    let err = GlobalConfig::new(-1.0, 64).unwrap_err();
    assert!(err.to_string().contains("tolerance"));
    let err = GlobalConfig::new(1.0, 1).unwrap_err();
    assert!(err.to_string().contains("max_vertices"));
}
