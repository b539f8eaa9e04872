use seafight::{MatchConfig, DEFAULT_GRID_SIZE};

#[test]
fn test_default_config_is_valid() {
    let config = MatchConfig::default();
    assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_grid_below_default_is_rejected() {
    let small = MatchConfig {
        grid_size: 5,
        seed: None,
    };
    let err = small.validate().unwrap_err();
    assert!(err.to_string().contains("too small"));

    let ok = MatchConfig {
        grid_size: 6,
        seed: Some(1),
    };
    assert!(ok.validate().is_ok());
}

#[test]
fn test_with_seed_keeps_default_size() {
    let config = MatchConfig::with_seed(Some(42));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
}
