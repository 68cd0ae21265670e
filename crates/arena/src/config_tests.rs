use super::*;

#[test]
fn test_parse_full_config() {
    let config = ArenaConfig::from_toml_str(
        r#"
        games = 25
        depth = 4
        pruning = false
        alternate_colors = false
        random_opening_plies = 6
        verbose = true
        "#,
    )
    .unwrap();

    let mc = config.into_match_config();
    assert_eq!(mc.num_games, 25);
    assert_eq!(mc.depth, 4);
    assert!(!mc.pruning);
    assert!(!mc.alternate_colors);
    assert_eq!(mc.random_opening_plies, 6);
    assert!(mc.verbose);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config = ArenaConfig::from_toml_str("games = 3").unwrap();
    let mc = config.into_match_config();
    let base = MatchConfig::default();
    assert_eq!(mc.num_games, 3);
    assert_eq!(mc.depth, base.depth);
    assert_eq!(mc.pruning, base.pruning);
}

#[test]
fn test_rejects_zero_depth() {
    assert!(matches!(
        ArenaConfig::from_toml_str("depth = 0"),
        Err(ConfigError::ZeroDepth)
    ));
}

#[test]
fn test_rejects_unknown_keys() {
    assert!(matches!(
        ArenaConfig::from_toml_str("time_per_move = 5"),
        Err(ConfigError::TomlParse(_))
    ));
}

#[test]
fn test_rejects_malformed_toml() {
    assert!(ArenaConfig::from_toml_str("games = ").is_err());
}
