//! Tests for match configuration loading.

use purely_games::MatchConfig;
use purely_tictactoe::Player;
use purely_tictactoe::strategies::StrategyKind;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
x_strategy = "first-available"
o_strategy = "center-first"
games = 4
seed = 11
"#
    )
    .unwrap();

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.x_strategy(), StrategyKind::FirstAvailable);
    assert_eq!(*config.o_strategy(), StrategyKind::CenterFirst);
    assert_eq!(*config.games(), 4);
    assert_eq!(*config.seed(), Some(11));
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = MatchConfig::from_toml("").unwrap();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(*config.x_strategy(), StrategyKind::CenterFirst);
    assert_eq!(*config.o_strategy(), StrategyKind::Random);
    assert_eq!(*config.games(), 1);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_zero_games_rejected() {
    let err = MatchConfig::from_toml("games = 0").unwrap_err();
    assert!(err.message.contains("at least 1"));
}

#[test]
fn test_unknown_strategy_rejected() {
    let err = MatchConfig::from_toml(r#"x_strategy = "minimax""#).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_seeds_differ_per_side_and_game() {
    let config = MatchConfig::new(StrategyKind::Random, StrategyKind::Random, 2, Some(100));
    assert_eq!(config.seed_for(0, Player::X), Some(100));
    assert_eq!(config.seed_for(0, Player::O), Some(101));
    assert_eq!(config.seed_for(1, Player::X), Some(102));
    assert_eq!(config.seed_for(1, Player::O), Some(103));

    let unseeded = MatchConfig::default();
    assert_eq!(unseeded.seed_for(0, Player::X), None);
}
