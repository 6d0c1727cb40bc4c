//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use purely_tictactoe::Player;
use purely_tictactoe::strategies::StrategyKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a series of games between two built-in strategies.
///
/// ```toml
/// x_strategy = "center-first"
/// o_strategy = "random"
/// games = 100
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Strategy playing X.
    #[serde(default = "default_x_strategy")]
    x_strategy: StrategyKind,

    /// Strategy playing O.
    #[serde(default = "default_o_strategy")]
    o_strategy: StrategyKind,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Base seed for random strategies; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_x_strategy() -> StrategyKind {
    StrategyKind::CenterFirst
}

fn default_o_strategy() -> StrategyKind {
    StrategyKind::Random
}

fn default_games() -> u32 {
    1
}

impl MatchConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(
        x_strategy: StrategyKind,
        o_strategy: StrategyKind,
        games: u32,
        seed: Option<u64>,
    ) -> Self {
        Self {
            x_strategy,
            o_strategy,
            games,
            seed,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            x = %config.x_strategy,
            o = %config.o_strategy,
            games = config.games,
            "Match config loaded"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }

        Ok(config)
    }

    /// Seed for one side of one game, derived from the base seed.
    ///
    /// X and O get distinct streams and each game gets its own pair, so a
    /// seeded match replays exactly.
    pub fn seed_for(&self, game: u32, player: Player) -> Option<u64> {
        let side = match player {
            Player::X => 0,
            Player::O => 1,
        };
        self.seed
            .map(|base| base.wrapping_add(u64::from(game) * 2 + side))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(default_x_strategy(), default_o_strategy(), default_games(), None)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
