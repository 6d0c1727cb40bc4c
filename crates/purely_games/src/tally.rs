//! Running a series of games and summarizing the outcomes.

use crate::config::MatchConfig;
use derive_getters::Getters;
use purely_tictactoe::{GameResult, Outcome, Player, play_game};
use serde::Serialize;
use tracing::{info, instrument};

/// Outcome counts across a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, derive_new::new)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Games with no winner, forfeits included.
    pub draws: u32,
    /// Games cut short by an illegal move.
    pub forfeits: u32,
}

impl Tally {
    /// Adds one game to the tally.
    pub fn record(mut self, result: &GameResult) -> Self {
        match result.outcome() {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        if result.is_forfeit() {
            self.forfeits += 1;
        }
        self
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {} ({} forfeits) over {} games",
            self.x_wins,
            self.o_wins,
            self.draws,
            self.forfeits,
            self.games()
        )
    }
}

/// Every game of a match plus the summary.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct MatchReport {
    /// Settings the match ran with.
    config: MatchConfig,
    /// Results in the order played.
    results: Vec<GameResult>,
    /// Outcome counts.
    tally: Tally,
}

/// Plays `config.games()` games with fresh strategies for each game.
#[instrument(skip(config), fields(x = %config.x_strategy(), o = %config.o_strategy(), games = *config.games()))]
pub fn run_match(config: &MatchConfig) -> MatchReport {
    let results: Vec<GameResult> = (0..*config.games())
        .map(|game| {
            let mut x = config.x_strategy().build(config.seed_for(game, Player::X));
            let mut o = config.o_strategy().build(config.seed_for(game, Player::O));
            play_game(x.as_mut(), o.as_mut())
        })
        .collect();

    let tally = results.iter().fold(Tally::default(), Tally::record);
    info!(%tally, "Match finished");

    MatchReport {
        config: config.clone(),
        results,
        tally,
    }
}
