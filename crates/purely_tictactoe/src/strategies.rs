//! Example strategies.
//!
//! The stateless ones are plain functions and plug straight into the game
//! loop. Strategies that need memory (an RNG, a script) are small structs
//! implementing [`Strategy`].

use super::game::Strategy;
use super::{Board, Player, Position, rules};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, instrument};

/// First entry of `moves`, or [`Position::NONE`] if there is none.
pub fn first_from_moves(moves: &[Position]) -> Position {
    moves.first().copied().unwrap_or(Position::NONE)
}

/// Uniformly chosen entry of `moves`, or [`Position::NONE`] if there is none.
pub fn random_from_moves<R: Rng + ?Sized>(moves: &[Position], rng: &mut R) -> Position {
    moves.choose(rng).copied().unwrap_or(Position::NONE)
}

/// Plays the first empty cell in row-major order.
pub fn first_available(board: &Board, _player: Player) -> Position {
    first_from_moves(&rules::valid_moves(board))
}

/// Takes the center, then the first free corner, then the first free cell.
pub fn center_first(board: &Board, player: Player) -> Position {
    if board.is_empty(Position::CENTER) {
        return Position::CENTER;
    }

    Position::CORNERS
        .iter()
        .copied()
        .find(|corner| board.is_empty(*corner))
        .unwrap_or_else(|| first_available(board, player))
}

/// Plays a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a strategy whose choices are fixed by `seed`.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select(&mut self, board: &Board, _player: Player) -> Position {
        random_from_moves(&rules::valid_moves(board), &mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Plays a fixed list of positions in order, then [`Position::NONE`].
///
/// The script is played as given, legal or not, which makes this the
/// handy way to drive a game into a particular position or a forfeit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStrategy {
    script: VecDeque<Position>,
}

impl ScriptedStrategy {
    /// Creates a strategy that will play `positions` in order.
    pub fn new(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            script: positions.into_iter().collect(),
        }
    }

    /// Positions not yet played.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Strategy for ScriptedStrategy {
    fn select(&mut self, _board: &Board, player: Player) -> Position {
        let pos = self.script.pop_front().unwrap_or(Position::NONE);
        debug!(%player, position = %pos, remaining = self.script.len(), "Scripted move");
        pos
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// The built-in strategies, selectable by name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    /// [`RandomStrategy`].
    Random,
    /// [`first_available`].
    FirstAvailable,
    /// [`center_first`].
    CenterFirst,
}

impl StrategyKind {
    /// Builds the strategy. `seed` only affects [`StrategyKind::Random`];
    /// without one the RNG is seeded from the operating system.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => {
                Box::new(seed.map_or_else(RandomStrategy::new, RandomStrategy::seeded))
            }
            StrategyKind::FirstAvailable => {
                Box::new(NamedStrategy("first-available", first_available))
            }
            StrategyKind::CenterFirst => Box::new(NamedStrategy("center-first", center_first)),
        }
    }
}

/// A function strategy carrying a display name.
struct NamedStrategy<F>(&'static str, F);

impl<F> Strategy for NamedStrategy<F>
where
    F: FnMut(&Board, Player) -> Position,
{
    fn select(&mut self, board: &Board, player: Player) -> Position {
        (self.1)(board, player)
    }

    fn name(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_first_available_on_full_board() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(first_available(&board, Player::X), Position::NONE);
    }

    #[test]
    fn test_center_first_prefers_center() {
        assert_eq!(center_first(&Board::new(), Player::X), Position::CENTER);
    }

    #[test]
    fn test_center_first_falls_back_to_corners_then_edges() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(center_first(&board, Player::X), Position::new(0, 2));

        let board: Board = "X.O .O. X.O".parse().unwrap();
        assert_eq!(center_first(&board, Player::X), Position::new(0, 1));
    }

    #[test]
    fn test_seeded_random_is_repeatable() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(7);
        let mut b = RandomStrategy::seeded(7);
        for _ in 0..10 {
            assert_eq!(a.select(&board, Player::X), b.select(&board, Player::X));
        }
    }

    #[test]
    fn test_random_picks_only_empty_cells() {
        let board: Board = "XOX OX. OXO".parse().unwrap();
        let mut strategy = RandomStrategy::seeded(1);
        for _ in 0..10 {
            assert_eq!(strategy.select(&board, Player::O), Position::new(1, 2));
        }
    }

    #[test]
    fn test_scripted_runs_out() {
        let mut strategy = ScriptedStrategy::new([Position::new(2, 2)]);
        assert_eq!(strategy.select(&Board::new(), Player::X), Position::new(2, 2));
        assert_eq!(strategy.remaining(), 0);
        assert_eq!(strategy.select(&Board::new(), Player::X), Position::NONE);
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in StrategyKind::iter() {
            let name = kind.to_string();
            assert_eq!(name.parse::<StrategyKind>().unwrap(), kind);
            assert_eq!(kind.build(Some(3)).name(), name);
        }
        assert_eq!(
            "center-first".parse::<StrategyKind>().unwrap(),
            StrategyKind::CenterFirst
        );
    }
}
