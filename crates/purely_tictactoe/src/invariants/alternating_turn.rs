//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameResult, Player, rules};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// No player moves twice in a row, and a game started from the empty board
/// opens with X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameResult> for AlternatingTurnInvariant {
    fn holds(result: &GameResult) -> bool {
        let history = result.history();

        let opens_with_x = rules::count_moves(result.start()) > 0
            || history.first().is_none_or(|mov| mov.player == Player::X);

        opens_with_x && history.windows(2).all(|pair| pair[0].player != pair[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
