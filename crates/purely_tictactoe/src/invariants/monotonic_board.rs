//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameResult, rules};
use super::Invariant;

/// Invariant: cells are monotonic (never overwritten).
///
/// Replaying the history from the starting board must put every mark on an
/// empty cell and land exactly on the final board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameResult> for MonotonicBoardInvariant {
    fn holds(result: &GameResult) -> bool {
        let replayed = result
            .history()
            .iter()
            .try_fold(*result.start(), |board: Board, mov| {
                rules::make_move(&board, mov.position, mov.player)
            });

        replayed.as_ref() == Some(result.board())
    }

    fn description() -> &'static str {
        "Cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::first_available;
    use crate::{Board, play_game};

    #[test]
    fn test_played_game_holds() {
        let result = play_game(&mut first_available, &mut first_available);
        assert!(MonotonicBoardInvariant::holds(&result));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let result = play_game(&mut first_available, &mut first_available);
        let mut value = serde_json::to_value(&result).unwrap();
        let flipped: Board = "OXO XOX O..".parse().unwrap();
        value["board"] = serde_json::to_value(flipped).unwrap();
        let corrupted: GameResult = serde_json::from_value(value).unwrap();

        assert!(!MonotonicBoardInvariant::holds(&corrupted));
    }
}
