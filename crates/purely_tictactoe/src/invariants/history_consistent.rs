//! History consistency invariant: history length matches the marks added.

use super::super::{GameResult, rules};
use super::Invariant;

/// Invariant: every move in the history accounts for exactly one new mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameResult> for HistoryConsistentInvariant {
    fn holds(result: &GameResult) -> bool {
        rules::count_moves(result.board())
            == rules::count_moves(result.start()) + result.history().len()
    }

    fn description() -> &'static str {
        "History length matches number of marks placed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::first_available;
    use crate::play_game;

    #[test]
    fn test_played_game_holds() {
        let result = play_game(&mut first_available, &mut first_available);
        assert!(HistoryConsistentInvariant::holds(&result));
        assert_eq!(result.history().len(), 7);
    }

    #[test]
    fn test_dropped_move_violates() {
        let result = play_game(&mut first_available, &mut first_available);
        let mut value = serde_json::to_value(&result).unwrap();
        value["history"].as_array_mut().unwrap().pop();
        let corrupted: GameResult = serde_json::from_value(value).unwrap();

        assert!(!HistoryConsistentInvariant::holds(&corrupted));
    }
}
