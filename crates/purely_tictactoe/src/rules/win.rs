//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, then columns, then the
/// `\` and `/` diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    // Columns
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    // Diagonals
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

/// Returns the player holding all three cells of `line`, if any.
pub fn line_winner(board: &Board, line: &[Position; 3]) -> Option<Player> {
    let [a, b, c] = *line;
    match board.get(a) {
        Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    }
}

/// Checks whether one player holds all of `line`.
pub fn is_winning_line(board: &Board, line: &[Position; 3]) -> bool {
    line_winner(board, line).is_some()
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`WINNING_LINES`] order.
/// Two different winners cannot arise from alternating legal play, so the
/// scan order only decides ties on hand-built boards.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    WINNING_LINES
        .iter()
        .find_map(|line| line_winner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".O. .O. XOX".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.. .O. ..O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..X .X. X..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX ... ...".parse().unwrap();
        assert!(!is_winning_line(&board, &WINNING_LINES[0]));
    }

    #[test]
    fn test_scan_order_breaks_ties() {
        // Unreachable in real play: X owns the top row, O the bottom row.
        let board: Board = "XXX ... OOO".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));

        // O's middle column is scanned before X's right column.
        let board: Board = ".OX .OX .OX".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }
}
