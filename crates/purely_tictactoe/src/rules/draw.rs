//! Fullness, draw and game-over detection for tic-tac-toe.

use super::super::{Board, Cell, GameStatus};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|c| *c != Cell::Empty)
}

/// Number of occupied cells, `0..=9`.
pub fn count_moves(board: &Board) -> usize {
    board
        .rows()
        .iter()
        .flatten()
        .filter(|c| **c != Cell::Empty)
        .count()
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

/// True once someone has won or no empty cells remain.
#[instrument]
pub fn is_game_over(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Classifies the board as in progress, won, or drawn.
pub fn status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(winner) => GameStatus::Won(winner),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_game_over(&board));
        assert_eq!(count_moves(&board), 0);
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "... .X. ...".parse().unwrap();
        assert!(!is_full(&board));
        assert_eq!(count_moves(&board), 1);
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XXX XXX XXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(count_moves(&board), 9);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_draw(&board));
        assert!(is_game_over(&board));
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert!(!is_draw(&board));
        assert!(is_game_over(&board));
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_with_winner_is_won() {
        // X O X / O X O / O X X: X completes the main diagonal on the last cell.
        let board: Board = "XOX OXO OXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }
}
