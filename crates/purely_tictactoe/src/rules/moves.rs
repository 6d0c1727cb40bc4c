//! Move validation and application.

use super::super::{Board, Cell, MoveError, Player, Position};
use super::ALL_POSITIONS;
use tracing::instrument;

/// A board with all nine cells empty.
pub fn empty_board() -> Board {
    Board::new()
}

/// The cell at `pos`; out-of-range positions read as [`Cell::Empty`].
pub fn get_cell(board: &Board, pos: Position) -> Cell {
    board.get(pos)
}

/// True iff both coordinates are in `[0, 3)`.
pub fn is_valid_position(pos: Position) -> bool {
    pos.is_valid()
}

/// True iff the cell at `pos` reads as empty.
pub fn is_empty(board: &Board, pos: Position) -> bool {
    board.is_empty(pos)
}

/// The player who moves after `player`.
pub fn next_player(player: Player) -> Player {
    player.opponent()
}

/// Places `player` at `pos`, returning the new board or the reason it can't.
///
/// The input board is never touched.
///
/// # Errors
///
/// `MoveError::OutOfRange` for positions off the board and
/// `MoveError::Occupied` when the cell already holds a mark.
#[instrument(level = "trace")]
pub fn try_move(board: &Board, pos: Position, player: Player) -> Result<Board, MoveError> {
    if !is_valid_position(pos) {
        return Err(MoveError::OutOfRange(pos));
    }
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied(pos));
    }
    board
        .with_cell(pos, Cell::Occupied(player))
        .ok_or(MoveError::OutOfRange(pos))
}

/// Places `player` at `pos` if the position is on the board and empty.
pub fn make_move(board: &Board, pos: Position, player: Player) -> Option<Board> {
    try_move(board, pos, player).ok()
}

/// Empty positions in row-major order; empty iff the board is full.
pub fn valid_moves(board: &Board) -> Vec<Position> {
    ALL_POSITIONS
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_on_empty_cell() {
        let board = empty_board();
        let next = make_move(&board, Position::new(0, 0), Player::X).unwrap();
        assert_eq!(get_cell(&next, Position::new(0, 0)), Cell::Occupied(Player::X));
        assert_eq!(board, empty_board());
    }

    #[test]
    fn test_move_on_occupied_cell() {
        let board = make_move(&empty_board(), Position::CENTER, Player::X).unwrap();
        assert_eq!(
            try_move(&board, Position::CENTER, Player::O),
            Err(MoveError::Occupied(Position::CENTER))
        );
        assert!(make_move(&board, Position::CENTER, Player::X).is_none());
    }

    #[test]
    fn test_move_out_of_range() {
        let board = empty_board();
        for pos in [Position::new(3, 0), Position::new(0, 3), Position::NONE] {
            assert_eq!(try_move(&board, pos, Player::X), Err(MoveError::OutOfRange(pos)));
        }
    }

    #[test]
    fn test_out_of_range_reads_empty() {
        let board: Board = "XXX XXX XXX".parse().unwrap();
        assert_eq!(get_cell(&board, Position::new(-1, 1)), Cell::Empty);
        assert!(is_empty(&board, Position::new(5, 5)));
    }

    #[test]
    fn test_valid_moves_row_major() {
        let board: Board = "X.. .O. ..X".parse().unwrap();
        assert_eq!(
            valid_moves(&board),
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 0),
                Position::new(2, 1),
            ]
        );
        assert!(valid_moves(&"XOX OXX OXO".parse().unwrap()).is_empty());
    }
}
