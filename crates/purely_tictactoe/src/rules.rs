//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating and advancing board
//! state. None of them mutate their input: a move produces a new board and
//! every query answers the same way for the same board.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{count_moves, is_draw, is_full, is_game_over, status};
pub use moves::{
    empty_board, get_cell, is_empty, is_valid_position, make_move, next_player, try_move,
    valid_moves,
};
pub use win::{WINNING_LINES, check_winner, is_winning_line, line_winner};

use super::Position;

/// Every position in row-major order.
pub const ALL_POSITIONS: [Position; 9] = [
    Position::new(0, 0),
    Position::new(0, 1),
    Position::new(0, 2),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(1, 2),
    Position::new(2, 0),
    Position::new(2, 1),
    Position::new(2, 2),
];
