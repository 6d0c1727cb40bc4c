//! Pure tic-tac-toe rules and a strategy-driven game loop.
//!
//! Boards are immutable values. Every rule is a pure function of its
//! inputs, a move yields a fresh [`Board`], and a game is played by handing
//! two [`Strategy`] values to [`play_game`].
//!
//! ```
//! use purely_tictactoe::{Board, Player, Position, check_winner, make_move};
//!
//! let empty = Board::new();
//! let after_x = make_move(&empty, Position::new(0, 0), Player::X).unwrap();
//!
//! // The original board is untouched.
//! assert_eq!(empty, Board::new());
//! assert_ne!(after_x, empty);
//! assert_eq!(check_winner(&after_x), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod phases;
mod render;
pub mod rules;
pub mod strategies;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameResult, Strategy, play_from, play_game, replay, select_strategy};
pub use phases::{GameStatus, Outcome};
pub use render::{BoardParseError, board_to_string, cell_to_char, char_to_cell};
pub use rules::{
    ALL_POSITIONS, WINNING_LINES, check_winner, count_moves, empty_board, get_cell, is_draw,
    is_empty, is_full, is_game_over, is_valid_position, is_winning_line, line_winner, make_move,
    next_player, status, try_move, valid_moves,
};
pub use types::{Board, CELL_COUNT, Cell, Player, Position, PositionParseError, SIZE};
