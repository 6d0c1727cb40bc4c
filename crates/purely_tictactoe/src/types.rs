//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: i32 = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of one square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// A zero-based `(row, col)` coordinate.
///
/// Coordinates outside `[0, 3)` are representable on purpose: strategies
/// return [`Position::NONE`] when they have nothing to play, and lookups
/// treat any out-of-range position as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Position {
    /// Sentinel meaning "no move available".
    pub const NONE: Position = Position::new(-1, -1);

    /// The center square.
    pub const CENTER: Position = Position::new(1, 1);

    /// Corners in the order center-first play tries them.
    pub const CORNERS: [Position; 4] = [
        Position::new(0, 0),
        Position::new(0, 2),
        Position::new(2, 0),
        Position::new(2, 2),
    ];

    /// Creates a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True iff both coordinates lie in `[0, 3)`.
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < SIZE && self.col >= 0 && self.col < SIZE
    }

    /// Array indices for this position, if it is on the board.
    pub fn indices(self) -> Option<(usize, usize)> {
        if self.is_valid() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::str::FromStr for Position {
    type Err = PositionParseError;

    /// Parses `"row,col"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| PositionParseError(s.to_string()))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| PositionParseError(s.to_string()))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| PositionParseError(s.to_string()))?;
        Ok(Position::new(row, col))
    }
}

/// Text that does not describe a `row,col` pair.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid position {:?}, expected \"row,col\"", _0)]
pub struct PositionParseError(pub String);

impl std::error::Error for PositionParseError {}

/// Immutable 3x3 tic-tac-toe board.
///
/// A `Board` is a plain value: it is `Copy`, and no public operation mutates
/// one in place. Transitions hand back a new board, so every earlier board
/// stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Builds a board from rows of cells.
    pub const fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `pos`, or [`Cell::Empty`] when `pos` is off the board.
    pub fn get(&self, pos: Position) -> Cell {
        pos.indices()
            .map(|(row, col)| self.cells[row][col])
            .unwrap_or(Cell::Empty)
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        crate::rules::ALL_POSITIONS
            .iter()
            .map(move |&pos| (pos, self.get(pos)))
    }

    /// Returns a copy with `cell` written at `pos`; `None` if `pos` is off the board.
    ///
    /// No occupancy check happens here; that is the job of the move rules.
    pub(crate) fn with_cell(self, pos: Position, cell: Cell) -> Option<Self> {
        let (row, col) = pos.indices()?;
        let mut next = self;
        next.cells[row][col] = cell;
        Some(next)
    }
}
