//! Text rendering and parsing of boards.

use super::{Board, Cell, Player};

const DIVIDER: &str = "---|---|---\n";

/// `'X'`, `'O'`, or `' '` for an empty cell.
pub fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Occupied(Player::X) => 'X',
        Cell::Occupied(Player::O) => 'O',
        Cell::Empty => ' ',
    }
}

/// Inverse of [`cell_to_char`]; any character other than `X` or `O` is empty.
pub fn char_to_cell(c: char) -> Cell {
    match c {
        'X' => Cell::Occupied(Player::X),
        'O' => Cell::Occupied(Player::O),
        _ => Cell::Empty,
    }
}

/// Renders the board as three ` c | c | c ` rows separated by `---|---|---`.
///
/// ```
/// use purely_tictactoe::{Board, Player, Position, board_to_string, make_move};
///
/// let board = make_move(&Board::new(), Position::new(0, 0), Player::X).unwrap();
/// assert_eq!(
///     board_to_string(&board),
///     " X |   |   \n---|---|---\n   |   |   \n---|---|---\n   |   |   \n"
/// );
/// ```
pub fn board_to_string(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            format!(
                " {} | {} | {} \n",
                cell_to_char(row[0]),
                cell_to_char(row[1]),
                cell_to_char(row[2])
            )
        })
        .collect::<Vec<_>>()
        .join(DIVIDER)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&board_to_string(self))
    }
}

/// Text that does not describe a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is not a cell symbol.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The text held the wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `X` and `O` are marks in either case, `.` and `-` are empty.
    /// Whitespace and `|` are ignored, so `"XO. .X. ..O"` and `"XO|.X|..O"` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Occupied(Player::X)),
                'O' | 'o' => Ok(Cell::Occupied(Player::O)),
                '.' | '-' => Ok(Cell::Empty),
                other => Err(BoardParseError::UnexpectedChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut rows = [[Cell::Empty; 3]; 3];
        for (i, cell) in cells.into_iter().enumerate() {
            rows[i / 3][i % 3] = cell;
        }
        Ok(Board::from_rows(rows))
    }
}
