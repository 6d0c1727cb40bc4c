//! Narrated walkthrough of the functional tic-tac-toe core.
//!
//! Each section returns its transcript as a `String` so the binary decides
//! where it goes.

use purely_tictactoe::strategies::{RandomStrategy, ScriptedStrategy, first_available};
use purely_tictactoe::{Board, GameResult, Player, Position, Strategy, check_winner, make_move, play_game};
use std::fmt::Write;
use tracing::instrument;

/// Why a demo section could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DemoError {
    /// A scripted move in the narration was rejected.
    #[display("Scripted move {} for {} was rejected", _1, _0)]
    ScriptRejected(Player, Position),

    /// Writing to the transcript failed.
    #[display("Failed to write transcript")]
    Format,
}

impl std::error::Error for DemoError {}

impl From<std::fmt::Error> for DemoError {
    fn from(_: std::fmt::Error) -> Self {
        DemoError::Format
    }
}

fn play(board: &Board, pos: Position, player: Player) -> Result<Board, DemoError> {
    make_move(board, pos, player).ok_or(DemoError::ScriptRejected(player, pos))
}

fn heading(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len()))?;
    writeln!(out)
}

fn outcome_label(winner: Option<Player>, forfeit: bool) -> String {
    match winner {
        Some(player) => player.to_string(),
        None if forfeit => "Draw (forfeit)".to_string(),
        None => "Draw".to_string(),
    }
}

fn winner_label(result: &GameResult) -> String {
    outcome_label(result.winner(), result.is_forfeit())
}

/// The boards of the scripted opening X(0,0) O(1,1) X(0,1) O(2,2) X(0,2).
pub fn scripted_opening() -> Result<Vec<Board>, DemoError> {
    let script = [
        (Position::new(0, 0), Player::X),
        (Position::new(1, 1), Player::O),
        (Position::new(0, 1), Player::X),
        (Position::new(2, 2), Player::O),
        (Position::new(0, 2), Player::X),
    ];

    let mut boards = vec![Board::new()];
    for (pos, player) in script {
        let last = boards[boards.len() - 1];
        boards.push(play(&last, pos, player)?);
    }
    Ok(boards)
}

/// Moves produce new boards; the old ones stay as they were.
#[instrument]
pub fn immutability() -> Result<String, DemoError> {
    let boards = scripted_opening()?;
    let empty = boards[0];
    let after_x = boards[1];
    let last = boards[boards.len() - 1];

    let mut out = String::new();
    heading(&mut out, "DEMO 1: Immutability")?;
    writeln!(out, "Empty board:\n{}", empty)?;
    writeln!(out, "After X plays (0,0):\n{}", after_x)?;
    writeln!(out, "Original empty board is unchanged:\n{}", empty)?;
    writeln!(out, "Final board (X wins!):\n{}", last)?;
    writeln!(out, "Winner: {}\n", outcome_label(check_winner(&last), false))?;
    Ok(out)
}

/// Undo is holding on to an earlier board.
#[instrument]
pub fn undo() -> Result<String, DemoError> {
    let boards = scripted_opening()?;

    let mut out = String::new();
    heading(&mut out, "DEMO 2: Easy Undo")?;
    writeln!(out, "All previous boards still exist!")?;
    writeln!(out, "We can 'undo' by using any previous state:\n")?;
    let labels = ["After X's first move", "After O's first move", "After X's second move"];
    for (label, board) in labels.iter().zip(&boards[1..]) {
        writeln!(out, "{}:\n{}", label, board)?;
    }
    Ok(out)
}

/// Several continuations of one board exist side by side.
#[instrument]
pub fn branching() -> Result<String, DemoError> {
    let root = play(&Board::new(), Position::new(0, 0), Player::X)?;
    let branches = [
        ("O plays center", Position::new(1, 1)),
        ("O plays corner", Position::new(2, 2)),
        ("O plays edge", Position::new(0, 1)),
    ];

    let mut out = String::new();
    heading(&mut out, "DEMO 3: Branching (What-If Analysis)")?;
    writeln!(out, "Starting from this position:\n{}", root)?;
    writeln!(out, "O can play in different positions. Let's explore:\n")?;
    for (i, (label, pos)) in branches.iter().enumerate() {
        let branch = play(&root, *pos, Player::O)?;
        writeln!(out, "Branch {} - {} {}:\n{}", i + 1, label, pos, branch)?;
    }
    writeln!(out, "All branches exist simultaneously!\n")?;
    Ok(out)
}

/// Strategies are values handed to the game loop.
///
/// `seed` fixes the random strategies so the transcript is repeatable.
#[instrument]
pub fn higher_order(seed: Option<u64>) -> Result<String, DemoError> {
    let random = |offset: u64| {
        seed.map_or_else(RandomStrategy::new, |s| {
            RandomStrategy::seeded(s.wrapping_add(offset))
        })
    };

    let mut out = String::new();
    heading(&mut out, "DEMO 4: Higher-Order Functions")?;
    writeln!(out, "Playing 3 games with different strategy combinations:\n")?;

    let games: [(&str, GameResult); 3] = [
        (
            "Random vs Random",
            play_game(&mut random(0), &mut random(1)),
        ),
        (
            "First-Available vs Random",
            play_game(&mut first_available, &mut random(2)),
        ),
        (
            "First-Available vs First-Available",
            play_game(&mut first_available, &mut first_available),
        ),
    ];

    for (i, (label, result)) in games.iter().enumerate() {
        writeln!(out, "Game {} ({}):\n{}", i + 1, label, result.board())?;
        writeln!(out, "Winner: {}\n", winner_label(result))?;
    }
    Ok(out)
}

/// A strategy that proposes an illegal move ends the game on the spot.
#[instrument]
pub fn forfeit() -> Result<String, DemoError> {
    let mut cheater = ScriptedStrategy::new([Position::new(0, 0), Position::new(5, 5)]);
    let result = play_game(&mut cheater, &mut first_available);

    let mut out = String::new();
    heading(&mut out, "DEMO 5: Forfeit")?;
    writeln!(
        out,
        "X's {} strategy proposes (5, 5) on its second turn.\n",
        cheater.name()
    )?;
    writeln!(out, "Board when play stopped:\n{}", result.board())?;
    writeln!(out, "Winner: {}\n", winner_label(&result))?;
    Ok(out)
}

/// The full narrated transcript.
pub fn transcript(seed: Option<u64>) -> Result<String, DemoError> {
    let banner = "==============================================";
    let mut out = String::new();
    writeln!(out, "{}\n  Functional Tic-Tac-Toe Demo\n{}\n", banner, banner)?;
    out.push_str(&immutability()?);
    out.push_str(&undo()?);
    out.push_str(&branching()?);
    out.push_str(&higher_order(seed)?);
    out.push_str(&forfeit()?);
    writeln!(out, "{}\n  Key Functional Programming Concepts\n{}\n", banner, banner)?;
    writeln!(out, "1. PURE FUNCTIONS: check_winner(), is_full() - no side effects")?;
    writeln!(out, "2. IMMUTABILITY: make_move() returns a NEW board")?;
    writeln!(out, "3. EASY UNDO: just use a previous board value")?;
    writeln!(out, "4. BRANCHING: explore multiple game states simultaneously")?;
    writeln!(out, "5. HIGHER-ORDER: pass strategies as arguments")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(outcome_label(Some(Player::O), false), "O");
        assert_eq!(outcome_label(None, false), "Draw");
        assert_eq!(outcome_label(None, true), "Draw (forfeit)");
    }
}
