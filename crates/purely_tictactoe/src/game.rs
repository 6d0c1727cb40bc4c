//! Strategy-driven game loop.
//!
//! A game is a fold over moves: each turn asks the current player's strategy
//! for a position, applies it to produce a new board, and hands the turn
//! over. Nothing is mutated in place, so the record a game returns can
//! rebuild every intermediate board.

use super::action::{Move, MoveError};
use super::phases::Outcome;
use super::rules;
use super::{Board, CELL_COUNT, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A move-selection policy.
///
/// `select` takes `&mut self` so that strategies can carry state such as a
/// seeded RNG or a script. Any `FnMut(&Board, Player) -> Position`,
/// including plain functions, is a strategy.
pub trait Strategy {
    /// Chooses where `player` should move on `board`.
    ///
    /// Returns [`Position::NONE`] when there is nothing to play.
    fn select(&mut self, board: &Board, player: Player) -> Position;

    /// Short name for logs and reports.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Strategy for F
where
    F: FnMut(&Board, Player) -> Position,
{
    fn select(&mut self, board: &Board, player: Player) -> Position {
        self(board, player)
    }
}

/// Picks the strategy belonging to `player`.
pub fn select_strategy<'a>(
    player: Player,
    strategy_x: &'a mut dyn Strategy,
    strategy_o: &'a mut dyn Strategy,
) -> &'a mut dyn Strategy {
    match player {
        Player::X => strategy_x,
        Player::O => strategy_o,
    }
}

/// Record of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameResult {
    /// Board the game started from.
    start: Board,
    /// Board when play stopped.
    board: Board,
    /// How the game ended.
    outcome: Outcome,
    /// Every applied move, in order.
    history: Vec<Move>,
    /// Player whose strategy proposed an illegal move, ending the game.
    forfeited_by: Option<Player>,
}

impl GameResult {
    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// True if the game stopped on an illegal move rather than a finished board.
    pub fn is_forfeit(&self) -> bool {
        self.forfeited_by.is_some()
    }

    /// Every board the game passed through, from the start to the final board.
    ///
    /// Holding on to an earlier snapshot is all "undo" takes. A record whose
    /// history does not replay (one edited or deserialized by hand) yields
    /// only the boards up to the first move that cannot be applied.
    pub fn snapshots(&self) -> Vec<Board> {
        let mut boards = vec![self.start];
        let mut current = self.start;
        for mov in &self.history {
            match rules::make_move(&current, mov.position, mov.player) {
                Some(next) => {
                    boards.push(next);
                    current = next;
                }
                None => break,
            }
        }
        boards
    }
}

/// Plays a full game from the empty board, X moving first.
///
/// If a strategy proposes an occupied or off-board position, play stops
/// right there: the result keeps the board from before that proposal, the
/// outcome is a draw, and `forfeited_by` names the offender.
///
/// ```
/// use purely_tictactoe::{Player, play_game, strategies::first_available};
///
/// let result = play_game(&mut first_available, &mut first_available);
/// assert_eq!(result.winner(), Some(Player::X));
/// ```
pub fn play_game(strategy_x: &mut dyn Strategy, strategy_o: &mut dyn Strategy) -> GameResult {
    play_from(Board::new(), Player::X, strategy_x, strategy_o)
}

/// Plays from an arbitrary board with `to_move` on turn.
#[instrument(skip(strategy_x, strategy_o), fields(x = strategy_x.name(), o = strategy_o.name()))]
pub fn play_from(
    start: Board,
    to_move: Player,
    strategy_x: &mut dyn Strategy,
    strategy_o: &mut dyn Strategy,
) -> GameResult {
    let mut board = start;
    let mut player = to_move;
    let mut history = Vec::new();
    let mut forfeited_by = None;

    // Each successful move fills a cell, so the board is over within the
    // remaining empty cells.
    for _ in rules::count_moves(&start)..=CELL_COUNT {
        if rules::is_game_over(&board) {
            break;
        }

        let strategy = select_strategy(player, &mut *strategy_x, &mut *strategy_o);
        let pos = strategy.select(&board, player);

        match rules::try_move(&board, pos, player) {
            Ok(next) => {
                debug!(%player, position = %pos, "Move applied");
                history.push(Move::new(player, pos));
                board = next;
                player = rules::next_player(player);
            }
            Err(e) => {
                warn!(%player, strategy = strategy.name(), error = %e, "Illegal move, game forfeited");
                forfeited_by = Some(player);
                break;
            }
        }
    }

    let outcome = match forfeited_by {
        Some(_) => Outcome::Draw,
        None => Outcome::from(rules::check_winner(&board)),
    };

    let result = GameResult {
        start,
        board,
        outcome,
        history,
        forfeited_by,
    };

    #[cfg(debug_assertions)]
    {
        use super::invariants::{GameInvariants, InvariantSet};
        if let Err(violations) = GameInvariants::check_all(&result) {
            warn!(?violations, "Game record violates invariants");
        }
    }

    info!(outcome = %result.outcome, moves = result.history.len(), "Game finished");
    result
}

/// Rebuilds the board a sequence of moves leads to, starting empty with X.
///
/// # Errors
///
/// Fails on the first move that is out of turn, illegal on the board at that
/// point, or played after the game was already decided.
#[instrument]
pub fn replay(moves: &[Move]) -> Result<Board, MoveError> {
    let mut board = Board::new();
    let mut expected = Player::X;

    for mov in moves {
        if rules::is_game_over(&board) {
            return Err(MoveError::GameOver);
        }
        if mov.player != expected {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        board = rules::try_move(&board, mov.position, mov.player)?;
        expected = expected.opponent();
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::first_available;

    #[test]
    fn test_closure_strategy_selects_position() {
        let mut corner = |_: &Board, _: Player| Position::new(2, 2);
        assert_eq!(corner.select(&Board::new(), Player::X), Position::new(2, 2));
    }

    #[test]
    fn test_snapshots_stop_at_unplayable_move() {
        let result = play_game(&mut first_available, &mut first_available);
        let mut value = serde_json::to_value(&result).unwrap();
        value["history"][2]["position"] = serde_json::json!({ "row": 0, "col": 0 });
        let corrupted: GameResult = serde_json::from_value(value).unwrap();

        let snapshots = corrupted.snapshots();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[2], result.snapshots()[2]);
    }
}
