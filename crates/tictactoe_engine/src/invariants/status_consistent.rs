//! Status consistency invariant: the status agrees with the board.

use super::Invariant;
use crate::{GameEngine, GameStatus, rules};

/// Invariant: the reported status is what the rules say about the board.
///
/// `Won(p, line)` requires `p` to own `line`; `Stalemate` requires a full
/// board with no completed line; `InProgress` requires neither a completed
/// line nor a full board.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        match engine.status() {
            GameStatus::Won(player, line) => line.is_owned_by(board, *player),
            GameStatus::Stalemate => rules::is_stalemate(board),
            GameStatus::InProgress => {
                rules::check_winner(board).is_none() && !rules::is_full(board)
            }
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}
