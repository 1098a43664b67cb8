//! Monotonic board invariant: cells are only ever claimed through moves.

use super::Invariant;
use crate::{Cell, GameEngine};
use std::collections::HashSet;

/// Invariant: the board is exactly the replay of the move history.
///
/// Every claimed cell is owned by the player that history says claimed it,
/// no position was claimed twice, and the number of claimed cells equals the
/// number of moves. Together these mean no cell was ever overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let history = engine.history();

        let mut seen = HashSet::new();
        for mov in history {
            if !seen.insert(mov.position) {
                return false;
            }
            if board.get(mov.position) != Cell::Occupied(mov.player) {
                return false;
            }
        }

        let claimed = board.cells().iter().filter(|c| **c != Cell::Empty).count();
        claimed == history.len()
    }

    fn description() -> &'static str {
        "Board cells match move history (no cell overwritten or claimed out of band)"
    }
}
