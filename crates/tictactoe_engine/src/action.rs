//! Moves and move rejection.
//!
//! A move is a domain event: the player's intent to claim a cell. It can be
//! validated independently of execution and replayed later.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player claiming a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The claimed position.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected.
///
/// Every variant is a local, recoverable rejection. The engine state is
/// untouched when one is returned.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidCellIndex(#[error(not(source))] i128),

    /// The target cell is already claimed.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game already ended in a win or stalemate.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Move submitted for a player who is not on turn.
    #[display("It's not {}'s turn ({} to move)", attempted, expected)]
    OutOfTurn {
        /// The player whose turn it is.
        expected: Player,
        /// The player that tried to move.
        attempted: Player,
    },
}
