//! Tic-tac-toe rules engine.
//!
//! Board representation, move validation, turn alternation, and win and
//! stalemate detection, with no presentation code attached.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for (cell, player) in [(0, Player::One), (3, Player::Two), (1, Player::One), (4, Player::Two)] {
//!     engine.apply_move(cell, player)?;
//! }
//! let status = engine.apply_move(2, Player::One)?;
//! assert_eq!(status.winner(), Some(Player::One));
//! assert_eq!(status.win_line().map(|line| line.cells()), Some([0, 1, 2]));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use config::{ConfigError, EngineConfig, TurnPolicy};
pub use engine::{GameEngine, GameStatus};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, WinLineKind};
pub use types::{Board, CELL_COUNT, Cell, Player};
