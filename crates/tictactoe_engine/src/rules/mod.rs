//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! engine state so invariants and front-ends can evaluate any board.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_stalemate};
pub use win::{WIN_LINES, WinLine, WinLineKind, check_winner, find_winning_line};
