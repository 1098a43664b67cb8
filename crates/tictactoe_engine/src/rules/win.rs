//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum WinLineKind {
    /// Horizontal run.
    Row,
    /// Vertical run.
    Column,
    /// Diagonal run.
    Diagonal,
}

/// Three cells that make a win when owned by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Cell indices of the line.
    pub fn cells(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Whether the line runs through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Row, column, or diagonal.
    pub fn kind(&self) -> WinLineKind {
        let [a, b, _] = self.0;
        if a.row() == b.row() {
            WinLineKind::Row
        } else if a.col() == b.col() {
            WinLineKind::Column
        } else {
            WinLineKind::Diagonal
        }
    }

    /// Whether `player` owns all three cells on `board`.
    pub fn is_owned_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|pos| board.get(*pos) == Cell::Occupied(player))
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.cells();
        write!(f, "{} [{}, {}, {}]", self.kind(), a, b, c)
    }
}

/// The 8 winning lines, rows first, then columns, then diagonals.
///
/// Order decides which line is reported when a move completes two at once.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first line `player` has completed, if any.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .find(|line| line.is_owned_by(board, player))
        .copied()
}

/// Checks either player for a completed line.
///
/// Player 1 is checked first; a legal game never has both.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    Player::iter().find_map(|player| find_winning_line(board, player).map(|line| (player, line)))
}
