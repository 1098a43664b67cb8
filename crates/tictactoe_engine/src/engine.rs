//! The game-state engine.

use crate::action::{Move, MoveError};
use crate::config::{EngineConfig, TurnPolicy};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{self, WinLine};
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won(Player, WinLine),
    /// Board is full with no completed line.
    Stalemate,
}

impl GameStatus {
    /// Won and Stalemate accept no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player, _) => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn win_line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won(_, line) => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player, line) => write!(f, "{} wins ({})", player, line),
            GameStatus::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the player on turn, and the game status. Every accepted
/// move claims exactly one empty cell, then the board is evaluated for the
/// mover. Rejected moves leave the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
    config: EngineConfig,
}

impl GameEngine {
    /// Creates a new game with the default (strict) configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a new game with the given configuration.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
            history: Vec::new(),
            config,
        }
    }

    /// Replays `moves` on a fresh engine, stopping at the first rejection.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(config: EngineConfig, moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::with_config(config);
        for mov in moves {
            engine.apply_move(mov.position.to_index(), mov.player)?;
        }
        Ok(engine)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player entitled to the next move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Empty cells that would accept a move; none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Claims `index` for `player` and evaluates the board.
    ///
    /// `index` may be any integer type; anything outside 0-8, negative
    /// values included, is rejected with [`MoveError::InvalidCellIndex`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if the game is won or stalemated.
    /// - [`MoveError::InvalidCellIndex`] if `index` is outside 0-8.
    /// - [`MoveError::CellOccupied`] if the cell is already claimed.
    /// - [`MoveError::OutOfTurn`] under [`TurnPolicy::Strict`] if `player`
    ///   is not on turn.
    #[instrument(skip(self, index), fields(current = %self.current_player))]
    pub fn apply_move<I>(&mut self, index: I, player: Player) -> Result<GameStatus, MoveError>
    where
        Position: TryFrom<I, Error = MoveError>,
    {
        let position = self.validate(index, player).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        self.board.set(position, Cell::Occupied(player));
        self.history.push(Move::new(player, position));
        debug!(%position, "Cell claimed");

        self.evaluate(player);
        self.debug_check_invariants();

        Ok(self.status)
    }

    /// Restores the initial state: empty board, Player 1 on turn.
    ///
    /// The configuration is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    fn validate<I>(&self, index: I, player: Player) -> Result<Position, MoveError>
    where
        Position: TryFrom<I, Error = MoveError>,
    {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let position = Position::try_from(index)?;

        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        if self.config.turn_policy() == &TurnPolicy::Strict && player != self.current_player {
            return Err(MoveError::OutOfTurn {
                expected: self.current_player,
                attempted: player,
            });
        }

        Ok(position)
    }

    /// Updates status after `player` moved.
    fn evaluate(&mut self, player: Player) {
        if let Some(line) = rules::find_winning_line(&self.board, player) {
            info!(%player, %line, "Game won");
            self.status = GameStatus::Won(player, line);
        } else if rules::is_full(&self.board) {
            info!("Game ended in stalemate");
            self.status = GameStatus::Stalemate;
        } else {
            self.alternate_player();
        }
    }

    fn alternate_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated");
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Move> {
        &mut self.history
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
