//! Application state and key handling.

use crate::config::UiConfig;
use crate::input::{self, Command};
use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, GameStatus, Player, Position};
use tracing::{debug, instrument};

/// Main application state.
///
/// Holds the engine and what the screen needs around it. All game decisions
/// are made by the engine; this type only routes keys and words the outcome.
pub struct App {
    engine: GameEngine,
    config: UiConfig,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: UiConfig) -> Self {
        Self {
            engine: GameEngine::with_config(config.engine().clone()),
            config,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Marker for `player`.
    pub fn marker(&self, player: Player) -> &str {
        self.config.marker(player)
    }

    /// Status line text.
    ///
    /// A rejected move shows its reason until the next key press.
    pub fn status_message(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match self.engine.status() {
            GameStatus::InProgress => {
                format!("Player {}", self.marker(self.engine.current_player()))
            }
            GameStatus::Won(player, _) => format!("WINNER! Player {}", self.marker(*player)),
            GameStatus::Stalemate => "Stalemate!".to_string(),
        }
    }

    /// Whether `pos` lies on the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.engine
            .status()
            .win_line()
            .is_some_and(|line| line.contains(pos))
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.notice = None;
        let Some(command) = input::command_for(key) else {
            return;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => self.should_quit = true,
            Command::Reset => self.restart(),
            // Board input is disabled once the game has ended.
            _ if self.engine.is_over() => {}
            Command::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Command::ClaimCursor => self.claim(self.cursor),
            Command::Claim(pos) => {
                self.cursor = pos;
                self.claim(pos);
            }
        }
    }

    fn claim(&mut self, pos: Position) {
        let player = self.engine.current_player();
        match self.engine.apply_move(pos.to_index(), player) {
            Ok(status) => debug!(%player, %pos, %status, "Move applied"),
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.cursor = Position::Center;
    }
}
