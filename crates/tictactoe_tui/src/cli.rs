//! Command-line interface for the tic-tac-toe front-end.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::TurnPolicy;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Reject moves for the player not on turn
    #[arg(long, conflicts_with = "trusting")]
    pub strict: bool,

    /// Accept whichever player a move names
    #[arg(long)]
    pub trusting: bool,

    /// Marker symbols for player 1 and player 2, comma separated
    #[arg(long, value_delimiter = ',')]
    pub markers: Option<Vec<String>>,

    /// File that receives log output (the terminal belongs to the UI)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Turn policy requested on the command line, if any.
    pub fn turn_policy(&self) -> Option<TurnPolicy> {
        match (self.strict, self.trusting) {
            (true, _) => Some(TurnPolicy::Strict),
            (_, true) => Some(TurnPolicy::Trusting),
            _ => None,
        }
    }
}
