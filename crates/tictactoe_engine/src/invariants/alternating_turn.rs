//! Alternating turn invariant: Player 1, Player 2, Player 1, ...

use super::Invariant;
use crate::{GameEngine, Player, TurnPolicy};

/// Invariant: players alternate turns.
///
/// Under [`TurnPolicy::Strict`] the history must read One, Two, One, ...
/// Under either policy, while the game is in progress, the player on turn
/// follows from the number of moves played, since every non-final move
/// hands the turn over.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if engine.config().turn_policy() == &TurnPolicy::Strict {
            if history.first().is_some_and(|m| m.player != Player::One) {
                return false;
            }
            if history.windows(2).any(|w| w[0].player == w[1].player) {
                return false;
            }
        }

        if engine.is_over() {
            return true;
        }

        let expected = if history.len() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (Player 1, Player 2, ...)"
    }
}
