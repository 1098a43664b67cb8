//! Tests for the tic-tac-toe game engine public API.

use tictactoe_engine::{
    Cell, EngineConfig, GameEngine, GameStatus, Move, MoveError, Player, Position, TurnPolicy,
};

/// Plays `(cell, player)` pairs, asserting each is accepted, and returns the last status.
fn play(engine: &mut GameEngine, moves: &[(usize, Player)]) -> GameStatus {
    let mut status = *engine.status();
    for &(cell, player) in moves {
        status = engine
            .apply_move(cell, player)
            .unwrap_or_else(|e| panic!("move {} for {} rejected: {}", cell, player, e));
    }
    status
}

const P1: Player = Player::One;
const P2: Player = Player::Two;

#[test]
fn test_fresh_engine() {
    let engine = GameEngine::new();
    assert!(engine.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(engine.current_player(), P1);
    assert_eq!(engine.status(), &GameStatus::InProgress);
}

#[test]
fn test_move_claims_cell_then_repeat_is_occupied() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.apply_move(4_usize, P1), Ok(GameStatus::InProgress));
    assert_eq!(engine.board().get(Position::Center), Cell::Occupied(P1));

    let before = engine.clone();
    assert_eq!(
        engine.apply_move(4_usize, P2),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_repeat_by_same_player_is_occupied() {
    let mut engine = GameEngine::new();
    engine.apply_move(4_usize, P1).unwrap();

    let before = engine.clone();
    assert_eq!(
        engine.apply_move(4_usize, P1),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_repeat_by_same_player_under_trusting_is_occupied() {
    let mut engine = GameEngine::with_config(EngineConfig::new(TurnPolicy::Trusting));
    engine.apply_move(4_usize, P1).unwrap();
    assert_eq!(
        engine.apply_move(4_usize, P1),
        Err(MoveError::CellOccupied(Position::Center))
    );
}

#[test]
fn test_turn_alternates_on_non_terminal_moves() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, P1)]);
    assert_eq!(engine.current_player(), P2);
    play(&mut engine, &[(8, P2)]);
    assert_eq!(engine.current_player(), P1);
}

#[test]
fn test_turn_unchanged_after_terminal_move() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, P1), (3, P2), (1, P1), (4, P2)]);
    assert_eq!(engine.current_player(), P1);
    play(&mut engine, &[(2, P1)]);
    assert_eq!(engine.current_player(), P1);
}

#[test]
fn test_horizontal_win() {
    let mut engine = GameEngine::new();
    let status = play(&mut engine, &[(0, P1), (3, P2), (1, P1), (4, P2), (2, P1)]);
    match status {
        GameStatus::Won(player, line) => {
            assert_eq!(player, P1);
            assert_eq!(line.cells(), [0, 1, 2]);
        }
        other => panic!("expected a win, got {:?}", other),
    }
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::new();
    let status = play(&mut engine, &[(0, P1), (1, P2), (4, P1), (2, P2), (8, P1)]);
    assert_eq!(status.winner(), Some(P1));
    assert_eq!(status.win_line().map(|l| l.cells()), Some([0, 4, 8]));
}

#[test]
fn test_player_two_can_win() {
    let mut engine = GameEngine::new();
    let status = play(
        &mut engine,
        &[(0, P1), (2, P2), (1, P1), (4, P2), (8, P1), (6, P2)],
    );
    assert_eq!(status.winner(), Some(P2));
    assert_eq!(status.win_line().map(|l| l.cells()), Some([2, 4, 6]));
}

#[test]
fn test_stalemate() {
    // X O X / X O O / O X X
    let mut engine = GameEngine::new();
    let status = play(
        &mut engine,
        &[
            (0, P1),
            (1, P2),
            (2, P1),
            (4, P2),
            (3, P1),
            (5, P2),
            (7, P1),
            (6, P2),
            (8, P1),
        ],
    );
    assert_eq!(status, GameStatus::Stalemate);
    assert_eq!(engine.current_player(), P1);
}

#[test]
fn test_stalemate_in_index_order_under_trusting() {
    let mut engine = GameEngine::with_config(EngineConfig::new(TurnPolicy::Trusting));
    let players = [P1, P2, P1, P1, P2, P2, P2, P1, P1];
    let moves: Vec<_> = players.into_iter().enumerate().collect();
    assert_eq!(play(&mut engine, &moves), GameStatus::Stalemate);
}

#[test]
fn test_win_on_last_cell_is_not_stalemate() {
    // X O X / O X O / O X X  -- ninth move completes the main diagonal.
    let mut engine = GameEngine::new();
    let status = play(
        &mut engine,
        &[
            (0, P1),
            (1, P2),
            (2, P1),
            (3, P2),
            (4, P1),
            (5, P2),
            (7, P1),
            (6, P2),
            (8, P1),
        ],
    );
    assert_eq!(status.winner(), Some(P1));
    assert_eq!(status.win_line().map(|l| l.cells()), Some([0, 4, 8]));
}

#[test]
fn test_terminal_state_rejects_moves() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, P1), (3, P2), (1, P1), (4, P2), (2, P1)]);
    let board = engine.board().clone();

    assert_eq!(engine.apply_move(5_usize, P2), Err(MoveError::GameAlreadyOver));
    assert_eq!(engine.apply_move(8_usize, P1), Err(MoveError::GameAlreadyOver));
    assert_eq!(engine.board(), &board);
}

#[test]
fn test_stalemate_rejects_moves() {
    let mut engine = GameEngine::with_config(EngineConfig::new(TurnPolicy::Trusting));
    let players = [P1, P2, P1, P1, P2, P2, P2, P1, P1];
    let moves: Vec<_> = players.into_iter().enumerate().collect();
    play(&mut engine, &moves);
    assert_eq!(engine.apply_move(0_usize, P2), Err(MoveError::GameAlreadyOver));
}

#[test]
fn test_reset_restores_initial_state() {
    let fresh = GameEngine::new();

    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, P1), (3, P2), (1, P1)]);
    engine.reset();
    assert_eq!(engine, fresh);

    play(&mut engine, &[(0, P1), (3, P2), (1, P1), (4, P2), (2, P1)]);
    engine.reset();
    assert_eq!(engine, fresh);

    engine.reset();
    assert_eq!(engine, fresh);
}

#[test]
fn test_reset_keeps_config() {
    let config = EngineConfig::new(TurnPolicy::Trusting);
    let mut engine = GameEngine::with_config(config.clone());
    play(&mut engine, &[(0, P1)]);
    engine.reset();
    assert_eq!(engine.config(), &config);
    assert_eq!(engine.current_player(), P1);
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::new();
    let before = engine.clone();

    assert_eq!(engine.apply_move(-1_i32, P1), Err(MoveError::InvalidCellIndex(-1)));
    assert_eq!(engine.apply_move(9_i32, P1), Err(MoveError::InvalidCellIndex(9)));
    assert_eq!(engine.apply_move(9_usize, P1), Err(MoveError::InvalidCellIndex(9)));
    assert_eq!(
        engine.apply_move(i64::MIN, P1),
        Err(MoveError::InvalidCellIndex(i128::from(i64::MIN)))
    );
    assert_eq!(
        engine.apply_move(u64::MAX, P1),
        Err(MoveError::InvalidCellIndex(i128::from(u64::MAX)))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_out_of_turn_strict() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.apply_move(0_usize, P2),
        Err(MoveError::OutOfTurn {
            expected: P1,
            attempted: P2
        })
    );
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_out_of_turn_accepted_when_trusting() {
    let mut engine = GameEngine::with_config(EngineConfig::new(TurnPolicy::Trusting));
    assert_eq!(engine.apply_move(0_usize, P2), Ok(GameStatus::InProgress));
    assert_eq!(engine.board().get(Position::TopLeft), Cell::Occupied(P2));
    // The turn still toggles from the engine's own notion of who is current.
    assert_eq!(engine.current_player(), P2);
}

#[test]
fn test_replay_matches_live_play() {
    let moves = [
        Move::new(P1, Position::TopLeft),
        Move::new(P2, Position::MiddleLeft),
        Move::new(P1, Position::TopCenter),
    ];
    let replayed = GameEngine::replay(EngineConfig::default(), &moves).unwrap();

    let mut live = GameEngine::new();
    play(&mut live, &[(0, P1), (3, P2), (1, P1)]);
    assert_eq!(replayed, live);
    assert_eq!(replayed.history(), &moves);
}

#[test]
fn test_replay_stops_at_rejection() {
    let moves = [
        Move::new(P1, Position::Center),
        Move::new(P2, Position::Center),
    ];
    assert_eq!(
        GameEngine::replay(EngineConfig::default(), &moves),
        Err(MoveError::CellOccupied(Position::Center))
    );
}

#[test]
fn test_status_serializes() {
    let mut engine = GameEngine::new();
    let status = play(&mut engine, &[(0, P1), (1, P2), (4, P1), (2, P2), (8, P1)]);
    let json = serde_json::to_string(&status).unwrap();
    let back: GameStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, status);
}
