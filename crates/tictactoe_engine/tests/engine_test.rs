//! Tests for the game engine's public contract.

use tictactoe_engine::{
    Cell, GameEngine, GameStatus, InvalidReason, MoveError, Outcome, Player, Position,
};

/// Tie sequence: X O X / O X X / O X O.
const TIE_MOVES: [i64; 9] = [1, 2, 3, 4, 5, 7, 6, 9, 8];

#[test]
fn test_out_of_range_is_never_valid() {
    let engine = GameEngine::new();
    for p in [i64::MIN, -1, 0, 10, 11, 100, i64::MAX] {
        assert!(!engine.is_valid_move(p), "{} should be invalid", p);
    }
}

#[test]
fn test_valid_iff_unoccupied() {
    let engine = GameEngine::replay(&[5, 1, 9]).unwrap();
    for p in 1..=9 {
        let occupied = [5, 1, 9].contains(&p);
        assert_eq!(engine.is_valid_move(p), !occupied, "cell {}", p);
    }
}

#[test]
fn test_apply_marks_mover_and_counts_turn() {
    let mut engine = GameEngine::new();
    for (i, p) in [3, 7, 2, 8].into_iter().enumerate() {
        let mover = engine.current_player();
        let before = engine.turn_count();
        engine.apply_move(p).unwrap();

        let pos = Position::from_number(p).unwrap();
        assert_eq!(engine.cell(pos), Cell::Occupied(mover));
        assert!(!engine.occupied_by(mover.opponent()).contains(pos));
        assert_eq!(engine.turn_count(), before + 1);
        assert_eq!(usize::from(engine.turn_count()), i + 1);
    }
}

#[test]
fn test_no_winner_before_five_moves() {
    let mut engine = GameEngine::new();
    for p in [1, 4, 2, 5] {
        assert_eq!(engine.evaluate_outcome(), Outcome::NoWinner);
        engine.apply_move(p).unwrap();
    }
    assert_eq!(engine.turn_count(), 4);
    assert_eq!(engine.evaluate_outcome(), Outcome::NoWinner);
}

#[test]
fn test_render_is_stable() {
    let engine = GameEngine::replay(&[5, 1]).unwrap();
    assert_eq!(engine.render(), engine.render());
    assert_eq!(engine.render(), "O--\n-X-\n---\n");
}

#[test]
fn test_x_wins_top_row() {
    let mut engine = GameEngine::new();
    for p in [1, 4, 2, 5] {
        engine.apply_move(p).unwrap();
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
    engine.apply_move(3).unwrap();

    assert_eq!(engine.evaluate_outcome(), Outcome::Win(Player::X));
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    assert_eq!(engine.current_player(), Player::X);
    assert!(engine.render().starts_with("XXX\n"));
    assert_eq!(engine.render(), "XXX\nOO-\n---\n");
}

#[test]
fn test_tie_game() {
    let mut engine = GameEngine::new();
    for (i, p) in TIE_MOVES.into_iter().enumerate() {
        engine.apply_move(p).unwrap();
        if i < 8 {
            assert_eq!(engine.evaluate_outcome(), Outcome::NoWinner, "after move {}", p);
        }
    }

    assert_eq!(engine.evaluate_outcome(), Outcome::Tie);
    assert_eq!(engine.status(), GameStatus::Tie);
    assert_eq!(engine.turn_count(), 9);
    assert_eq!(engine.render(), "XOX\nOXX\nOXO\n");
    assert!(engine.valid_moves().is_empty());
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut engine = GameEngine::new();
    engine.apply_move(1).unwrap();
    let before = engine.clone();

    let err = engine.apply_move(1).unwrap_err();
    assert_eq!(
        err,
        MoveError::InvalidMove {
            position: 1,
            reason: InvalidReason::Occupied
        }
    );
    assert_eq!(engine, before);
}

#[test]
fn test_out_of_range_rejected_without_change() {
    let mut engine = GameEngine::replay(&[2]).unwrap();
    let before = engine.clone();

    for p in [0, 10, -5] {
        let err = engine.apply_move(p).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::OutOfRange);
    }
    assert_eq!(engine, before);
}

#[test]
fn test_moves_after_win_rejected() {
    let mut engine = GameEngine::replay(&[1, 4, 2, 5, 3]).unwrap();
    let before = engine.clone();

    // Cell 9 is still empty but the game is decided.
    assert!(engine.is_valid_move(9));
    let err = engine.apply_move(9).unwrap_err();
    assert_eq!(err.reason(), InvalidReason::GameOver);
    assert_eq!(engine, before);
    assert!(engine.valid_moves().is_empty());
}

#[test]
fn test_moves_after_tie_rejected() {
    let mut engine = GameEngine::replay(&TIE_MOVES).unwrap();
    let before = engine.clone();

    for p in 0..=10 {
        assert!(!engine.is_valid_move(p));
        assert!(engine.apply_move(p).is_err());
    }
    assert_eq!(engine, before);
}

#[test]
fn test_history_records_moves() {
    let engine = GameEngine::replay(&[5, 3]).unwrap();
    let history = engine.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, Player::X);
    assert_eq!(history[0].position, Position::Center);
    assert_eq!(history[1].player, Player::O);
    assert_eq!(history[1].position, Position::TopRight);
}

#[test]
fn test_snapshot_serializes() {
    let engine = GameEngine::replay(&[1, 4, 2, 5, 3]).unwrap();
    let json = serde_json::to_value(&engine).unwrap();

    assert_eq!(json["turn_count"], 5);
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["x_marks"], 7);
    assert_eq!(json["status"]["Won"], "X");
    assert_eq!(json["history"].as_array().unwrap().len(), 5);
}
