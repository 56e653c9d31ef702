//! First-class invariants for the engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them in debug builds; tests can check them
//! directly.

use super::rules::{MAX_TURNS, is_full};
use super::{GameEngine, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: no cell is marked by both players.
pub struct DisjointMarks;

impl Invariant<GameEngine> for DisjointMarks {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .occupied_by(Player::X)
            .is_disjoint(engine.occupied_by(Player::O))
    }

    fn description() -> &'static str {
        "X and O never share a cell"
    }
}

/// Invariant: the turn count equals the number of marks and never exceeds nine.
pub struct TurnCountMatchesMarks;

impl Invariant<GameEngine> for TurnCountMatchesMarks {
    fn holds(engine: &GameEngine) -> bool {
        let (x, o) = (engine.occupied_by(Player::X), engine.occupied_by(Player::O));
        let turns = engine.turn_count();
        turns <= MAX_TURNS
            && u32::from(turns) == x.len() + o.len()
            && (turns == MAX_TURNS) == is_full(x, o)
    }

    fn description() -> &'static str {
        "Turn count equals marks on the board"
    }
}

/// Invariant: history alternates X, O, X, ... and matches the board.
pub struct AlternatingHistory;

impl Invariant<GameEngine> for AlternatingHistory {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        if history.len() != usize::from(engine.turn_count()) {
            return false;
        }

        history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected && engine.occupied_by(mov.player).contains(mov.position)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Checks every engine invariant, returning the descriptions of those violated.
pub fn check_all(engine: &GameEngine) -> Result<(), Vec<&'static str>> {
    let mut violations = Vec::new();

    if !DisjointMarks::holds(engine) {
        violations.push(DisjointMarks::description());
    }
    if !TurnCountMatchesMarks::holds(engine) {
        violations.push(TurnCountMatchesMarks::description());
    }
    if !AlternatingHistory::holds(engine) {
        violations.push(AlternatingHistory::description());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        warn!(?violations, "Engine invariants violated");
        Err(violations)
    }
}
