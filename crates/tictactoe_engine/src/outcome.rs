//! Outcome of evaluating a position, and the engine's state machine.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of checking the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    NoWinner,
    /// The player completed a line.
    Win(Player),
    /// The board is full and nobody completed a line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::NoWinner | Outcome::Tie => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::NoWinner)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoWinner => write!(f, "No winner yet"),
            Outcome::Win(player) => write!(f, "Player {} wins!", player),
            Outcome::Tie => write!(f, "Tie game!"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended with a full board and no line.
    Tie,
}

impl GameStatus {
    /// Returns true once no further moves may be applied.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::NoWinner => GameStatus::InProgress,
            Outcome::Win(player) => GameStatus::Won(player),
            Outcome::Tie => GameStatus::Tie,
        }
    }
}
