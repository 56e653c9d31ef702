//! Move rejection.

use serde::{Deserialize, Serialize};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum InvalidReason {
    /// The number does not name a cell (must be 1-9).
    #[display("must be a cell from 1 to 9")]
    OutOfRange,
    /// A player has already marked the cell.
    #[display("cell is already occupied")]
    Occupied,
    /// The game has already been won or tied.
    #[display("game is already over")]
    GameOver,
}

/// Error returned by [`GameEngine::apply_move`](crate::GameEngine::apply_move).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The move cannot be played.
    #[display("Invalid move {}: {}", position, reason)]
    InvalidMove {
        /// The cell number that was requested.
        position: i64,
        /// Why it was rejected.
        reason: InvalidReason,
    },
}

impl MoveError {
    /// Creates an invalid-move error.
    pub fn invalid(position: i64, reason: InvalidReason) -> Self {
        MoveError::InvalidMove { position, reason }
    }

    /// Why the move was rejected.
    pub fn reason(&self) -> InvalidReason {
        match self {
            MoveError::InvalidMove { reason, .. } => *reason,
        }
    }
}
