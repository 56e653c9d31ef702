//! Tic-tac-toe engine on a fixed 3x3 grid.
//!
//! The engine holds one nine-bit set of marks per player, validates moves
//! by cell number (1-9), applies them, and decides the outcome after each
//! move. It does no I/O; a front end reads moves and prints
//! [`GameEngine::render`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for number in [1, 4, 2, 5, 3] {
//!     assert!(engine.is_valid_move(number));
//!     engine.apply_move(number)?;
//! }
//! assert_eq!(engine.evaluate_outcome(), Outcome::Win(Player::X));
//! assert_eq!(engine.render(), "XXX\nOO-\n---\n");
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell_set;
mod engine;
mod error;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use cell_set::CellSet;
pub use engine::{EMPTY_CELL, GameEngine};
pub use error::{InvalidReason, MoveError};
pub use outcome::{GameStatus, Outcome};
pub use position::Position;
pub use types::{Cell, Player};
