//! Game rules for tic-tac-toe.
//!
//! Pure functions over per-player cell sets. Rules are kept apart from the
//! engine so they can be tested without driving a whole game.

pub mod draw;
pub mod win;

pub use draw::{MAX_TURNS, is_full};
pub use win::{MIN_WIN_TURNS, WIN_MASKS, winning_line};
