//! Draw detection logic for tic-tac-toe.

use super::super::CellSet;

/// Number of cells, and so the most moves a game can last.
pub const MAX_TURNS: u8 = 9;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a tie.
pub fn is_full(x: CellSet, o: CellSet) -> bool {
    x.union(o).len() == u32::from(MAX_TURNS)
}
