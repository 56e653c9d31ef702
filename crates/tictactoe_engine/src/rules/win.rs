//! Win detection logic for tic-tac-toe.

use super::super::CellSet;
use tracing::instrument;

/// Fewest total moves after which a line can be complete.
///
/// X needs three marks, and O has moved twice by then.
pub const MIN_WIN_TURNS: u8 = 5;

/// The eight winning lines as cell masks (bit 0 is cell 1).
///
/// ```text
/// 111  000  000  100  010  001  100  001
/// 000  111  000  100  010  001  010  010
/// 000  000  111  100  010  001  001  100
/// ```
pub const WIN_MASKS: [CellSet; 8] = [
    // Rows
    CellSet::from_bits(0b000_000_111),
    CellSet::from_bits(0b000_111_000),
    CellSet::from_bits(0b111_000_000),
    // Columns
    CellSet::from_bits(0b001_001_001),
    CellSet::from_bits(0b010_010_010),
    CellSet::from_bits(0b100_100_100),
    // Diagonals
    CellSet::from_bits(0b100_010_001),
    CellSet::from_bits(0b001_010_100),
];

/// Returns the first winning line fully covered by `marks`, if any.
#[instrument]
pub fn winning_line(marks: CellSet) -> Option<CellSet> {
    WIN_MASKS.iter().copied().find(|line| marks.contains_all(*line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn set(cells: &[Position]) -> CellSet {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_no_winner_empty() {
        assert_eq!(winning_line(CellSet::EMPTY), None);
    }

    #[test]
    fn test_mask_values() {
        let raw: Vec<u16> = WIN_MASKS.iter().map(|m| m.bits()).collect();
        assert_eq!(raw, vec![7, 56, 448, 73, 146, 292, 273, 84]);
        assert!(WIN_MASKS.iter().all(|m| m.len() == 3));
    }

    #[test]
    fn test_winner_top_row() {
        let marks = set(&[Position::TopLeft, Position::TopCenter, Position::TopRight]);
        assert_eq!(winning_line(marks), Some(marks));
    }

    #[test]
    fn test_winner_anti_diagonal_with_extra_marks() {
        let marks = set(&[
            Position::TopRight,
            Position::Center,
            Position::BottomLeft,
            Position::TopLeft,
        ]);
        let line = set(&[Position::TopRight, Position::Center, Position::BottomLeft]);
        assert_eq!(winning_line(marks), Some(line));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let marks = set(&[Position::TopLeft, Position::TopCenter, Position::Center]);
        assert_eq!(winning_line(marks), None);
    }
}
