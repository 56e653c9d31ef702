//! Nine-bit set of board cells.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mask with all nine cell bits set.
const FULL_MASK: u16 = 0b1_1111_1111;

/// A set of board cells, one bit per cell (bit 0 is cell 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSet(u16);

impl CellSet {
    /// The empty set.
    pub const EMPTY: CellSet = CellSet(0);

    /// Builds a set from a raw mask. Bits above the ninth are discarded.
    pub const fn from_bits(bits: u16) -> Self {
        CellSet(bits & FULL_MASK)
    }

    /// Raw mask.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Adds a cell to the set.
    pub fn insert(&mut self, pos: Position) {
        self.0 |= pos.bit();
    }

    /// Whether the cell is in the set.
    pub fn contains(self, pos: Position) -> bool {
        self.0 & pos.bit() != 0
    }

    /// Whether every cell of `other` is also in `self`.
    pub const fn contains_all(self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the two sets share no cell.
    pub const fn is_disjoint(self, other: CellSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of cells in the set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set has no cells.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Union of two sets.
    pub const fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }
}

impl FromIterator<Position> for CellSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}
