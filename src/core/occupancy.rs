//! Occupancy model: grid cells covered by placed walls.
//!
//! Backed by `im::OrdSet` so successor boards share structure with their
//! parent (O(1) clone for tree search) and iterate in a stable order.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::action::Tile;
use super::geometry::Position;

/// Set of wall-covered cells. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupancy {
    cells: OrdSet<Position>,
}

impl Occupancy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a wall covers `cell`.
    #[must_use]
    pub fn contains(&self, cell: Position) -> bool {
        self.cells.contains(&cell)
    }

    /// True if `cell` is covered by a wall or lies off the board.
    #[must_use]
    pub fn is_blocked(&self, cell: Position) -> bool {
        !cell.within_bounds() || self.contains(cell)
    }

    /// First cell of `tile` already covered, if any.
    #[must_use]
    pub fn collision(&self, tile: &Tile) -> Option<Position> {
        tile.cells().into_iter().find(|cell| self.contains(*cell))
    }

    /// A new occupancy with the tile's cells added. `self` is unchanged.
    #[must_use]
    pub fn with_tile(&self, tile: &Tile) -> Self {
        let mut cells = self.cells.clone();
        for cell in tile.cells() {
            cells.insert(cell);
        }
        Self { cells }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Covered cells in ascending `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// True if every cell of `other` is also in `self`.
    #[must_use]
    pub fn is_superset_of(&self, other: &Occupancy) -> bool {
        other.cells.is_subset(&self.cells)
    }
}

impl FromIterator<Position> for Occupancy {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
