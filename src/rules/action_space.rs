//! Fixed, dense indexing of every action.
//!
//! Policy networks want a fixed-size output vector, so each possible action
//! has a stable slot:
//!
//! | range      | actions                                              |
//! |------------|------------------------------------------------------|
//! | `0..81`    | pawn moves to the 9×9 pawn cells, row-major          |
//! | `81..145`  | horizontal walls, anchor rows 1..=15 odd, cols 0..=14 even |
//! | `145..209` | vertical walls, anchor rows 0..=14 even, cols 1..=15 odd   |
//!
//! These 128 anchors are exactly the aligned, in-bounds wall placements.

use crate::core::{Action, Orientation, Position, RulesError, Tile};

/// Pawn cells per side.
const CELLS: usize = 9;
/// Wall anchors per side, for either orientation.
const ANCHORS: usize = CELLS - 1;

const MOVE_SLOTS: usize = CELLS * CELLS;
const WALL_SLOTS: usize = ANCHORS * ANCHORS;
const HORIZONTAL_BASE: usize = MOVE_SLOTS;
const VERTICAL_BASE: usize = MOVE_SLOTS + WALL_SLOTS;

/// The dense action index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionSpace;

impl ActionSpace {
    /// Total number of slots (209).
    pub const SIZE: usize = MOVE_SLOTS + 2 * WALL_SLOTS;

    #[must_use]
    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    /// Slot of `action`, or `None` for a move off the pawn cells or a wall
    /// that is misaligned or out of bounds.
    #[must_use]
    pub fn index_of(&self, action: &Action) -> Option<usize> {
        match *action {
            Action::Move(to) => {
                if !to.within_bounds() || !to.is_pawn_cell() {
                    return None;
                }
                Some(to.x as usize / 2 * CELLS + to.y as usize / 2)
            }
            Action::Place(tile) => {
                if !tile.is_aligned() || !tile.within_bounds() {
                    return None;
                }
                let Position { x, y } = tile.anchor;
                let (x, y) = (x as usize, y as usize);
                Some(match tile.orientation {
                    Orientation::Horizontal => HORIZONTAL_BASE + (x / 2) * ANCHORS + y / 2,
                    Orientation::Vertical => VERTICAL_BASE + (x / 2) * ANCHORS + y / 2,
                })
            }
        }
    }

    /// Action stored in slot `index`.
    ///
    /// # Errors
    ///
    /// [`RulesError::ActionIndexOutOfRange`] if `index >= SIZE`.
    pub fn action_at(&self, index: usize) -> Result<Action, RulesError> {
        let to_i32 = |v: usize| v as i32;
        if index < HORIZONTAL_BASE {
            let (row, col) = (index / CELLS, index % CELLS);
            Ok(Action::Move(Position::new(to_i32(row * 2), to_i32(col * 2))))
        } else if index < VERTICAL_BASE {
            let slot = index - HORIZONTAL_BASE;
            let (row, col) = (slot / ANCHORS, slot % ANCHORS);
            Ok(Action::Place(Tile::horizontal(to_i32(row * 2 + 1), to_i32(col * 2))))
        } else if index < Self::SIZE {
            let slot = index - VERTICAL_BASE;
            let (row, col) = (slot / ANCHORS, slot % ANCHORS);
            Ok(Action::Place(Tile::vertical(to_i32(row * 2), to_i32(col * 2 + 1))))
        } else {
            Err(RulesError::ActionIndexOutOfRange {
                index,
                size: Self::SIZE,
            })
        }
    }

    /// Every aligned, in-bounds wall placement, horizontal first.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> {
        (0..2 * WALL_SLOTS).map(|slot| {
            let (orientation, slot) = if slot < WALL_SLOTS {
                (Orientation::Horizontal, slot)
            } else {
                (Orientation::Vertical, slot - WALL_SLOTS)
            };
            let (row, col) = ((slot / ANCHORS) as i32, (slot % ANCHORS) as i32);
            match orientation {
                Orientation::Horizontal => Tile::horizontal(row * 2 + 1, col * 2),
                Orientation::Vertical => Tile::vertical(row * 2, col * 2 + 1),
            }
        })
    }

    /// Boolean mask over all slots with `true` for each action in `legal`.
    #[must_use]
    pub fn mask(&self, legal: &[Action]) -> Vec<bool> {
        let mut mask = vec![false; Self::SIZE];
        for index in legal.iter().filter_map(|a| self.index_of(a)) {
            mask[index] = true;
        }
        mask
    }
}
