//! Board geometry: positions, relative offsets and bounds.
//!
//! The board is a 17×17 grid. Even coordinates are pawn cells; odd
//! coordinates are the seams between them, where wall segments live and
//! where jump arithmetic passes through.
//!
//! `x` is the row (0 is BLACK's home edge, 16 is WHITE's) and `y` is the
//! column.
//!
//! ```
//! use quoridor_engine::core::{Position, RelativeOffset};
//!
//! let p = Position::new(16, 8);
//! let up = RelativeOffset::new(-2, 0);
//! assert_eq!(up.transform(p), Position::new(14, 8));
//! assert!(Position::new(0, 16).within_bounds());
//! assert!(!Position::new(-2, 8).within_bounds());
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Width and height of the coordinate grid.
pub const GRID_SIZE: i32 = 17;

/// Largest valid coordinate.
pub const GRID_MAX: i32 = GRID_SIZE - 1;

/// A point on the 17×17 grid.
///
/// Positions are plain values and may lie off the board; use
/// [`Position::within_bounds`] before trusting one as a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff both coordinates are in `[0, 17)`.
    #[must_use]
    pub const fn within_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE && self.y >= 0 && self.y < GRID_SIZE
    }

    /// True for cells a pawn can stand on (both coordinates even).
    #[must_use]
    pub const fn is_pawn_cell(self) -> bool {
        self.x % 2 == 0 && self.y % 2 == 0
    }

    /// Rotate a quarter turn clockwise about the centre square `(8, 8)`.
    ///
    /// Consistent with [`RelativeOffset::rotate_cw`]:
    /// `(p + d).rotate_cw() == p.rotate_cw() + d.rotate_cw()`.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        Self::new(self.y, GRID_MAX.wrapping_sub(self.x))
    }

    /// Reflect across the middle row, swapping the two home edges.
    #[must_use]
    pub const fn mirror_rows(self) -> Self {
        Self::new(GRID_MAX.wrapping_sub(self.x), self.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A `(dx, dy)` displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelativeOffset {
    pub dx: i32,
    pub dy: i32,
}

impl RelativeOffset {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Apply this offset to `origin`. Never fails; the result may be off
    /// the board. Coordinates wrap at the `i32` limits.
    #[must_use]
    pub const fn transform(self, origin: Position) -> Position {
        Position::new(origin.x.wrapping_add(self.dx), origin.y.wrapping_add(self.dy))
    }

    /// Quarter turn clockwise: `(dx, dy) -> (dy, -dx)`.
    ///
    /// Maps Right to Down, Down to Left, Left to Up and Up to Right.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        Self::new(self.dy, self.dx.wrapping_neg())
    }

    /// Reflect across the middle row: `(dx, dy) -> (-dx, dy)`.
    #[must_use]
    pub const fn mirror_rows(self) -> Self {
        Self::new(self.dx.wrapping_neg(), self.dy)
    }
}

impl Add<RelativeOffset> for Position {
    type Output = Position;

    fn add(self, offset: RelativeOffset) -> Position {
        offset.transform(self)
    }
}

/// Free-function form of [`Position::within_bounds`].
#[must_use]
pub const fn within_bounds(position: Position) -> bool {
    position.within_bounds()
}

/// Free-function form of [`RelativeOffset::transform`].
#[must_use]
pub const fn transform(offset: RelativeOffset, position: Position) -> Position {
    offset.transform(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_edges() {
        assert!(within_bounds(Position::new(0, 0)));
        assert!(within_bounds(Position::new(16, 16)));
        assert!(!within_bounds(Position::new(17, 0)));
        assert!(!within_bounds(Position::new(0, 17)));
        assert!(!within_bounds(Position::new(-1, 8)));
        assert!(!within_bounds(Position::new(8, -1)));
    }

    #[test]
    fn test_transform_is_addition() {
        let p = Position::new(2, 8);
        assert_eq!(transform(RelativeOffset::new(0, -4), p), Position::new(2, 4));
        assert_eq!(p + RelativeOffset::new(-4, 0), Position::new(-2, 8));
    }

    #[test]
    fn test_rotation_commutes_with_offsets() {
        let p = Position::new(4, 10);
        let d = RelativeOffset::new(-2, 4);
        assert_eq!((p + d).rotate_cw(), p.rotate_cw() + d.rotate_cw());
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let p = Position::new(3, 12);
        assert_eq!(p.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), p);

        let d = RelativeOffset::new(1, -2);
        assert_eq!(d.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), d);
    }

    #[test]
    fn test_rotation_keeps_bounds() {
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                assert!(Position::new(x, y).rotate_cw().within_bounds());
            }
        }
    }

    #[test]
    fn test_extreme_coordinates_do_not_panic() {
        let far = Position::new(i32::MAX, i32::MIN);

        let moved = transform(RelativeOffset::new(2, -2), far);
        assert!(!moved.within_bounds());
        assert_eq!(moved, Position::new(i32::MIN + 1, i32::MAX - 1));

        assert!(!far.rotate_cw().within_bounds());
        assert!(!far.mirror_rows().within_bounds());
        assert_eq!(far.mirror_rows().mirror_rows(), far);

        let offset = RelativeOffset::new(i32::MIN, 0);
        assert_eq!(offset.mirror_rows(), offset);
        assert_eq!(offset.rotate_cw(), RelativeOffset::new(0, i32::MIN));
    }

    #[test]
    fn test_pawn_cell_parity() {
        assert!(Position::new(16, 8).is_pawn_cell());
        assert!(!Position::new(15, 8).is_pawn_cell());
        assert!(!Position::new(16, 7).is_pawn_cell());
    }
}
