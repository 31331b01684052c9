//! Action representation: pawn moves and wall placements.
//!
//! An action is exactly one of:
//! - `Move(destination)`: the acting pawn jumps to `destination`
//! - `Place(tile)`: a wall segment is added and one tile is spent
//!
//! ## Wall segments
//!
//! A tile spans two pawn cells, so on the 17×17 grid it covers three
//! consecutive cells starting at its anchor:
//!
//! ```text
//! Horizontal at (1, 4):   (1,4) (1,5) (1,6)     blocks row moves
//! Vertical   at (4, 1):   (4,1) (5,1) (6,1)     blocks column moves
//! ```
//!
//! Aligned anchors sit on a seam: horizontal tiles on an odd row and
//! even column, vertical tiles on an even row and odd column.

use serde::{Deserialize, Serialize};

use super::geometry::{Position, RelativeOffset};
use super::player::PlayerId;

/// Axis a wall segment runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Runs along `y`, blocks movement between rows.
    Horizontal,
    /// Runs along `x`, blocks movement between columns.
    Vertical,
}

impl Orientation {
    /// Unit step along the segment.
    #[must_use]
    pub const fn step(self) -> RelativeOffset {
        match self {
            Orientation::Horizontal => RelativeOffset::new(0, 1),
            Orientation::Vertical => RelativeOffset::new(1, 0),
        }
    }
}

/// A wall segment: orientation plus anchor cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    pub orientation: Orientation,
    pub anchor: Position,
}

impl Tile {
    #[must_use]
    pub const fn new(orientation: Orientation, anchor: Position) -> Self {
        Self { orientation, anchor }
    }

    #[must_use]
    pub const fn horizontal(x: i32, y: i32) -> Self {
        Self::new(Orientation::Horizontal, Position::new(x, y))
    }

    #[must_use]
    pub const fn vertical(x: i32, y: i32) -> Self {
        Self::new(Orientation::Vertical, Position::new(x, y))
    }

    /// The three grid cells covered by this tile.
    #[must_use]
    pub fn cells(&self) -> [Position; 3] {
        let step = self.orientation.step();
        let middle = self.anchor + step;
        [self.anchor, middle, middle + step]
    }

    /// True when the anchor sits on a seam for this orientation.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        let Position { x, y } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => x.rem_euclid(2) == 1 && y.rem_euclid(2) == 0,
            Orientation::Vertical => x.rem_euclid(2) == 0 && y.rem_euclid(2) == 1,
        }
    }

    /// True when all three cells lie on the board.
    #[must_use]
    pub fn within_bounds(&self) -> bool {
        self.cells().iter().all(|cell| cell.within_bounds())
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.orientation {
            Orientation::Horizontal => write!(f, "H{}", self.anchor),
            Orientation::Vertical => write!(f, "V{}", self.anchor),
        }
    }
}

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    /// Move the acting pawn to this position.
    Move(Position),
    /// Place this wall segment.
    Place(Tile),
}

impl Action {
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }

    #[must_use]
    pub const fn is_place(&self) -> bool {
        matches!(self, Action::Place(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(to) => write!(f, "move {to}"),
            Action::Place(tile) => write!(f, "place {tile}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Playout histories
/// - Replay/debugging
/// - Training data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Ply number at which the action was taken (0-based).
    pub ply: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_cells() {
        let tile = Tile::horizontal(1, 4);
        assert_eq!(
            tile.cells(),
            [Position::new(1, 4), Position::new(1, 5), Position::new(1, 6)]
        );
    }

    #[test]
    fn test_vertical_cells() {
        let tile = Tile::vertical(4, 1);
        assert_eq!(
            tile.cells(),
            [Position::new(4, 1), Position::new(5, 1), Position::new(6, 1)]
        );
    }

    #[test]
    fn test_alignment() {
        assert!(Tile::horizontal(1, 0).is_aligned());
        assert!(Tile::vertical(0, 1).is_aligned());
        assert!(!Tile::horizontal(2, 0).is_aligned());
        assert!(!Tile::vertical(0, 2).is_aligned());
    }

    #[test]
    fn test_tile_bounds() {
        assert!(Tile::horizontal(15, 14).within_bounds());
        assert!(!Tile::horizontal(15, 16).within_bounds());
        assert!(!Tile::vertical(16, 15).within_bounds());
    }

    #[test]
    fn test_action_tags() {
        let step = Action::Move(Position::new(14, 8));
        let wall = Action::Place(Tile::horizontal(1, 0));

        assert!(step.is_move());
        assert!(!step.is_place());
        assert!(wall.is_place());
        assert_eq!(format!("{step}"), "move (14, 8)");
        assert_eq!(format!("{wall}"), "place H(1, 0)");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Place(Tile::vertical(6, 3));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_action_record() {
        let action = Action::Move(Position::new(2, 8));
        let record = ActionRecord::new(PlayerId::Black, action, 3);

        assert_eq!(record.player, PlayerId::Black);
        assert_eq!(record.action, action);
        assert_eq!(record.ply, 3);
    }
}
