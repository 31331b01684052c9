//! The direction catalog: the sixteen ways a pawn can move.
//!
//! Each direction is an offset plus a [`DirectionCondition`], four sets of
//! cells given relative to the mover:
//!
//! | clause         | holds when                                        |
//! |----------------|---------------------------------------------------|
//! | `occupied`     | every cell is the opponent's square               |
//! | `not_occupied` | no cell is the opponent's square                  |
//! | `blocked`      | some cell is walled or off the board (if any)     |
//! | `not_blocked`  | no cell is walled                                 |
//!
//! A direction applies when all four clauses hold and its destination is on
//! the board. The table below is the whole pawn rule set; nothing else in
//! the crate decides pawn legality.
//!
//! The rows are written for the four "Right" directions and the other sides
//! follow by quarter turns, so the catalog is closed under
//! [`Direction::rotate_cw`] and [`Direction::mirror_rows`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Occupancy, Position, RelativeOffset};

const fn o(dx: i32, dy: i32) -> RelativeOffset {
    RelativeOffset::new(dx, dy)
}

/// Preconditions of one direction, relative to the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionCondition {
    pub occupied: &'static [RelativeOffset],
    pub not_occupied: &'static [RelativeOffset],
    pub blocked: &'static [RelativeOffset],
    pub not_blocked: &'static [RelativeOffset],
}

impl DirectionCondition {
    /// Evaluate all four clauses.
    #[must_use]
    pub fn holds(&self, mover: Position, opponent: Position, occupancy: &Occupancy) -> bool {
        let at = |offset: &RelativeOffset| offset.transform(mover);

        self.occupied.iter().all(|d| at(d) == opponent)
            && self.not_occupied.iter().all(|d| at(d) != opponent)
            && (self.blocked.is_empty() || self.blocked.iter().any(|d| occupancy.is_blocked(at(d))))
            && self.not_blocked.iter().all(|d| !occupancy.contains(at(d)))
    }
}

const RIGHT: DirectionCondition = DirectionCondition {
    occupied: &[],
    not_occupied: &[o(0, 2)],
    blocked: &[],
    not_blocked: &[o(0, 1)],
};
const RIGHT_JUMP: DirectionCondition = DirectionCondition {
    occupied: &[o(0, 2)],
    not_occupied: &[],
    blocked: &[],
    not_blocked: &[o(0, 1), o(0, 3)],
};
const RIGHT_JUMP_UP: DirectionCondition = DirectionCondition {
    occupied: &[o(0, 2)],
    not_occupied: &[],
    blocked: &[o(0, 3)],
    not_blocked: &[o(0, 1), o(-1, 2)],
};
const RIGHT_JUMP_DOWN: DirectionCondition = DirectionCondition {
    occupied: &[o(0, 2)],
    not_occupied: &[],
    blocked: &[o(0, 3)],
    not_blocked: &[o(0, 1), o(1, 2)],
};

const DOWN: DirectionCondition = DirectionCondition {
    occupied: &[],
    not_occupied: &[o(2, 0)],
    blocked: &[],
    not_blocked: &[o(1, 0)],
};
const DOWN_JUMP: DirectionCondition = DirectionCondition {
    occupied: &[o(2, 0)],
    not_occupied: &[],
    blocked: &[],
    not_blocked: &[o(1, 0), o(3, 0)],
};
const DOWN_JUMP_LEFT: DirectionCondition = DirectionCondition {
    occupied: &[o(2, 0)],
    not_occupied: &[],
    blocked: &[o(3, 0)],
    not_blocked: &[o(1, 0), o(2, -1)],
};
const DOWN_JUMP_RIGHT: DirectionCondition = DirectionCondition {
    occupied: &[o(2, 0)],
    not_occupied: &[],
    blocked: &[o(3, 0)],
    not_blocked: &[o(1, 0), o(2, 1)],
};

const LEFT: DirectionCondition = DirectionCondition {
    occupied: &[],
    not_occupied: &[o(0, -2)],
    blocked: &[],
    not_blocked: &[o(0, -1)],
};
const LEFT_JUMP: DirectionCondition = DirectionCondition {
    occupied: &[o(0, -2)],
    not_occupied: &[],
    blocked: &[],
    not_blocked: &[o(0, -1), o(0, -3)],
};
const LEFT_JUMP_UP: DirectionCondition = DirectionCondition {
    occupied: &[o(0, -2)],
    not_occupied: &[],
    blocked: &[o(0, -3)],
    not_blocked: &[o(0, -1), o(-1, -2)],
};
const LEFT_JUMP_DOWN: DirectionCondition = DirectionCondition {
    occupied: &[o(0, -2)],
    not_occupied: &[],
    blocked: &[o(0, -3)],
    not_blocked: &[o(0, -1), o(1, -2)],
};

const UP: DirectionCondition = DirectionCondition {
    occupied: &[],
    not_occupied: &[o(-2, 0)],
    blocked: &[],
    not_blocked: &[o(-1, 0)],
};
const UP_JUMP: DirectionCondition = DirectionCondition {
    occupied: &[o(-2, 0)],
    not_occupied: &[],
    blocked: &[],
    not_blocked: &[o(-1, 0), o(-3, 0)],
};
const UP_JUMP_LEFT: DirectionCondition = DirectionCondition {
    occupied: &[o(-2, 0)],
    not_occupied: &[],
    blocked: &[o(-3, 0)],
    not_blocked: &[o(-1, 0), o(-2, -1)],
};
const UP_JUMP_RIGHT: DirectionCondition = DirectionCondition {
    occupied: &[o(-2, 0)],
    not_occupied: &[],
    blocked: &[o(-3, 0)],
    not_blocked: &[o(-1, 0), o(-2, 1)],
};

/// A member of the fixed direction catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Right,
    RightJump,
    RightJumpUp,
    RightJumpDown,
    Down,
    DownJump,
    DownJumpLeft,
    DownJumpRight,
    Left,
    LeftJump,
    LeftJumpUp,
    LeftJumpDown,
    Up,
    UpJump,
    UpJumpLeft,
    UpJumpRight,
}

impl Direction {
    /// The whole catalog, in a fixed order.
    pub const ALL: [Direction; 16] = [
        Direction::Right,
        Direction::RightJump,
        Direction::RightJumpUp,
        Direction::RightJumpDown,
        Direction::Down,
        Direction::DownJump,
        Direction::DownJumpLeft,
        Direction::DownJumpRight,
        Direction::Left,
        Direction::LeftJump,
        Direction::LeftJumpUp,
        Direction::LeftJumpDown,
        Direction::Up,
        Direction::UpJump,
        Direction::UpJumpLeft,
        Direction::UpJumpRight,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Right => "Right",
            Direction::RightJump => "Right-Jump",
            Direction::RightJumpUp => "Right-Jump-Up",
            Direction::RightJumpDown => "Right-Jump-Down",
            Direction::Down => "Down",
            Direction::DownJump => "Down-Jump",
            Direction::DownJumpLeft => "Down-Jump-Left",
            Direction::DownJumpRight => "Down-Jump-Right",
            Direction::Left => "Left",
            Direction::LeftJump => "Left-Jump",
            Direction::LeftJumpUp => "Left-Jump-Up",
            Direction::LeftJumpDown => "Left-Jump-Down",
            Direction::Up => "Up",
            Direction::UpJump => "Up-Jump",
            Direction::UpJumpLeft => "Up-Jump-Left",
            Direction::UpJumpRight => "Up-Jump-Right",
        }
    }

    /// Where the pawn lands, relative to where it stands.
    #[must_use]
    pub const fn offset(self) -> RelativeOffset {
        match self {
            Direction::Right => o(0, 2),
            Direction::RightJump => o(0, 4),
            Direction::RightJumpUp => o(-2, 2),
            Direction::RightJumpDown => o(2, 2),
            Direction::Down => o(2, 0),
            Direction::DownJump => o(4, 0),
            Direction::DownJumpLeft => o(2, -2),
            Direction::DownJumpRight => o(2, 2),
            Direction::Left => o(0, -2),
            Direction::LeftJump => o(0, -4),
            Direction::LeftJumpUp => o(-2, -2),
            Direction::LeftJumpDown => o(2, -2),
            Direction::Up => o(-2, 0),
            Direction::UpJump => o(-4, 0),
            Direction::UpJumpLeft => o(-2, -2),
            Direction::UpJumpRight => o(-2, 2),
        }
    }

    #[must_use]
    pub const fn condition(self) -> &'static DirectionCondition {
        match self {
            Direction::Right => &RIGHT,
            Direction::RightJump => &RIGHT_JUMP,
            Direction::RightJumpUp => &RIGHT_JUMP_UP,
            Direction::RightJumpDown => &RIGHT_JUMP_DOWN,
            Direction::Down => &DOWN,
            Direction::DownJump => &DOWN_JUMP,
            Direction::DownJumpLeft => &DOWN_JUMP_LEFT,
            Direction::DownJumpRight => &DOWN_JUMP_RIGHT,
            Direction::Left => &LEFT,
            Direction::LeftJump => &LEFT_JUMP,
            Direction::LeftJumpUp => &LEFT_JUMP_UP,
            Direction::LeftJumpDown => &LEFT_JUMP_DOWN,
            Direction::Up => &UP,
            Direction::UpJump => &UP_JUMP,
            Direction::UpJumpLeft => &UP_JUMP_LEFT,
            Direction::UpJumpRight => &UP_JUMP_RIGHT,
        }
    }

    /// Landing square for a pawn standing on `from`.
    #[must_use]
    pub const fn destination(self, from: Position) -> Position {
        self.offset().transform(from)
    }

    /// True if the pawn on `mover` may take this direction.
    #[must_use]
    pub fn is_legal(self, mover: Position, opponent: Position, occupancy: &Occupancy) -> bool {
        self.destination(mover).within_bounds()
            && self.condition().holds(mover, opponent, occupancy)
    }

    /// The same rule after a quarter turn of the board.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::RightJump => Direction::DownJump,
            Direction::RightJumpUp => Direction::DownJumpRight,
            Direction::RightJumpDown => Direction::DownJumpLeft,
            Direction::Down => Direction::Left,
            Direction::DownJump => Direction::LeftJump,
            Direction::DownJumpLeft => Direction::LeftJumpUp,
            Direction::DownJumpRight => Direction::LeftJumpDown,
            Direction::Left => Direction::Up,
            Direction::LeftJump => Direction::UpJump,
            Direction::LeftJumpUp => Direction::UpJumpRight,
            Direction::LeftJumpDown => Direction::UpJumpLeft,
            Direction::Up => Direction::Right,
            Direction::UpJump => Direction::RightJump,
            Direction::UpJumpLeft => Direction::RightJumpUp,
            Direction::UpJumpRight => Direction::RightJumpDown,
        }
    }

    /// The same rule with the board flipped top to bottom, which is how the
    /// game looks from the other player's side.
    #[must_use]
    pub const fn mirror_rows(self) -> Self {
        match self {
            Direction::Right => Direction::Right,
            Direction::RightJump => Direction::RightJump,
            Direction::RightJumpUp => Direction::RightJumpDown,
            Direction::RightJumpDown => Direction::RightJumpUp,
            Direction::Down => Direction::Up,
            Direction::DownJump => Direction::UpJump,
            Direction::DownJumpLeft => Direction::UpJumpLeft,
            Direction::DownJumpRight => Direction::UpJumpRight,
            Direction::Left => Direction::Left,
            Direction::LeftJump => Direction::LeftJump,
            Direction::LeftJumpUp => Direction::LeftJumpDown,
            Direction::LeftJumpDown => Direction::LeftJumpUp,
            Direction::Up => Direction::Down,
            Direction::UpJump => Direction::DownJump,
            Direction::UpJumpLeft => Direction::DownJumpLeft,
            Direction::UpJumpRight => Direction::DownJumpRight,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Directions the mover may legally take, in catalog order.
pub fn legal_directions(
    mover: Position,
    opponent: Position,
    occupancy: &Occupancy,
) -> impl Iterator<Item = Direction> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |d| d.is_legal(mover, opponent, occupancy))
}

/// Distinct landing squares reachable by one pawn move.
#[must_use]
pub fn pawn_destinations(
    mover: Position,
    opponent: Position,
    occupancy: &Occupancy,
) -> SmallVec<[Position; 8]> {
    let mut out: SmallVec<[Position; 8]> = SmallVec::new();
    for direction in legal_directions(mover, opponent, occupancy) {
        let to = direction.destination(mover);
        if !out.contains(&to) {
            out.push(to);
        }
    }
    out
}
