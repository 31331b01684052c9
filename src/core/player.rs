//! Player identification and per-player pawn data.
//!
//! ## PlayerId
//!
//! Quoridor is strictly two-player: `White` and `Black`. Each id carries
//! its fixed start square and goal row.
//!
//! ## Player
//!
//! A value object holding a pawn position and the number of wall tiles
//! still in hand. Every update returns a new `Player`.

use serde::{Deserialize, Serialize};

use super::geometry::{Position, GRID_MAX};

/// Wall tiles each player starts with under standard rules.
pub const DEFAULT_TILES: u8 = 10;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// Starts at `(16, 8)`, wins on reaching row 0.
    White,
    /// Starts at `(0, 8)`, wins on reaching row 16.
    Black,
}

impl PlayerId {
    /// Both players, WHITE first.
    pub const ALL: [PlayerId; 2] = [PlayerId::White, PlayerId::Black];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::White => PlayerId::Black,
            PlayerId::Black => PlayerId::White,
        }
    }

    /// Fixed start square.
    #[must_use]
    pub const fn start(self) -> Position {
        match self {
            PlayerId::White => Position::new(GRID_MAX, 8),
            PlayerId::Black => Position::new(0, 8),
        }
    }

    /// Row (`x` coordinate) this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> i32 {
        match self {
            PlayerId::White => 0,
            PlayerId::Black => GRID_MAX,
        }
    }

    /// True if `position` lies on this player's goal row.
    #[must_use]
    pub const fn has_reached_goal(self, position: Position) -> bool {
        position.x == self.goal_row()
    }

    /// Harness sign convention: WHITE is `1`, BLACK is `-1`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            PlayerId::White => 1,
            PlayerId::Black => -1,
        }
    }

    /// Inverse of [`PlayerId::sign`]. Any other value yields `None`.
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(PlayerId::White),
            -1 => Some(PlayerId::Black),
            _ => None,
        }
    }

    /// 0 for WHITE, 1 for BLACK.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::White => 0,
            PlayerId::Black => 1,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::White => write!(f, "WHITE"),
            PlayerId::Black => write!(f, "BLACK"),
        }
    }
}

/// A pawn and its remaining wall tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    position: Position,
    tiles: u8,
}

impl Player {
    #[must_use]
    pub const fn new(position: Position, tiles: u8) -> Self {
        Self { position, tiles }
    }

    /// A player on their start square with `tiles` walls in hand.
    #[must_use]
    pub const fn starting(id: PlayerId, tiles: u8) -> Self {
        Self::new(id.start(), tiles)
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Wall tiles still in hand.
    #[must_use]
    pub const fn tiles(&self) -> u8 {
        self.tiles
    }

    #[must_use]
    pub const fn has_tiles(&self) -> bool {
        self.tiles > 0
    }

    /// Same tiles, new position.
    #[must_use]
    pub const fn moved_to(self, position: Position) -> Self {
        Self::new(position, self.tiles)
    }

    /// Same position, one tile fewer. `None` when no tiles are left.
    #[must_use]
    pub fn spend_tile(self) -> Option<Self> {
        let tiles = self.tiles.checked_sub(1)?;
        Some(Self::new(self.position, tiles))
    }
}
