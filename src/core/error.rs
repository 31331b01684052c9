//! Engine error types.
//!
//! Only recoverable conditions are errors. Precondition violations, such as
//! asking a board that is still in play for its result, panic instead.

use thiserror::Error;

use super::action::Tile;
use super::geometry::Position;
use super::player::PlayerId;

/// Why a wall placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementViolation {
    #[error("cell {0} is off the board")]
    OutOfBounds(Position),

    #[error("cell {0} is already covered by a wall")]
    Collision(Position),

    #[error("anchor is not on a wall seam")]
    Misaligned,

    #[error("no wall tiles remaining")]
    NoTilesRemaining,

    #[error("{0} would have no path to the goal row")]
    BlocksGoal(PlayerId),
}

/// A wall placement that cannot be applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("illegal placement of {tile} by {player}: {reason}")]
pub struct IllegalPlacement {
    pub player: PlayerId,
    pub tile: Tile,
    #[source]
    pub reason: PlacementViolation,
}

/// Errors surfaced by the game controller.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error(transparent)]
    IllegalPlacement(#[from] IllegalPlacement),

    #[error("game is already over")]
    GameOver,

    #[error("action index {index} is outside the action space of size {size}")]
    ActionIndexOutOfRange { index: usize, size: usize },

    #[error("state encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

impl RulesError {
    /// True if the caller can carry on with the same board.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RulesError::IllegalPlacement(_) => true,
            RulesError::ActionIndexOutOfRange { .. } => true,
            RulesError::GameOver => false,
            RulesError::Encoding(_) => false,
        }
    }
}
