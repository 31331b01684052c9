//! # quoridor-engine
//!
//! An immutable Quoridor rules engine for RL/MCTS training.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: every action yields a new `Board`; no board is
//!    ever changed after construction, so search trees and parallel workers
//!    can share boards freely.
//!
//! 2. **Rules as Data**: pawn legality is a fixed table of sixteen
//!    directions, each with a four-clause precondition, evaluated by one
//!    predicate.
//!
//! 3. **Narrow Harness Contract**: initial state, legal actions, step,
//!    outcome. See [`rules::RulesEngine`].
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the wall occupancy is an `im` set,
//!   so successors share structure with their parent and clone in O(1).
//!
//! - **Half-step Grid**: the 9×9 board is modelled on a 17×17 grid where
//!   odd coordinates are the seams walls occupy.
//!
//! ## Modules
//!
//! - `core`: positions, players, actions, walls, configuration, RNG, errors
//! - `rules`: direction catalog, board, game controller, action space
//! - `playout`: seeded random playouts

pub mod core;
pub mod rules;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameRng, GameRngState, IllegalPlacement, Occupancy, Orientation,
    PlacementViolation, Player, PlayerId, Position, RelativeOffset, RulesConfig, RulesError, Tile,
};

pub use crate::rules::{
    ActionSpace, Board, Direction, DirectionCondition, GameResult, Outcome, QuoridorGame,
    RulesEngine,
};

pub use crate::playout::{random_playout, PlayoutConfig, PlayoutReport};
