//! Quoridor rules.
//!
//! - `direction`: the sixteen-direction pawn catalog
//! - `board`: immutable board snapshots and successor construction
//! - `engine`: the `RulesEngine` trait harnesses are written against
//! - `game`: the Quoridor controller implementing it
//! - `action_space`: dense action indexing for policy vectors
//! - `paths`: goal-row reachability

pub mod direction;
pub mod board;
pub mod engine;
pub mod game;
pub mod action_space;
pub mod paths;

pub use direction::{legal_directions, pawn_destinations, Direction, DirectionCondition};
pub use board::Board;
pub use engine::{GameResult, Outcome, RulesEngine};
pub use game::QuoridorGame;
pub use action_space::ActionSpace;
pub use paths::{distance_to_goal, has_path_to_goal};
