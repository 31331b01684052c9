//! Core value types: geometry, players, actions, walls, configuration,
//! RNG and errors.
//!
//! Everything here is a plain immutable value. Game rules live in `rules`.

pub mod geometry;
pub mod player;
pub mod action;
pub mod occupancy;
pub mod config;
pub mod rng;
pub mod error;

pub use geometry::{transform, within_bounds, Position, RelativeOffset, GRID_MAX, GRID_SIZE};
pub use player::{Player, PlayerId, DEFAULT_TILES};
pub use action::{Action, ActionRecord, Orientation, Tile};
pub use occupancy::Occupancy;
pub use config::RulesConfig;
pub use rng::{GameRng, GameRngState};
pub use error::{IllegalPlacement, PlacementViolation, RulesError};
