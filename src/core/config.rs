//! Rules configuration.
//!
//! The board geometry is fixed (17×17 grid, standard start squares). What
//! a caller may tune is how many walls each player holds, whether wall
//! placements must keep both goal rows reachable, and an optional ply cap
//! for self-play drivers that need bounded games.

use serde::{Deserialize, Serialize};

use super::player::DEFAULT_TILES;

/// Rules configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Wall tiles each player starts with (default: 10).
    pub tiles_per_player: u8,

    /// Reject wall placements that cut either pawn off from its goal row
    /// (default: false).
    pub require_goal_path: bool,

    /// Declare a draw once this many plies have been played without a
    /// winner (default: unlimited).
    pub max_plies: Option<u32>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            tiles_per_player: DEFAULT_TILES,
            require_goal_path: false,
            max_plies: None,
        }
    }
}

impl RulesConfig {
    /// Set the number of wall tiles per player.
    #[must_use]
    pub fn with_tiles(mut self, tiles: u8) -> Self {
        self.tiles_per_player = tiles;
        self
    }

    /// Enable or disable the goal-reachability check on wall placement.
    #[must_use]
    pub fn with_goal_path_check(mut self, enabled: bool) -> Self {
        self.require_goal_path = enabled;
        self
    }

    /// Cap the game length; reaching the cap is a draw.
    #[must_use]
    pub fn with_max_plies(mut self, plies: u32) -> Self {
        self.max_plies = Some(plies);
        self
    }

    /// Standard tournament rules: 10 walls each, goal paths enforced.
    #[must_use]
    pub fn tournament() -> Self {
        Self::default().with_goal_path_check(true)
    }
}
