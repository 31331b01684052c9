//! Game controller: the Quoridor implementation of [`RulesEngine`].
//!
//! Drives a two-state machine per match. Every successful `step` moves
//! `InProgress → InProgress` until the first board on which a pawn stands on
//! its goal row (or the optional ply cap is hit); that board is `Terminal`
//! and `step` refuses to go further.

use tracing::{debug, trace, warn};

use crate::core::{
    Action, IllegalPlacement, PlacementViolation, PlayerId, RulesConfig, RulesError, Tile,
};

use super::action_space::ActionSpace;
use super::board::Board;
use super::engine::{GameResult, Outcome, RulesEngine};
use super::paths::has_path_to_goal;

/// Quoridor rules with a given configuration.
#[derive(Clone, Debug, Default)]
pub struct QuoridorGame {
    config: RulesConfig,
    space: ActionSpace,
}

impl QuoridorGame {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self {
            config,
            space: ActionSpace,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn action_space(&self) -> &ActionSpace {
        &self.space
    }

    /// Starting position for this configuration.
    #[must_use]
    pub fn initial_board(&self) -> Board {
        Board::initial(self.config.tiles_per_player)
    }

    /// Whether `player` may place `tile` on `board` under this
    /// configuration.
    pub fn check_placement(&self, board: &Board, player: PlayerId, tile: &Tile) -> Result<(), PlacementViolation> {
        board.check_tile_placement(player, tile)?;

        if self.config.require_goal_path {
            let occupancy = board.occupancy().with_tile(tile);
            for id in PlayerId::ALL {
                if !has_path_to_goal(&occupancy, board.player(id).position(), id) {
                    return Err(PlacementViolation::BlocksGoal(id));
                }
            }
        }
        Ok(())
    }

    /// Wall placements `player` may make, in action-space order.
    pub fn legal_placements<'a>(&'a self, board: &'a Board, player: PlayerId) -> impl Iterator<Item = Tile> + 'a {
        let has_tiles = board.player(player).has_tiles();
        self.space
            .tiles()
            .filter(move |_| has_tiles)
            .filter(move |tile| self.check_placement(board, player, tile).is_ok())
    }

    /// Every legal action: pawn moves first, then wall placements.
    ///
    /// Empty on a finished game.
    #[must_use]
    pub fn legal_actions(&self, board: &Board, player: PlayerId) -> Vec<Action> {
        if self.outcome(board, player).is_over() {
            return Vec::new();
        }

        let mut actions: Vec<Action> = board.pawn_moves(player).into_iter().map(Action::Move).collect();
        let moves = actions.len();
        actions.extend(self.legal_placements(board, player).map(Action::Place));

        trace!(%player, moves, placements = actions.len() - moves, "enumerated legal actions");
        actions
    }

    /// Legal actions as a mask over the action space.
    #[must_use]
    pub fn legal_mask(&self, board: &Board, player: PlayerId) -> Vec<bool> {
        self.space.mask(&self.legal_actions(board, player))
    }

    /// Apply a wall placement with this configuration's checks.
    fn place(&self, board: &Board, player: PlayerId, tile: Tile) -> Result<Board, IllegalPlacement> {
        if let Err(reason) = self.check_placement(board, player, &tile) {
            warn!(%player, %tile, %reason, "rejected wall placement");
            return Err(IllegalPlacement { player, tile, reason });
        }
        board.apply_tile_placement(player, tile)
    }

    /// Apply `action` for `player` and pass the turn.
    ///
    /// Pawn moves are trusted to come from [`QuoridorGame::legal_actions`];
    /// wall placements are validated.
    ///
    /// # Errors
    ///
    /// [`RulesError::GameOver`] on a finished board, or
    /// [`RulesError::IllegalPlacement`] for a wall that cannot go there.
    pub fn step(&self, board: &Board, player: PlayerId, action: &Action) -> Result<(Board, PlayerId), RulesError> {
        if self.outcome(board, player).is_over() {
            warn!(%player, %action, ply = board.ply(), "step called on a finished game");
            return Err(RulesError::GameOver);
        }

        let next = match *action {
            Action::Move(to) => board.apply_move(player, to),
            Action::Place(tile) => self.place(board, player, tile)?,
        };

        debug!(%player, %action, ply = next.ply(), terminal = next.is_terminal(), "applied action");
        Ok((next, player.opponent()))
    }

    /// Status from `player`'s side.
    #[must_use]
    pub fn outcome(&self, board: &Board, player: PlayerId) -> Outcome {
        if let Some(result) = board.terminal_result() {
            return Outcome::from_result(result, player);
        }
        match self.config.max_plies {
            Some(cap) if board.ply() >= cap => Outcome::from_result(GameResult::Draw, player),
            _ => Outcome::NotOver,
        }
    }
}

impl RulesEngine for QuoridorGame {
    type State = Board;
    type Action = Action;

    fn initial_state(&self) -> Board {
        self.initial_board()
    }

    fn legal_actions(&self, state: &Board, player: PlayerId) -> Vec<Action> {
        QuoridorGame::legal_actions(self, state, player)
    }

    fn step(&self, state: &Board, player: PlayerId, action: &Action) -> Result<(Board, PlayerId), RulesError> {
        QuoridorGame::step(self, state, player, action)
    }

    fn outcome(&self, state: &Board, player: PlayerId) -> Outcome {
        QuoridorGame::outcome(self, state, player)
    }

    fn state_key(&self, state: &Board) -> Result<Vec<u8>, RulesError> {
        Ok(state.state_key()?)
    }
}
