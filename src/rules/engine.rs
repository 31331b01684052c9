//! Rules engine trait: the contract a search or training harness uses.
//!
//! A harness only ever needs four things from a game:
//! - the initial state
//! - the legal actions for a player in a state
//! - the successor of a state after an action, plus who moves next
//! - whether the game is over, and how it ended for a given player
//!
//! ## Implementation Notes
//!
//! - States are immutable values: `step` returns a new state and leaves
//!   its input valid, so search trees can keep every node.
//! - `step` must be deterministic.
//! - `legal_actions` is empty on a finished game. It can also be empty on
//!   a game still in play: without the goal-path rule, a pawn with no
//!   tiles left can be walled in with no legal move. `outcome` stays
//!   `NotOver` then; drivers must handle the stalemate themselves.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, RulesError};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players reached their goal at once.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// A game's status seen from one player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    NotOver,
    Draw,
    CurrentPlayerWon,
    CurrentPlayerLost,
}

impl Outcome {
    /// Express a finished game from `perspective`'s side.
    #[must_use]
    pub fn from_result(result: GameResult, perspective: PlayerId) -> Self {
        match result {
            GameResult::Draw => Outcome::Draw,
            GameResult::Winner(p) if p == perspective => Outcome::CurrentPlayerWon,
            GameResult::Winner(_) => Outcome::CurrentPlayerLost,
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self != Outcome::NotOver
    }

    /// Harness value convention: `0` while in play, `1` win, `-1` loss and
    /// a small non-zero value for a draw so it is distinguishable from
    /// "not over".
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            Outcome::NotOver => 0.0,
            Outcome::CurrentPlayerWon => 1.0,
            Outcome::CurrentPlayerLost => -1.0,
            Outcome::Draw => 1e-4,
        }
    }
}

/// Rules engine trait.
///
/// Games implement this trait to define their rules. Search and self-play
/// drivers are written against it.
pub trait RulesEngine {
    type State: Clone;
    type Action: Clone;

    /// The fixed starting state.
    fn initial_state(&self) -> Self::State;

    /// Every action `player` may take in `state`. Empty when the game is
    /// over or `player` is stuck.
    fn legal_actions(&self, state: &Self::State, player: PlayerId) -> Vec<Self::Action>;

    /// Apply `action` and hand the turn to the other player.
    ///
    /// # Errors
    ///
    /// If the action cannot be applied to `state`.
    fn step(
        &self,
        state: &Self::State,
        player: PlayerId,
        action: &Self::Action,
    ) -> Result<(Self::State, PlayerId), RulesError>;

    /// Status of `state` from `player`'s side.
    fn outcome(&self, state: &Self::State, player: PlayerId) -> Outcome;

    /// Canonical byte key for transposition tables.
    ///
    /// # Errors
    ///
    /// If the state cannot be encoded.
    fn state_key(&self, state: &Self::State) -> Result<Vec<u8>, RulesError>;

    // === Convenience Methods ===

    /// True once the game has ended.
    fn is_terminal(&self, state: &Self::State) -> bool {
        // Perspective does not affect whether the game is over.
        self.outcome(state, PlayerId::White).is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::Black);
        assert!(!result.is_winner(PlayerId::White));
        assert!(result.is_winner(PlayerId::Black));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::White));
        assert!(!draw.is_winner(PlayerId::Black));
    }

    #[test]
    fn test_outcome_from_result() {
        let white_won = GameResult::Winner(PlayerId::White);
        assert_eq!(Outcome::from_result(white_won, PlayerId::White), Outcome::CurrentPlayerWon);
        assert_eq!(Outcome::from_result(white_won, PlayerId::Black), Outcome::CurrentPlayerLost);
        assert_eq!(Outcome::from_result(GameResult::Draw, PlayerId::Black), Outcome::Draw);
    }

    #[test]
    fn test_outcome_values() {
        assert_eq!(Outcome::NotOver.value(), 0.0);
        assert_eq!(Outcome::CurrentPlayerWon.value(), 1.0);
        assert_eq!(Outcome::CurrentPlayerLost.value(), -1.0);
        assert!(Outcome::Draw.value() != 0.0);
        assert!(!Outcome::NotOver.is_over());
        assert!(Outcome::Draw.is_over());
    }
}
