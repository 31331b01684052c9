//! Random playouts.
//!
//! Plays a game forward from any state by sampling legal actions, the
//! rollout primitive search drivers and self-play workers build on. With
//! ~130 legal actions per ply, uniform sampling mostly places walls, so
//! playouts can bias sampling towards pawn moves to keep games short.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Action, ActionRecord, GameRng, PlayerId, RulesError};
use crate::rules::{Outcome, RulesEngine};

/// Playout parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Stop after this many plies even if the game is not over
    /// (default: 1000).
    pub max_plies: u32,

    /// Probability of restricting a ply's choice to pawn moves
    /// (default: 0.8). Values outside `[0, 1]` are clamped; NaN counts
    /// as 0.
    pub move_bias: f64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 1000,
            move_bias: 0.8,
        }
    }
}

impl PlayoutConfig {
    #[must_use]
    pub fn with_max_plies(mut self, plies: u32) -> Self {
        self.max_plies = plies;
        self
    }

    /// Set the pawn-move bias, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_move_bias(mut self, bias: f64) -> Self {
        self.move_bias = clamp_probability(bias);
        self
    }

    /// `move_bias` clamped to `[0, 1]`, with NaN as 0.
    #[must_use]
    pub fn effective_move_bias(&self) -> f64 {
        clamp_probability(self.move_bias)
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// What happened in one playout.
#[derive(Clone, Debug)]
pub struct PlayoutReport<S> {
    /// State the playout stopped in.
    pub final_state: S,

    /// Player to move in `final_state`.
    pub to_move: PlayerId,

    /// Every action taken, in order.
    pub history: Vec<ActionRecord>,

    /// Status of `final_state` from the starting player's side.
    /// `NotOver` if the ply limit was hit first or play stalled.
    pub outcome: Outcome,

    /// True if the playout stopped because `to_move` had no legal action
    /// in a game that is not over.
    pub stalled: bool,
}

impl<S> PlayoutReport<S> {
    #[must_use]
    pub fn plies(&self) -> usize {
        self.history.len()
    }
}

/// Play from `state` with `player` to move until the game ends, the ply
/// limit is reached, or the player to move has no legal action.
///
/// The last case can only arise from a pawn walled in with no tiles left
/// (see [`RulesEngine::legal_actions`]); the report then has
/// `stalled == true` and an outcome of `NotOver`.
///
/// # Errors
///
/// Propagates a failed `step`, which indicates a rules bug since only
/// actions from `legal_actions` are played.
pub fn random_playout<E>(
    engine: &E,
    state: &E::State,
    player: PlayerId,
    rng: &mut GameRng,
    config: &PlayoutConfig,
) -> Result<PlayoutReport<E::State>, RulesError>
where
    E: RulesEngine<Action = Action>,
{
    let perspective = player;
    let mut state = state.clone();
    let mut to_move = player;
    let mut history = Vec::new();
    let move_bias = config.effective_move_bias();
    let mut stalled = false;

    for ply in 0..config.max_plies {
        let actions = engine.legal_actions(&state, to_move);
        if actions.is_empty() {
            stalled = !engine.is_terminal(&state);
            break;
        }

        let pawn_moves: Vec<Action> = actions.iter().copied().filter(Action::is_move).collect();
        let pool = if !pawn_moves.is_empty() && rng.gen_bool(move_bias) {
            &pawn_moves
        } else {
            &actions
        };
        let action = pool[rng.gen_index(pool.len())];

        let (next, next_player) = engine.step(&state, to_move, &action)?;
        history.push(ActionRecord::new(to_move, action, ply));
        state = next;
        to_move = next_player;
    }

    let outcome = engine.outcome(&state, perspective);
    if stalled {
        warn!(%to_move, plies = history.len(), "playout stalled: no legal action");
    }
    debug!(plies = history.len(), ?outcome, stalled, "playout finished");

    Ok(PlayoutReport {
        final_state: state,
        to_move,
        history,
        outcome,
        stalled,
    })
}
