//! Integration tests for the harness contract: driving games through the
//! `RulesEngine` trait, playouts, the action space and serialization.

use quoridor_engine::{
    random_playout, Action, ActionSpace, Board, GameRng, Outcome, PlayerId, PlayoutConfig,
    Position, QuoridorGame, RulesConfig, RulesEngine, Tile,
};

/// Play a full game through the trait only, picking the first legal action.
fn play_first_action<E: RulesEngine>(engine: &E, max_plies: usize) -> (E::State, PlayerId, usize) {
    let mut state = engine.initial_state();
    let mut player = PlayerId::White;
    let mut plies = 0;

    while !engine.is_terminal(&state) && plies < max_plies {
        let actions = engine.legal_actions(&state, player);
        let (next, next_player) = engine.step(&state, player, &actions[0]).unwrap();
        state = next;
        player = next_player;
        plies += 1;
    }
    (state, player, plies)
}

// =============================================================================
// RulesEngine contract
// =============================================================================

#[test]
fn test_generic_driver_finishes_a_game() {
    // Pawn moves come first, so "first action" never places a wall. Right
    // is first in catalog order, so both pawns shuffle along their home
    // rows and the ply cap ends the game.
    let game = QuoridorGame::new(RulesConfig::default().with_max_plies(400));
    let (board, player, plies) = play_first_action(&game, 1000);

    assert_eq!(plies, 400);
    assert!(game.is_terminal(&board));
    assert_eq!(game.outcome(&board, player), Outcome::Draw);
    assert_eq!(board.occupancy().len(), 0);
}

#[test]
fn test_state_key_identifies_boards() {
    let game = QuoridorGame::default();
    let start = game.initial_state();

    let (a, _) = game
        .step(&start, PlayerId::White, &Action::Move(Position::new(14, 8)))
        .unwrap();
    let (b, _) = game
        .step(&start, PlayerId::White, &Action::Move(Position::new(16, 6)))
        .unwrap();

    let key_a = game.state_key(&a).unwrap();
    assert_eq!(key_a, game.state_key(&a.clone()).unwrap());
    assert_ne!(key_a, game.state_key(&b).unwrap());
    assert_eq!(Board::from_state_key(&key_a).unwrap(), a);
}

#[test]
fn test_outcome_perspectives_agree() {
    let game = QuoridorGame::default();
    let board = game
        .initial_board()
        .apply_move(PlayerId::Black, Position::new(16, 4));

    assert_eq!(game.outcome(&board, PlayerId::Black), Outcome::CurrentPlayerWon);
    assert_eq!(game.outcome(&board, PlayerId::White), Outcome::CurrentPlayerLost);
    assert_eq!(
        game.outcome(&board, PlayerId::Black).value(),
        -game.outcome(&board, PlayerId::White).value()
    );
}

// =============================================================================
// Playouts
// =============================================================================

#[test]
fn test_playouts_from_forked_streams() {
    let game = QuoridorGame::default();
    let board = game.initial_board();
    let config = PlayoutConfig::default().with_max_plies(2000).with_move_bias(0.9);
    let mut root = GameRng::new(2024);

    let mut finished = 0;
    for _ in 0..8 {
        let mut rng = root.fork();
        let report = random_playout(&game, &board, PlayerId::White, &mut rng, &config).unwrap();

        let walls = report.history.iter().filter(|r| r.action.is_place()).count();
        assert_eq!(report.final_state.occupancy().len(), walls * 3);
        assert!(walls <= 20);
        if report.outcome.is_over() {
            finished += 1;
        }
    }
    assert!(finished > 0);
}

#[test]
fn test_playout_history_replays() {
    let game = QuoridorGame::default();
    let start = game.initial_board();
    let report = random_playout(
        &game,
        &start,
        PlayerId::White,
        &mut GameRng::new(77),
        &PlayoutConfig::default().with_max_plies(120),
    )
    .unwrap();

    let mut board = start;
    for record in &report.history {
        board = game.step(&board, record.player, &record.action).unwrap().0;
    }
    assert_eq!(board, report.final_state);
}

// =============================================================================
// Action space
// =============================================================================

#[test]
fn test_mask_matches_legal_actions_mid_game() {
    let game = QuoridorGame::default();
    let report = random_playout(
        &game,
        &game.initial_board(),
        PlayerId::White,
        &mut GameRng::new(8),
        &PlayoutConfig::default().with_max_plies(30).with_move_bias(0.5),
    )
    .unwrap();

    let board = &report.final_state;
    let player = report.to_move;
    let actions = game.legal_actions(board, player);
    let mask = game.legal_mask(board, player);
    let space = game.action_space();

    assert_eq!(mask.iter().filter(|&&m| m).count(), actions.len());
    for (index, allowed) in mask.iter().enumerate() {
        let action = space.action_at(index).unwrap();
        assert_eq!(*allowed, actions.contains(&action), "slot {index}: {action}");
    }
}

#[test]
fn test_action_space_decodes_policy_choice() {
    let game = QuoridorGame::default();
    let board = game.initial_board();
    let index = ActionSpace.index_of(&Action::Place(Tile::vertical(14, 7))).unwrap();

    let action = game.action_space().action_at(index).unwrap();
    let (next, _) = game.step(&board, PlayerId::White, &action).unwrap();
    assert!(next.occupancy().contains(Position::new(15, 7)));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_board_json_roundtrip() {
    let game = QuoridorGame::default();
    let (board, _) = game
        .step(&game.initial_board(), PlayerId::White, &Action::Place(Tile::horizontal(5, 6)))
        .unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, board);
    assert_eq!(restored.white().tiles(), 9);
}

#[test]
fn test_config_json_roundtrip() {
    let config = RulesConfig::tournament().with_tiles(6);
    let json = serde_json::to_string(&config).unwrap();
    let restored: RulesConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}
