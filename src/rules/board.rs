//! Board state: an immutable snapshot of a game in progress.
//!
//! A `Board` holds both players and the wall occupancy. Every operation
//! that changes the game returns a new `Board`; the receiver is never
//! touched. The occupancy is an `im` persistent set, so a successor shares
//! all unchanged structure with its parent and cloning is O(1), which is
//! what tree search needs.
//!
//! The board does not judge pawn moves. [`Board::apply_move`] puts the pawn
//! wherever it is told; deciding which moves are legal is the job of the
//! direction catalog and the game controller.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    Action, IllegalPlacement, Occupancy, PlacementViolation, Player, PlayerId, Position, Tile,
    DEFAULT_TILES, GRID_SIZE,
};

use super::direction::pawn_destinations;
use super::engine::GameResult;

/// Immutable game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    white: Player,
    black: Player,
    occupancy: Occupancy,
    /// Plies applied since the initial board.
    ply: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::initial(DEFAULT_TILES)
    }
}

impl Board {
    /// Both pawns on their start squares with `tiles` walls each, no walls
    /// on the board.
    #[must_use]
    pub fn initial(tiles: u8) -> Self {
        Self {
            white: Player::starting(PlayerId::White, tiles),
            black: Player::starting(PlayerId::Black, tiles),
            occupancy: Occupancy::new(),
            ply: 0,
        }
    }

    /// Assemble an arbitrary position, e.g. for tests or puzzle setups.
    #[must_use]
    pub fn from_parts(white: Player, black: Player, occupancy: Occupancy) -> Self {
        Self {
            white,
            black,
            occupancy,
            ply: 0,
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Player {
        match id {
            PlayerId::White => self.white,
            PlayerId::Black => self.black,
        }
    }

    #[must_use]
    pub fn white(&self) -> Player {
        self.white
    }

    #[must_use]
    pub fn black(&self) -> Player {
        self.black
    }

    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Squares `id` can reach with one pawn move.
    #[must_use]
    pub fn pawn_moves(&self, id: PlayerId) -> smallvec::SmallVec<[Position; 8]> {
        pawn_destinations(
            self.player(id).position(),
            self.player(id.opponent()).position(),
            &self.occupancy,
        )
    }

    fn with_player(&self, id: PlayerId, player: Player, occupancy: Occupancy) -> Self {
        let (white, black) = match id {
            PlayerId::White => (player, self.black),
            PlayerId::Black => (self.white, player),
        };
        Self {
            white,
            black,
            occupancy,
            ply: self.ply + 1,
        }
    }

    /// Move `id`'s pawn to `destination`. Tiles and walls are unchanged.
    ///
    /// No legality check is made.
    #[must_use]
    pub fn apply_move(&self, id: PlayerId, destination: Position) -> Self {
        let player = self.player(id).moved_to(destination);
        self.with_player(id, player, self.occupancy.clone())
    }

    /// Check whether `id` may put `tile` on this board, ignoring goal
    /// reachability.
    pub fn check_tile_placement(&self, id: PlayerId, tile: &Tile) -> Result<(), PlacementViolation> {
        self.placing_player(id, tile).map(|_| ())
    }

    /// `id`'s player after paying for `tile`, or the first rule it breaks.
    fn placing_player(&self, id: PlayerId, tile: &Tile) -> Result<Player, PlacementViolation> {
        let player = self
            .player(id)
            .spend_tile()
            .ok_or(PlacementViolation::NoTilesRemaining)?;
        if !tile.is_aligned() {
            return Err(PlacementViolation::Misaligned);
        }
        if let Some(cell) = tile.cells().into_iter().find(|c| !c.within_bounds()) {
            return Err(PlacementViolation::OutOfBounds(cell));
        }
        if let Some(cell) = self.occupancy.collision(tile) {
            return Err(PlacementViolation::Collision(cell));
        }
        Ok(player)
    }

    /// Place `tile` for `id`, spending one of their tiles.
    ///
    /// Besides the three basic refusals (no tiles left, a covered cell off
    /// the board, a covered cell already walled) this also refuses anchors
    /// that are not on a wall seam, so only the 128 standard wall slots
    /// can ever be occupied.
    ///
    /// # Errors
    ///
    /// [`IllegalPlacement`] carrying the [`PlacementViolation`]: checked in
    /// the order tiles, alignment, bounds, collision.
    pub fn apply_tile_placement(&self, id: PlayerId, tile: Tile) -> Result<Self, IllegalPlacement> {
        match self.placing_player(id, &tile) {
            Ok(player) => Ok(self.with_player(id, player, self.occupancy.with_tile(&tile))),
            Err(reason) => {
                warn!(player = %id, %tile, %reason, "rejected wall placement");
                Err(IllegalPlacement {
                    player: id,
                    tile,
                    reason,
                })
            }
        }
    }

    /// Apply either kind of action.
    ///
    /// # Errors
    ///
    /// Only wall placements can fail; see [`Board::apply_tile_placement`].
    pub fn apply_action(&self, id: PlayerId, action: &Action) -> Result<Self, IllegalPlacement> {
        match *action {
            Action::Move(destination) => Ok(self.apply_move(id, destination)),
            Action::Place(tile) => self.apply_tile_placement(id, tile),
        }
    }

    /// True once either pawn stands on its goal row.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.has_won(PlayerId::White) || self.has_won(PlayerId::Black)
    }

    #[must_use]
    pub fn has_won(&self, id: PlayerId) -> bool {
        id.has_reached_goal(self.player(id).position())
    }

    /// `Some(result)` on a terminal board, `None` while play continues.
    #[must_use]
    pub fn terminal_result(&self) -> Option<GameResult> {
        match (self.has_won(PlayerId::White), self.has_won(PlayerId::Black)) {
            (true, true) => Some(GameResult::Draw),
            (true, false) => Some(GameResult::Winner(PlayerId::White)),
            (false, true) => Some(GameResult::Winner(PlayerId::Black)),
            (false, false) => None,
        }
    }

    /// Result of a finished game.
    ///
    /// # Panics
    ///
    /// If the board is not terminal; the result is undefined then.
    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.terminal_result() {
            Some(result) => result,
            None => panic!("result() is undefined for a board that is not terminal"),
        }
    }

    /// Compact binary key for transposition tables. Two boards get the same
    /// key iff they are equal.
    ///
    /// # Errors
    ///
    /// Propagates the encoder's error; encoding a `Board` does not fail in
    /// practice.
    pub fn state_key(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Inverse of [`Board::state_key`].
    ///
    /// # Errors
    ///
    /// If `bytes` is not a key produced by [`Board::state_key`].
    pub fn from_state_key(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Renders the 17×17 grid, row 0 on top: `W`/`B` pawns, `.` empty pawn
/// cells, `#` wall cells, blank seams. Tile counts follow on the last line.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..GRID_SIZE {
            let row: String = (0..GRID_SIZE)
                .map(|y| {
                    let cell = Position::new(x, y);
                    if cell == self.white.position() {
                        'W'
                    } else if cell == self.black.position() {
                        'B'
                    } else if self.occupancy.contains(cell) {
                        '#'
                    } else if cell.is_pawn_cell() {
                        '.'
                    } else {
                        ' '
                    }
                })
                .collect();
            writeln!(f, "{}", row.trim_end())?;
        }
        write!(
            f,
            "WHITE tiles: {}  BLACK tiles: {}",
            self.white.tiles(),
            self.black.tiles()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::default();

        assert_eq!(board.player(PlayerId::White).position(), Position::new(16, 8));
        assert_eq!(board.player(PlayerId::Black).position(), Position::new(0, 8));
        assert_eq!(board.white().tiles(), 10);
        assert_eq!(board.black().tiles(), 10);
        assert!(board.occupancy().is_empty());
        assert!(!board.is_terminal());
        assert_eq!(board.terminal_result(), None);
    }

    #[test]
    fn test_apply_move_returns_new_board() {
        let board = Board::default();
        let next = board.apply_move(PlayerId::White, Position::new(14, 8));

        assert_eq!(next.white().position(), Position::new(14, 8));
        assert_eq!(next.white().tiles(), 10);
        assert_eq!(next.ply(), 1);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_apply_move_does_not_check_legality() {
        let board = Board::default();
        let next = board.apply_move(PlayerId::Black, Position::new(-2, 40));
        assert_eq!(next.black().position(), Position::new(-2, 40));
    }

    #[test]
    fn test_tile_placement() {
        let board = Board::default();
        let next = board
            .apply_tile_placement(PlayerId::Black, Tile::vertical(0, 7))
            .unwrap();

        assert_eq!(next.black().tiles(), 9);
        assert_eq!(next.white().tiles(), 10);
        assert!(next.occupancy().contains(Position::new(1, 7)));
        assert_eq!(next.occupancy().len(), 3);
        assert!(board.occupancy().is_empty());
    }

    #[test]
    fn test_overlapping_tiles_rejected() {
        let board = Board::default()
            .apply_tile_placement(PlayerId::White, Tile::horizontal(7, 4))
            .unwrap();

        let err = board
            .apply_tile_placement(PlayerId::Black, Tile::horizontal(7, 6))
            .unwrap_err();

        assert_eq!(err.player, PlayerId::Black);
        assert_eq!(err.reason, PlacementViolation::Collision(Position::new(7, 6)));
    }

    #[test]
    fn test_out_of_bounds_tile_rejected() {
        let err = Board::default()
            .apply_tile_placement(PlayerId::White, Tile::horizontal(15, 16))
            .unwrap_err();
        assert_eq!(err.reason, PlacementViolation::OutOfBounds(Position::new(15, 17)));
    }

    #[test]
    fn test_misaligned_tile_rejected() {
        let err = Board::default()
            .apply_tile_placement(PlayerId::White, Tile::horizontal(2, 4))
            .unwrap_err();
        assert_eq!(err.reason, PlacementViolation::Misaligned);
    }

    #[test]
    fn test_misaligned_anchors_are_refused_on_any_seam() {
        let board = Board::default();
        for tile in [Tile::horizontal(2, 4), Tile::horizontal(1, 3), Tile::vertical(1, 1), Tile::vertical(2, 2)] {
            let err = board.apply_tile_placement(PlayerId::Black, tile).unwrap_err();
            assert_eq!(err.reason, PlacementViolation::Misaligned, "{tile}");
        }
        // Alignment is checked before bounds.
        let err = board
            .apply_tile_placement(PlayerId::Black, Tile::horizontal(16, 16))
            .unwrap_err();
        assert_eq!(err.reason, PlacementViolation::Misaligned);
    }

    #[test]
    fn test_placement_spends_exactly_one_tile() {
        let board = Board::initial(1)
            .apply_tile_placement(PlayerId::White, Tile::horizontal(5, 2))
            .unwrap();
        assert_eq!(board.white().tiles(), 0);
        assert_eq!(
            board.check_tile_placement(PlayerId::White, &Tile::horizontal(9, 2)),
            Err(PlacementViolation::NoTilesRemaining)
        );
        // Running out of tiles outranks every other violation.
        let err = board
            .apply_tile_placement(PlayerId::White, Tile::horizontal(5, 2))
            .unwrap_err();
        assert_eq!(err.reason, PlacementViolation::NoTilesRemaining);
    }

    #[test]
    fn test_no_tiles_left() {
        let board = Board::initial(0);
        let err = board
            .apply_action(PlayerId::White, &Action::Place(Tile::vertical(8, 1)))
            .unwrap_err();
        assert_eq!(err.reason, PlacementViolation::NoTilesRemaining);
    }

    #[test]
    fn test_terminal_results() {
        let white_home = Board::default().apply_move(PlayerId::White, Position::new(0, 2));
        assert!(white_home.is_terminal());
        assert_eq!(white_home.result(), GameResult::Winner(PlayerId::White));

        let black_home = Board::default().apply_move(PlayerId::Black, Position::new(16, 2));
        assert_eq!(black_home.result(), GameResult::Winner(PlayerId::Black));

        let both = white_home.apply_move(PlayerId::Black, Position::new(16, 2));
        assert_eq!(both.result(), GameResult::Draw);
    }

    #[test]
    #[should_panic(expected = "not terminal")]
    fn test_result_on_live_board_panics() {
        let _ = Board::default().result();
    }

    #[test]
    fn test_state_key_roundtrip() {
        let board = Board::default()
            .apply_tile_placement(PlayerId::White, Tile::horizontal(3, 2))
            .unwrap()
            .apply_move(PlayerId::Black, Position::new(2, 8));

        let key = board.state_key().unwrap();
        assert_eq!(Board::from_state_key(&key).unwrap(), board);
        assert_ne!(Board::default().state_key().unwrap(), key);
    }

    #[test]
    fn test_display() {
        let board = Board::default()
            .apply_tile_placement(PlayerId::White, Tile::horizontal(1, 0))
            .unwrap();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], ". . . . B . . . .");
        assert_eq!(lines[1], "###");
        assert_eq!(lines[16], ". . . . W . . . .");
        assert_eq!(lines[17], "WHITE tiles: 9  BLACK tiles: 10");
    }
}
