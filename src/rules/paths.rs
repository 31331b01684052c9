//! Goal reachability.
//!
//! Breadth-first search over pawn cells. A step between two orthogonally
//! adjacent pawn cells is open unless the seam cell between them is walled.
//! Pawns do not block each other here; only walls matter.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::core::{Occupancy, PlayerId, Position, RelativeOffset};

const STEPS: [(RelativeOffset, RelativeOffset); 4] = [
    (RelativeOffset::new(0, 2), RelativeOffset::new(0, 1)),
    (RelativeOffset::new(2, 0), RelativeOffset::new(1, 0)),
    (RelativeOffset::new(0, -2), RelativeOffset::new(0, -1)),
    (RelativeOffset::new(-2, 0), RelativeOffset::new(-1, 0)),
];

/// Fewest pawn steps from `from` to `player`'s goal row, ignoring jumps and
/// the other pawn. `None` if walls cut the goal row off.
#[must_use]
pub fn distance_to_goal(occupancy: &Occupancy, from: Position, player: PlayerId) -> Option<u32> {
    let mut seen: FxHashSet<Position> = FxHashSet::default();
    let mut queue = VecDeque::from([(from, 0u32)]);
    seen.insert(from);

    while let Some((cell, dist)) = queue.pop_front() {
        if player.has_reached_goal(cell) {
            return Some(dist);
        }
        for (step, seam) in STEPS {
            let next = step.transform(cell);
            if next.within_bounds() && !occupancy.contains(seam.transform(cell)) && seen.insert(next) {
                queue.push_back((next, dist + 1));
            }
        }
    }
    None
}

/// True if `player` standing on `from` can still reach the goal row.
#[must_use]
pub fn has_path_to_goal(occupancy: &Occupancy, from: Position, player: PlayerId) -> bool {
    distance_to_goal(occupancy, from, player).is_some()
}
