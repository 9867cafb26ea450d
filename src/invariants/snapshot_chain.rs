//! Snapshot chain invariant: each snapshot is its predecessor plus one move.

use super::Invariant;
use crate::position::Position;
use crate::timeline::Timeline;
use crate::types::{Player, Square};

/// Invariant: the history forms a single-move chain from the empty board.
///
/// Snapshot 0 is empty, and each consecutive pair differs in exactly one
/// square: empty in the predecessor, occupied by the parity player in the
/// successor. Marks are never moved, removed, or overwritten.
pub struct SnapshotChainInvariant;

impl Invariant<Timeline> for SnapshotChainInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let snapshots = timeline.snapshots();

        let Some(first) = snapshots.first() else {
            return false;
        };
        if !first.squares().iter().all(|s| *s == Square::Empty) {
            return false;
        }

        snapshots.windows(2).enumerate().all(|(i, pair)| {
            let (prev, next) = (&pair[0], &pair[1]);
            let mover = if i % 2 == 0 { Player::X } else { Player::O };

            let mut changed = 0;
            for pos in Position::ALL {
                match (prev.get(pos), next.get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(p)) if p == mover => changed += 1,
                    _ => return false,
                }
            }
            changed == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot extends its predecessor by exactly one mark"
    }
}
