//! Turn parity invariant: mark counts follow the snapshot index.

use super::Invariant;
use crate::timeline::Timeline;
use crate::types::Player;

/// Invariant: snapshot `i` holds exactly `i` marks, X leading by parity.
///
/// X moves on even indices and O on odd, so snapshot `i` must contain
/// `ceil(i/2)` X marks and `floor(i/2)` O marks. This is what makes the
/// player to move safely derivable from `current % 2` instead of being
/// stored - any drift between history and turn order shows up here.
pub struct TurnParityInvariant;

impl Invariant<Timeline> for TurnParityInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().iter().enumerate().all(|(i, board)| {
            board.count(Player::X) == i.div_ceil(2) && board.count(Player::O) == i / 2
        })
    }

    fn description() -> &'static str {
        "Snapshot mark counts match index parity (X on even, O on odd)"
    }
}
