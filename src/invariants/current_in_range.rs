//! Current-index invariant: the displayed snapshot always exists.

use super::Invariant;
use crate::timeline::Timeline;

/// Invariant: the current move index selects an existing snapshot.
///
/// `0 <= current_move < len` at all times; the history never shrinks below
/// one snapshot, so there is always a board to display.
pub struct CurrentInRangeInvariant;

impl Invariant<Timeline> for CurrentInRangeInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.current_move() < timeline.len()
    }

    fn description() -> &'static str {
        "Current move index selects an existing snapshot"
    }
}
