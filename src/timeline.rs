//! The game state engine: a history of board snapshots with time travel.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error navigating the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TimelineError {
    /// The requested snapshot index does not exist.
    #[display("move index {index} is out of range: history has {len} snapshots")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for TimelineError {}

/// Ordered history of board snapshots plus the index currently displayed.
///
/// Snapshot 0 is the empty starting board; each subsequent snapshot is its
/// predecessor with exactly one more mark. The player to move is never
/// stored: it is derived from the parity of the current index (even -> X,
/// odd -> O), so rewinding can never desynchronize it from the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    snapshots: Vec<Board>,
    current: usize,
}

impl Timeline {
    /// Creates a timeline holding the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// The board snapshot currently displayed.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Number of snapshots in the history (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the snapshot currently displayed.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// All snapshots from game start to the latest move.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The player who moves next, derived from index parity.
    pub fn next_player(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board())
    }

    /// The winning triple on the displayed board, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.board())
    }

    /// True once the displayed board is won or full.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.board().is_full()
    }

    /// Status line for the displayed board ("Winner: X" / "Next player: O").
    pub fn status_line(&self) -> String {
        rules::status(self.board(), self.next_player())
    }

    /// Applies a move at the given position for the parity-derived player.
    ///
    /// Invalid input - an occupied square, or a board that already has a
    /// winner - is silently ignored: the state is left unchanged and `false`
    /// is returned. On success the history is truncated to the displayed
    /// snapshot (discarding any redone future from an earlier rewind), the
    /// copy-on-write successor board is appended, and the new last snapshot
    /// becomes current.
    #[instrument(skip(self), fields(position = ?position, player = ?self.next_player()))]
    pub fn play(&mut self, position: Position) -> bool {
        let board = self.board();

        if !board.is_empty(position) {
            debug!("ignoring move onto an occupied square");
            return false;
        }
        if rules::check_winner(board).is_some() {
            debug!("ignoring move after the game is decided");
            return false;
        }

        let next = board.placed(position, self.next_player());
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        debug!(move_number = self.current, "move applied");
        self.assert_invariants();
        true
    }

    /// Displays the snapshot at the given history index.
    ///
    /// Never mutates the history; a later [`play`](Timeline::play) is what
    /// discards the branch beyond the displayed snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::OutOfRange`] if `index` is past the end of
    /// the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), TimelineError> {
        if index >= self.snapshots.len() {
            return Err(TimelineError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }

        debug!(from = self.current, to = index, "viewing snapshot");
        self.current = index;
        self.assert_invariants();
        Ok(())
    }

    fn assert_invariants(&self) {
        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "timeline invariant violated: {:?}",
            TimelineInvariants::check_all(self)
        );
    }

    /// Test-only constructor for exercising invariants against corrupt state.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current: usize) -> Self {
        Self { snapshots, current }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_new_timeline() {
        let timeline = Timeline::new();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.current_move(), 0);
        assert_eq!(timeline.next_player(), Player::X);
        assert!(timeline.board().squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_play_appends_snapshot() {
        let mut timeline = Timeline::new();
        assert!(timeline.play(Position::Center));

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.current_move(), 1);
        assert_eq!(
            timeline.board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(timeline.next_player(), Player::O);

        // Snapshot 0 is still the empty board.
        assert!(timeline.snapshots()[0].is_empty(Position::Center));
    }

    #[test]
    fn test_play_occupied_square_is_noop() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);

        let before = timeline.clone();
        assert!(!timeline.play(Position::Center));
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut timeline = Timeline::new();
        let result = timeline.jump_to(1);
        assert_eq!(result, Err(TimelineError::OutOfRange { index: 1, len: 1 }));
        assert_eq!(timeline.current_move(), 0);
    }

    #[test]
    fn test_jump_to_does_not_mutate_history() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center);
        timeline.play(Position::TopLeft);

        timeline.jump_to(0).expect("index 0 always exists");
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.current_move(), 0);
        assert_eq!(timeline.next_player(), Player::X);
    }

    #[test]
    fn test_error_display() {
        let err = TimelineError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "move index 7 is out of range: history has 3 snapshots"
        );
    }
}
