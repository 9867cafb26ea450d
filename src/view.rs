//! Render-facing views of the timeline, plus the observer hook.
//!
//! The engine never draws anything: a rendering collaborator (DOM, TUI,
//! whatever) subscribes to state changes and redraws from a [`GameView`].

use crate::position::Position;
use crate::timeline::{Timeline, TimelineError};
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry in the history list shown beside the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    pub index: usize,
    /// Button label: "Go to game start" or "Go to move #N".
    pub label: String,
    /// Whether this entry is the snapshot currently displayed.
    pub is_current: bool,
}

/// Everything a rendering collaborator needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Squares of the displayed board, row-major.
    pub squares: [Square; 9],
    /// The player who moves next (parity-derived).
    pub next_player: Player,
    /// Status line: "Winner: X" or "Next player: O".
    pub status: String,
    /// Winning triple for highlighting, if the displayed board is won.
    pub winning_line: Option<[Position; 3]>,
    /// History list entries, oldest first.
    pub moves: Vec<MoveEntry>,
}

impl Timeline {
    /// Builds the render-facing view of the current state.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let moves = (0..self.len())
            .map(|index| MoveEntry {
                index,
                label: if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{index}")
                },
                is_current: index == self.current_move(),
            })
            .collect();

        GameView {
            squares: *self.board().squares(),
            next_player: self.next_player(),
            status: self.status_line(),
            winning_line: self.winning_line(),
            moves,
        }
    }
}

/// A timeline paired with a render callback.
///
/// Each accepted state change invokes the callback exactly once with the
/// fresh [`GameView`]; ignored inputs (occupied square, decided game) do
/// not re-render. This is the engine-plus-observer shape the hosting UI
/// layer is expected to own - one instance per active game.
pub struct Watched<F: FnMut(&GameView)> {
    timeline: Timeline,
    render: F,
}

impl<F: FnMut(&GameView)> Watched<F> {
    /// Wraps a timeline, immediately rendering its current state.
    pub fn new(timeline: Timeline, mut render: F) -> Self {
        render(&timeline.view());
        Self { timeline, render }
    }

    /// Applies a move, rendering only if the move was accepted.
    pub fn play(&mut self, position: Position) {
        if self.timeline.play(position) {
            (self.render)(&self.timeline.view());
        }
    }

    /// Jumps to a snapshot, rendering on success.
    ///
    /// # Errors
    ///
    /// Propagates [`TimelineError::OutOfRange`] without rendering.
    pub fn jump_to(&mut self, index: usize) -> Result<(), TimelineError> {
        self.timeline.jump_to(index)?;
        (self.render)(&self.timeline.view());
        Ok(())
    }

    /// Read access to the underlying timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Unwraps the timeline, dropping the callback.
    pub fn into_inner(self) -> Timeline {
        self.timeline
    }
}
