//! Tic-tac-toe with time travel.
//!
//! This library is the logical core behind the classic tutorial UI: an
//! ordered history of immutable board snapshots, an index selecting which
//! snapshot is displayed, and pure rule functions for win, draw, and status
//! derivation. Rendering and click handling live in an external collaborator
//! that drives the [`Timeline`] and redraws from its [`GameView`] output.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] - immutable board snapshots
//! - **Rules**: pure functions over boards (winner, winning line, draw, status)
//! - **Timeline**: the game state engine (apply move, jump to snapshot)
//! - **Invariants**: first-class checkable properties of the timeline
//! - **View**: render-facing output plus an observer hook
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Position, Timeline};
//!
//! let mut game = Timeline::new();
//! game.play(Position::TopLeft);
//! game.play(Position::Center);
//! assert_eq!(game.status_line(), "Next player: X");
//!
//! // Rewind to the start, then branch: the redone future is discarded.
//! game.jump_to(0)?;
//! game.play(Position::BottomRight);
//! assert_eq!(game.len(), 2);
//! # Ok::<(), tictactoe_timeline::TimelineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod invariants;
mod position;
mod rules;
mod timeline;
mod types;
mod view;

// Crate-level exports - domain types
pub use types::{Board, Player, Square};

// Crate-level exports - positions
pub use position::Position;

// Crate-level exports - pure rules
pub use rules::{check_winner, is_draw, is_full, status, winning_line};

// Crate-level exports - the game state engine
pub use timeline::{Timeline, TimelineError};

// Crate-level exports - invariants
pub use invariants::{
    CurrentInRangeInvariant, Invariant, InvariantSet, InvariantViolation, SnapshotChainInvariant,
    TimelineInvariants, TurnParityInvariant,
};

// Crate-level exports - render-facing views
pub use view::{GameView, MoveEntry, Watched};

/// Alias for clarity when talking about the symbol a player places.
pub type Mark = Player;
