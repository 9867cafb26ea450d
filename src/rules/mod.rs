//! Pure rule functions over board snapshots.
//!
//! Everything here is a function of a single [`Board`](crate::Board); the
//! timeline owns which snapshot the rules are asked about.

mod draw;
mod status;
mod win;

pub use draw::{is_draw, is_full};
pub use status::status;
pub use win::{check_winner, winning_line};
