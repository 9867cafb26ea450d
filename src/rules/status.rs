//! Status line derivation for display.

use super::win::check_winner;
use crate::types::{Board, Player};

/// Derives the status line for a board and the player to move.
///
/// Reports `"Winner: X"` / `"Winner: O"` once a triple is complete,
/// otherwise `"Next player: X"` / `"Next player: O"`. A full drawn board
/// still reports the next player.
pub fn status(board: &Board, next_player: Player) -> String {
    match check_winner(board) {
        Some(winner) => format!("Winner: {winner}"),
        None => format!("Next player: {next_player}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_status_next_player() {
        let board = Board::new();
        assert_eq!(status(&board, Player::X), "Next player: X");
        assert_eq!(status(&board, Player::O), "Next player: O");
    }

    #[test]
    fn test_status_winner() {
        let board = Board::new()
            .placed(Position::TopLeft, Player::O)
            .placed(Position::Center, Player::O)
            .placed(Position::BottomRight, Player::O);

        assert_eq!(status(&board, Player::X), "Winner: O");
    }
}
