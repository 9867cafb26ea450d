//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning triples: rows top-to-bottom, columns left-to-right,
/// then the two diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the winning triple of positions, if any.
///
/// The scan order is fixed (rows, columns, diagonals), but callers should
/// rely only on receiving one valid triple: two simultaneous triples cannot
/// arise in a legal game.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| match board.get(a) {
        Square::Occupied(player) => Some(player),
        Square::Empty => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .placed(Position::TopLeft, Player::X)
            .placed(Position::TopCenter, Player::X)
            .placed(Position::TopRight, Player::X);

        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_column() {
        let board = Board::new()
            .placed(Position::TopCenter, Player::O)
            .placed(Position::Center, Player::O)
            .placed(Position::BottomCenter, Player::O);

        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::new()
            .placed(Position::TopLeft, Player::O)
            .placed(Position::Center, Player::O)
            .placed(Position::BottomRight, Player::O);

        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .placed(Position::TopRight, Player::X)
            .placed(Position::Center, Player::X)
            .placed(Position::BottomLeft, Player::X);

        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .placed(Position::TopLeft, Player::X)
            .placed(Position::TopCenter, Player::X);

        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = Board::new()
            .placed(Position::TopLeft, Player::X)
            .placed(Position::TopCenter, Player::O)
            .placed(Position::TopRight, Player::X);

        assert_eq!(check_winner(&board), None);
    }
}
