//! Draw detection.
//!
//! With at most three marks per player the board can hold six marks, so a
//! live round never fills it. The check is still applied after every
//! placement; the search relies on it for its hypothetical boards.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        for (i, p) in [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ]
        .into_iter()
        .enumerate()
        {
            board.place(i, p).unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for i in 0..9 {
            board.place(i, Player::X).unwrap();
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
