//! Win detection.

use crate::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `player` holds all three cells of any line.
pub fn is_winner(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&i| board.get(i).and_then(Cell::player) == Some(player))
    })
}

/// Returns the player holding a complete line, if any.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| is_winner(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, cells: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in cells {
            board.place(i, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Player::O, &line);
            assert!(is_winner(&board, Player::O), "line {:?}", line);
            assert!(!is_winner(&board, Player::X));
            assert_eq!(check_winner(&board), Some(Player::O));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::X, &[0, 1]);
        board.place(2, Player::O).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_three_marks_off_line() {
        let board = board_with(Player::X, &[0, 1, 3]);
        assert!(!is_winner(&board, Player::X));
    }
}
