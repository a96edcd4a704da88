//! Computer opponent: random play and depth-weighted minimax.
//!
//! The lookahead plays classical tic-tac-toe. Marks placed during the
//! search persist and the board can fill; the three-mark eviction rule is
//! not modelled. Without that simplification the game tree has no natural
//! end.

use crate::rules;
use crate::{Board, Cell, GameError, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
const WIN_SCORE: i32 = 10;

/// Computer difficulty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[serde(alias = "easy")]
    #[strum(to_string = "random", serialize = "easy")]
    Random,
    /// Minimax with depth weight `1`.
    #[serde(alias = "medium")]
    #[strum(to_string = "bounded", serialize = "medium")]
    Bounded,
    /// Minimax with depth weight `-1`.
    #[default]
    #[serde(alias = "hard")]
    #[strum(to_string = "optimal", serialize = "hard")]
    Optimal,
}

impl Difficulty {
    /// Depth weight used by the terminal-score formula, or `None` for
    /// random play.
    pub fn depth_weight(self) -> Option<i32> {
        match self {
            Difficulty::Random => None,
            Difficulty::Bounded => Some(1),
            Difficulty::Optimal => Some(-1),
        }
    }
}

/// Picks a uniformly random empty cell.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, GameError> {
    board
        .empty_cells()
        .choose(rng)
        .copied()
        .ok_or(GameError::NoMovesAvailable)
}

/// Picks the empty cell with the highest minimax score for `player`.
///
/// Cells are scanned 0 to 8 and ties go to the earliest cell. The live
/// board is never touched; the search runs on a snapshot.
#[instrument(skip(board))]
pub fn best_move(board: &Board, player: Player, depth_weight: i32) -> Result<usize, GameError> {
    let mut scratch = board.snapshot();
    let mut best: Option<(usize, i32)> = None;

    for index in board.empty_cells() {
        scratch.mark(index, Cell::Occupied(player));
        let score = minimax(&mut scratch, 0, false, player, depth_weight);
        scratch.mark(index, Cell::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(GameError::NoMovesAvailable)?;
    debug!(index, score, "Best move selected");
    Ok(index)
}

/// Scores `board` from `player`'s point of view.
///
/// Terminal values: a `player` win scores `10 - depth * depth_weight`, an
/// opponent win `depth * depth_weight - 10`, a full board `0`. Otherwise
/// every empty cell is tried for the side to move (`player` when
/// `maximizing`) and the extremal child score is returned. Each trial mark
/// is undone before the next, so `board` is unchanged on return.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    player: Player,
    depth_weight: i32,
) -> i32 {
    let opponent = player.opponent();
    if rules::is_winner(board, player) {
        return WIN_SCORE - depth * depth_weight;
    }
    if rules::is_winner(board, opponent) {
        return depth * depth_weight - WIN_SCORE;
    }
    if rules::is_full(board) {
        return 0;
    }

    let mover = if maximizing { player } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..Board::SIZE {
        if !board.is_empty_at(index) {
            continue;
        }
        board.mark(index, Cell::Occupied(mover));
        let score = minimax(board, depth + 1, !maximizing, player, depth_weight);
        board.mark(index, Cell::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Chooses the computer's move for the given difficulty.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, GameError> {
    match difficulty.depth_weight() {
        None => random_move(board, rng),
        Some(weight) => best_move(board, player, weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(cells: &str) -> Board {
        let mut board = Board::new();
        for (i, c) in cells.chars().enumerate() {
            match c {
                'X' => board.place(i, Player::X).unwrap(),
                'O' => board.place(i, Player::O).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_random_move_picks_empty_cell() {
        let board = board_from("XO.X.O.XO");
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let index = random_move(&board, &mut rng).unwrap();
            assert!([2, 4, 6].contains(&index));
        }
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = board_from("XOXOXXOXO");
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(random_move(&board, &mut rng), Err(GameError::NoMovesAvailable));
        assert_eq!(best_move(&board, Player::O, 1), Err(GameError::NoMovesAvailable));
    }

    #[test]
    fn test_bounded_takes_immediate_win() {
        // O to move, O holds 3 and 4; 5 completes the middle row.
        let board = board_from("XX.OO....");
        assert_eq!(best_move(&board, Player::O, 1), Ok(5));
    }

    #[test]
    fn test_optimal_weight_prefers_slower_win() {
        // Cell 2 blocks X and forks O's two lines: the win arrives two
        // plies later and scores 10 + depth under weight -1.
        let board = board_from("XX.OO....");
        assert_eq!(best_move(&board, Player::O, -1), Ok(2));
    }

    #[test]
    fn test_blocks_opponent_win() {
        let board = board_from("XX..O....");
        assert_eq!(best_move(&board, Player::O, 1), Ok(2));
    }

    #[test]
    fn test_terminal_scores() {
        let mut win = board_from("OOO......");
        assert_eq!(minimax(&mut win, 2, true, Player::O, 1), 8);
        assert_eq!(minimax(&mut win, 2, true, Player::O, -1), 12);

        let mut loss = board_from("XXX......");
        assert_eq!(minimax(&mut loss, 3, false, Player::O, 1), -7);
        assert_eq!(minimax(&mut loss, 3, false, Player::O, -1), -13);

        let mut draw = board_from("XOXOXXOXO");
        assert_eq!(minimax(&mut draw, 4, true, Player::O, 1), 0);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board = board_from("X...O....");
        let before = board;
        minimax(&mut board, 0, true, Player::O, 1);
        assert_eq!(board, before);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Every first move from an empty board draws under perfect play,
        // so the stable scan returns cell 0 for the bounded weight.
        let board = Board::new();
        assert_eq!(best_move(&board, Player::X, 1), Ok(0));
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Random);
        assert_eq!("Optimal".parse::<Difficulty>().unwrap(), Difficulty::Optimal);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Bounded);
        assert_eq!(Difficulty::Bounded.to_string(), "bounded");
    }
}
