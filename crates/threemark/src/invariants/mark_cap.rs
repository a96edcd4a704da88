//! Mark cap: no player ever holds more than three marks.

use super::Invariant;
use crate::history::MAX_MARKS;
use crate::{GameRound, Player};

/// Invariant: each player has at most [`MAX_MARKS`] marks on the board.
pub struct MarkCapInvariant;

impl Invariant<GameRound> for MarkCapInvariant {
    fn holds(round: &GameRound) -> bool {
        [Player::X, Player::O]
            .into_iter()
            .all(|player| round.board().count_of(player) <= MAX_MARKS)
    }

    fn description() -> &'static str {
        "No player holds more than three marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_marks_violate() {
        let mut round = GameRound::new(Player::O);
        for i in [0, 2, 6] {
            round.board_mut().place(i, Player::O).unwrap();
        }
        assert!(MarkCapInvariant::holds(&round));
        round.board_mut().place(8, Player::O).unwrap();
        assert!(!MarkCapInvariant::holds(&round));
    }
}
