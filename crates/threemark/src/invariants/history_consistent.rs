//! History consistency: each player's history matches their marks.

use super::Invariant;
use crate::{Cell, GameRound, Player};

/// Invariant: a player's history lists exactly the cells holding their mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameRound> for HistoryConsistentInvariant {
    fn holds(round: &GameRound) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let history = round.histories().of(player);
            history.len() == round.board().count_of(player)
                && history
                    .indices()
                    .iter()
                    .all(|&i| round.board().get(i) == Some(Cell::Occupied(player)))
        })
    }

    fn description() -> &'static str {
        "History matches the marks on the board"
    }
}
