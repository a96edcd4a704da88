//! A single round: board, histories, turn owner and outcome.

use crate::invariants::{InvariantSet, RoundInvariants};
use crate::rules::{self, Placement};
use crate::{Board, GameError, MoveHistories, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Round is ongoing.
    #[default]
    InProgress,
    /// Round ended with a completed line.
    Won(Player),
    /// Round ended without a winner.
    Draw,
}

impl Outcome {
    /// True once the round is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Round state. Owns the board and both move histories exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRound {
    board: Board,
    histories: MoveHistories,
    to_move: Player,
    outcome: Outcome,
}

impl GameRound {
    /// Creates an empty round with `starting` to move.
    #[instrument]
    pub fn new(starting: Player) -> Self {
        Self {
            board: Board::new(),
            histories: MoveHistories::default(),
            to_move: starting,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both move histories.
    pub fn histories(&self) -> &MoveHistories {
        &self.histories
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Places the current player's mark at `index`.
    ///
    /// Evicts one of the mover's marks first if they already hold three,
    /// then checks for a win by the mover, then for a full board. If the
    /// round continues the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidIndex`] or [`GameError::IllegalMove`]; the round
    /// is left untouched.
    #[instrument(skip(self, rng), fields(player = ?self.to_move))]
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<Placement, GameError> {
        if self.outcome.is_terminal() {
            debug!(outcome = ?self.outcome, "Round already over");
            return Err(GameError::IllegalMove { index });
        }

        let mover = self.to_move;
        let placement =
            rules::apply_placement(&mut self.board, &mut self.histories, mover, index, rng)?;
        self.settle(mover);

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }

        debug!(?placement, outcome = ?self.outcome, "Placement applied");
        Ok(placement)
    }

    /// Decides the outcome after `mover` placed, passing the turn if the
    /// round goes on. Only the mover can have completed a line.
    fn settle(&mut self, mover: Player) {
        if rules::is_winner(&self.board, mover) {
            self.outcome = Outcome::Won(mover);
        } else if rules::is_full(&self.board) {
            self.outcome = Outcome::Draw;
        } else {
            self.to_move = mover.opponent();
        }
    }

    fn assert_invariants(&self) {
        if let Err(violations) = RoundInvariants::check_all(self) {
            warn!(?violations, "Round invariants violated");
            debug_assert!(false, "Round invariants violated: {:?}", violations);
        }
    }
}
