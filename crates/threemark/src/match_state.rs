//! State that outlives rounds: score and next starting player.

use crate::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Rounds won per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by X.
    pub x: u32,
    /// Rounds won by O.
    pub o: u32,
}

impl Score {
    /// Rounds won by `player`.
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn increment(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

/// Match state carried across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    score: Score,
    starting_player: Player,
}

impl MatchState {
    /// Fresh match: no score, X starts.
    pub fn new() -> Self {
        Self {
            score: Score::default(),
            starting_player: Player::X,
        }
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Who opens the next round.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Records a finished round. A win scores and hands the next opening
    /// move to the winner; a draw changes nothing.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        if let Outcome::Won(winner) = outcome {
            self.score.increment(winner);
            self.starting_player = winner;
            info!(?winner, score = ?self.score, "Round won");
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
