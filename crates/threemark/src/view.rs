//! Render snapshot handed to the presentation adapter.

use crate::events::RoundId;
use crate::{Board, Cell, Difficulty, Mode, Phase, Player, Score, Theme};
use serde::{Deserialize, Serialize};

/// Everything an adapter needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Live round.
    pub round: RoundId,
    /// Cell contents, row-major.
    pub cells: [Cell; Board::SIZE],
    /// Match score.
    pub score: Score,
    /// Countdown as `m:ss`; blank when no timer is configured.
    pub time_label: String,
    /// Controller state.
    pub phase: Phase,
    /// Player to move.
    pub to_move: Player,
    /// Play mode.
    pub mode: Mode,
    /// Computer difficulty.
    pub difficulty: Difficulty,
    /// Visual theme.
    pub theme: Theme,
}

impl SessionView {
    /// Board rebuilt from the cells.
    pub fn board(&self) -> Board {
        let mut board = Board::new();
        for (index, cell) in self.cells.iter().enumerate() {
            board.mark(index, *cell);
        }
        board
    }
}
