//! Per-player move history: the cells each player currently occupies.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Maximum number of live marks a player may hold.
pub const MAX_MARKS: usize = 3;

/// Ordered cell indices occupied by one player, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkHistory {
    indices: Vec<usize>,
}

impl MarkHistory {
    /// Number of live marks.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when the player has no mark on the board.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// True when the next placement must evict.
    pub fn is_at_cap(&self) -> bool {
        self.indices.len() >= MAX_MARKS
    }

    /// Occupied indices, oldest first.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Records a new mark.
    pub(crate) fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Removes the entry at `slot` (position in the history, not board index).
    pub(crate) fn remove_slot(&mut self, slot: usize) -> usize {
        self.indices.remove(slot)
    }
}

/// Histories for both players.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveHistories {
    x: MarkHistory,
    o: MarkHistory,
}

impl MoveHistories {
    /// History for `player`.
    pub fn of(&self, player: Player) -> &MarkHistory {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    pub(crate) fn of_mut(&mut self, player: Player) -> &mut MarkHistory {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }
}
