//! Board state: nine cells read row-major as a 3x3 grid.

use crate::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the owner of the mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board.
///
/// `Board` is `Copy`: [`Board::snapshot`] hands the search a scratch copy
/// that never aliases the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; Board::SIZE],
}

impl Board {
    /// Number of cells.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `player`'s mark at `index`.
    ///
    /// This does not check occupancy; legality belongs to the rule engine.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::InvalidIndex { index })?;
        *cell = Cell::Occupied(player);
        Ok(())
    }

    /// Empties the cell at `index`.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self, index: usize) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::InvalidIndex { index })?;
        *cell = Cell::Empty;
        Ok(())
    }

    /// Unchecked write for search scratch boards. `index` must be < 9.
    pub(crate) fn mark(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Gets the cell at `index`, or `None` outside the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns an independent copy for hypothetical play.
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..Self::SIZE).filter(|&i| self.is_empty_at(i)).collect()
    }

    /// Number of cells holding `player`'s mark.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| c.player() == Some(player))
            .count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; Board::SIZE] {
        &self.cells
    }

    /// Formats the board as a human-readable grid; empty cells show their
    /// 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
