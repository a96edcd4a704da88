//! Placement legality and the three-mark eviction rule.
//!
//! A player holds at most [`MAX_MARKS`](crate::MAX_MARKS) marks. Placing another one first
//! removes one of the player's existing marks, chosen uniformly at random.

use crate::{Board, GameError, MoveHistories, Player};
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A completed placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Placement {
    /// Where the mark was written.
    pub index: usize,
    /// Who placed it.
    pub player: Player,
    /// Cell cleared by eviction, if the player was at the cap.
    pub evicted: Option<usize>,
}

/// A placement is legal iff the target cell exists and is empty.
pub fn can_place(board: &Board, index: usize) -> bool {
    board.is_empty_at(index)
}

/// Removes one of `player`'s marks at random if the player holds
/// [`MAX_MARKS`](crate::MAX_MARKS) of them. Returns the cleared index.
#[instrument(skip(board, histories, rng))]
pub fn evict_random<R: Rng + ?Sized>(
    board: &mut Board,
    histories: &mut MoveHistories,
    player: Player,
    rng: &mut R,
) -> Result<Option<usize>, GameError> {
    let history = histories.of_mut(player);
    if !history.is_at_cap() {
        return Ok(None);
    }

    let slot = rng.gen_range(0..history.len());
    let index = history.remove_slot(slot);
    board.clear(index)?;
    debug!(?player, index, "Evicted mark");
    Ok(Some(index))
}

/// Validates and applies a placement, evicting first when required.
///
/// # Errors
///
/// - [`GameError::InvalidIndex`] if `index` is outside 0-8.
/// - [`GameError::IllegalMove`] if the cell is occupied. Nothing is
///   evicted in that case.
#[instrument(skip(board, histories, rng))]
pub fn apply_placement<R: Rng + ?Sized>(
    board: &mut Board,
    histories: &mut MoveHistories,
    player: Player,
    index: usize,
    rng: &mut R,
) -> Result<Placement, GameError> {
    if index >= Board::SIZE {
        return Err(GameError::InvalidIndex { index });
    }
    if !can_place(board, index) {
        return Err(GameError::IllegalMove { index });
    }

    let evicted = evict_random(board, histories, player, rng)?;
    board.place(index, player)?;
    histories.of_mut(player).push(index);

    Ok(Placement::new(index, player, evicted))
}
