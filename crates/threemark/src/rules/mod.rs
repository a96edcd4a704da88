//! Game rules for three-mark tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) and
//! [`MoveHistories`](crate::MoveHistories). Rules are kept apart from
//! board storage so the round, the search and the invariants can share
//! them.

pub mod draw;
pub mod eviction;
pub mod win;

pub use draw::{is_draw, is_full};
pub use eviction::{Placement, apply_placement, can_place, evict_random};
pub use win::{LINES, check_winner, is_winner};
