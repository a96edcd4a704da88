//! The event contract between a session and its presentation adapter.
//!
//! Adapters send [`Command`]s in. The session answers with [`Effect`]s,
//! which are deferred work for whatever scheduler drives it: a computer
//! reply after a thinking delay, countdown ticks, notices shown a moment
//! after the state change that caused them.

use crate::{Difficulty, Mode, Player, Theme};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one round. Deferred callbacks carry the id of the round that
/// scheduled them; callbacks from a superseded round are ignored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
#[display("round {_0}")]
pub struct RoundId(pub u64);

impl RoundId {
    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// User-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Notice {
    /// A player completed a line.
    #[display("{_0} wins!")]
    Win(Player),
    /// The board filled without a line.
    #[display("Draw!")]
    Draw,
    /// The countdown expired.
    #[display("Time is up! It's a draw!")]
    TimeUp,
}

/// Input from the presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Human clicked a cell.
    PlayerAction(usize),
    /// Mode selector changed; resets the round.
    ModeChanged(Mode),
    /// Difficulty selector changed.
    DifficultyChanged(Difficulty),
    /// Timer length in minutes; applies from the next countdown start.
    TimerConfigured(u32),
    /// Theme selector changed; resets the round.
    ThemeChanged(Theme),
    /// Reset button; resets the round, score carries over.
    ResetRequested,
}

/// Deferred work requested by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Call [`GameSession::on_computer_turn`](crate::GameSession::on_computer_turn)
    /// with `round` after `delay`.
    ScheduleComputerMove {
        /// Round that scheduled the move.
        round: RoundId,
        /// Thinking delay.
        delay: Duration,
    },
    /// Cancel any live countdown, then call
    /// [`GameSession::on_timer_tick`](crate::GameSession::on_timer_tick)
    /// with `round` once per second.
    StartTimer {
        /// Round owning the countdown.
        round: RoundId,
    },
    /// Cancel the live countdown, if any.
    CancelTimer,
    /// Show `notice` after `delay`.
    Notify {
        /// What to show.
        notice: Notice,
        /// Delay after the triggering render.
        delay: Duration,
    },
}
