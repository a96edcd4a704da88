//! Per-round countdown measured in whole seconds.

use tracing::instrument;

/// Formats seconds as `m:ss`.
pub fn format_label(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Remaining time of a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    /// Creates a countdown, or `None` when `minutes` is zero.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes > 0).then(|| Self {
            remaining: minutes.saturating_mul(60),
        })
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advances one second. Returns `true` once time is up.
    #[instrument(level = "trace")]
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    /// Remaining time as `m:ss`.
    pub fn label(&self) -> String {
        format_label(self.remaining)
    }
}
