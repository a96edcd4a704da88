//! Session configuration.

use crate::{ConfigError, Difficulty};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Who sits in the O seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[serde(alias = "multi")]
    #[strum(to_string = "two-player", serialize = "multi")]
    TwoPlayer,
    /// The computer plays O.
    #[default]
    #[serde(alias = "single")]
    #[strum(to_string = "vs-computer", serialize = "single")]
    VsComputer,
}

/// Visual theme. Only recorded and echoed to the renderer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

/// Configuration for a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Play mode.
    #[serde(default)]
    mode: Mode,

    /// Computer difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Countdown per round in minutes; 0 disables the timer.
    #[serde(default)]
    timer_minutes: u32,

    /// Visual theme.
    #[serde(default)]
    theme: Theme,

    /// Thinking delay before the computer moves.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Delay between a state change and its notice.
    #[serde(default = "default_notice_delay_ms")]
    notice_delay_ms: u64,

    /// Seed for eviction and random moves; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_notice_delay_ms() -> u64 {
    100
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            timer_minutes: 0,
            theme: Theme::default(),
            computer_delay_ms: default_computer_delay_ms(),
            notice_delay_ms: default_notice_delay_ms(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Thinking delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Notice delay as a [`Duration`].
    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.notice_delay_ms)
    }

    /// Sets the play mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the countdown length.
    pub fn with_timer_minutes(mut self, minutes: u32) -> Self {
        self.timer_minutes = minutes;
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
