//! Error types for the game core.

use derive_more::Display;
use tracing::instrument;

/// Errors raised by board, rule and search operations.
///
/// None of these reach the player: the session treats them as no-ops or,
/// for [`GameError::NoMovesAvailable`], as a forced draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell index {index} is outside the board (0-8)")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },

    /// Target cell is already occupied by either player.
    #[display("Cell {index} is already occupied")]
    IllegalMove {
        /// The occupied index.
        index: usize,
    },

    /// Search was asked to move on a board with no empty cell.
    #[display("No empty cell is available")]
    NoMovesAvailable,
}

impl std::error::Error for GameError {}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read config file: {}", err))
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}
