//! Three-mark tic-tac-toe.
//!
//! Each player may hold at most three marks. Placing a fourth first removes
//! one of the player's earlier marks, chosen at random. The crate provides
//! the game core behind an event/render contract:
//!
//! - **Board and rules**: [`Board`], [`rules`], [`invariants`]
//! - **Computer opponent**: [`search`] with three [`Difficulty`] levels
//! - **Turn controller**: [`GameSession`], driven by [`Command`]s and
//!   answering with deferred [`Effect`]s
//! - **Driver**: [`SessionDriver`] realises the effects on tokio
//!
//! # Example
//!
//! ```
//! use threemark::{GameSession, Mode, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::default().with_mode(Mode::TwoPlayer));
//! session.on_player_action(4);
//! assert_eq!(session.round().histories().of(threemark::Player::X).indices(), &[4]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod controller;
mod countdown;
mod driver;
mod error;
mod events;
mod history;
mod match_state;
mod round;
mod view;

// Public rule and search modules
pub mod invariants;
pub mod rules;
pub mod search;

// Crate-level exports - Board state
pub use board::{Board, Cell, Player};
pub use history::{MAX_MARKS, MarkHistory, MoveHistories};

// Crate-level exports - Rounds and match
pub use match_state::{MatchState, Score};
pub use round::{GameRound, Outcome};
pub use rules::Placement;

// Crate-level exports - Search
pub use search::Difficulty;

// Crate-level exports - Session
pub use config::{Mode, SessionConfig, Theme};
pub use controller::{GameSession, Phase};
pub use countdown::{Countdown, format_label};
pub use driver::{SessionDriver, SessionEvent};
pub use events::{Command, Effect, Notice, RoundId};
pub use view::SessionView;

// Crate-level exports - Errors
pub use error::{ConfigError, GameError};
