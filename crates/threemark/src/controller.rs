//! Turn controller.
//!
//! [`GameSession`] owns the match, the live round and the configuration.
//! Every handler is synchronous and returns the [`Effect`]s the caller must
//! schedule; the session never sleeps or spawns. Deferred callbacks come
//! back through [`GameSession::on_computer_turn`] and
//! [`GameSession::on_timer_tick`] tagged with the [`RoundId`] that
//! requested them.

use crate::events::{Command, Effect, Notice, RoundId};
use crate::search;
use crate::{
    Countdown, Difficulty, GameError, GameRound, MatchState, Mode, Outcome, Player,
    SessionConfig, SessionView, Theme,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a human to click a cell.
    AwaitingHumanMove,
    /// Computer reply is scheduled.
    AwaitingComputerMove,
    /// A round just ended; the next one starts immediately.
    RoundOver,
}

/// A play session: one match of consecutive rounds.
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    match_state: MatchState,
    round: GameRound,
    round_id: RoundId,
    phase: Phase,
    countdown: Option<Countdown>,
    timer_armed: bool,
    time_label: String,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with a fresh match. X opens the first round.
    #[instrument(skip(config), fields(mode = %config.mode(), difficulty = %config.difficulty()))]
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let match_state = MatchState::new();
        let mut session = Self {
            round: GameRound::new(match_state.starting_player()),
            config,
            match_state,
            round_id: RoundId::default(),
            phase: Phase::AwaitingHumanMove,
            countdown: None,
            timer_armed: false,
            time_label: String::new(),
            rng,
        };
        session.phase = session.phase_for_turn();
        info!("Session created");
        session
    }

    /// Current configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Score and next starting player.
    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// The live round.
    pub fn round(&self) -> &GameRound {
        &self.round
    }

    /// Id of the live round.
    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// Controller state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Remaining time as `m:ss`, or blank with no timer configured.
    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    /// Whether `player` is played by the computer under the current mode.
    pub fn is_computer(&self, player: Player) -> bool {
        *self.config.mode() == Mode::VsComputer && player == Player::O
    }

    /// Snapshot of everything the adapter renders.
    pub fn view(&self) -> SessionView {
        SessionView {
            round: self.round_id,
            cells: *self.round.board().cells(),
            score: self.match_state.score(),
            time_label: self.time_label.clone(),
            phase: self.phase,
            to_move: self.round.to_move(),
            mode: *self.config.mode(),
            difficulty: *self.config.difficulty(),
            theme: *self.config.theme(),
        }
    }

    /// Dispatches an adapter command.
    pub fn handle(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::PlayerAction(index) => self.on_player_action(index),
            Command::ModeChanged(mode) => self.on_mode_changed(mode),
            Command::DifficultyChanged(difficulty) => self.on_difficulty_changed(difficulty),
            Command::TimerConfigured(minutes) => self.on_timer_configured(minutes),
            Command::ThemeChanged(theme) => self.on_theme_changed(theme),
            Command::ResetRequested => self.on_reset_requested(),
        }
    }

    /// Applies a human placement at `index` if it is a human's turn and the
    /// cell is empty. Anything else is a silent no-op.
    #[instrument(skip(self), fields(round = %self.round_id, phase = ?self.phase))]
    pub fn on_player_action(&mut self, index: usize) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.phase != Phase::AwaitingHumanMove {
            debug!("Ignoring click outside a human turn");
            return effects;
        }

        match self.apply(index, &mut effects) {
            Ok(()) => {}
            Err(e @ GameError::InvalidIndex { .. }) => warn!(error = %e, "Ignoring click"),
            Err(e) => debug!(error = %e, "Ignoring click"),
        }
        effects
    }

    /// Deferred computer reply. Ignored unless `round` is live and the
    /// computer is due to move.
    #[instrument(skip(self), fields(live = %self.round_id, phase = ?self.phase))]
    pub fn on_computer_turn(&mut self, round: RoundId) -> Vec<Effect> {
        let mut effects = Vec::new();
        if round != self.round_id || self.phase != Phase::AwaitingComputerMove {
            debug!("Stale computer turn");
            return effects;
        }

        let player = self.round.to_move();
        let difficulty = *self.config.difficulty();
        let chosen = search::choose_move(self.round.board(), player, difficulty, &mut self.rng)
            .and_then(|index| self.apply(index, &mut effects));

        if let Err(e) = chosen {
            warn!(error = %e, "Computer could not move, forcing a draw");
            self.finish_round(Outcome::Draw, Notice::Draw, &mut effects);
        }
        effects
    }

    /// One countdown second. Ignored unless `round` is live and running a
    /// countdown. Expiry ends the round as a draw.
    #[instrument(level = "trace", skip(self))]
    pub fn on_timer_tick(&mut self, round: RoundId) -> Vec<Effect> {
        let mut effects = Vec::new();
        if round != self.round_id {
            debug!(%round, live = %self.round_id, "Stale timer tick");
            return effects;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return effects;
        };

        let expired = countdown.tick();
        self.time_label = countdown.label();
        if expired {
            info!(round = %self.round_id, "Time is up");
            self.finish_round(Outcome::Draw, Notice::TimeUp, &mut effects);
        }
        effects
    }

    /// Switches mode and starts a fresh round.
    #[instrument(skip(self))]
    pub fn on_mode_changed(&mut self, mode: Mode) -> Vec<Effect> {
        self.config = self.config.clone().with_mode(mode);
        self.reset_round()
    }

    /// Switches difficulty; takes effect on the computer's next move.
    #[instrument(skip(self))]
    pub fn on_difficulty_changed(&mut self, difficulty: Difficulty) -> Vec<Effect> {
        self.config = self.config.clone().with_difficulty(difficulty);
        Vec::new()
    }

    /// Sets the countdown length used from the next countdown start. A
    /// countdown already running keeps going, even when set to 0.
    #[instrument(skip(self))]
    pub fn on_timer_configured(&mut self, minutes: u32) -> Vec<Effect> {
        self.config = self.config.clone().with_timer_minutes(minutes);
        Vec::new()
    }

    /// Switches theme and starts a fresh round.
    #[instrument(skip(self))]
    pub fn on_theme_changed(&mut self, theme: Theme) -> Vec<Effect> {
        self.config = self.config.clone().with_theme(theme);
        self.reset_round()
    }

    /// Starts a fresh round keeping score and starting player.
    #[instrument(skip(self))]
    pub fn on_reset_requested(&mut self) -> Vec<Effect> {
        self.reset_round()
    }

    /// Cancels the countdown and starts a fresh round.
    pub fn reset_round(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::CancelTimer];
        self.begin_round(&mut effects);
        effects
    }

    /// Places the mover's mark, arms the countdown on the round's first
    /// placement, then settles the outcome.
    fn apply(&mut self, index: usize, effects: &mut Vec<Effect>) -> Result<(), GameError> {
        let placement = self.round.place(index, &mut self.rng)?;
        debug!(?placement, "Placed");
        self.arm_timer(effects);

        let outcome = self.round.outcome();
        if let Some(winner) = outcome.winner() {
            self.finish_round(outcome, Notice::Win(winner), effects);
        } else if outcome.is_terminal() {
            self.finish_round(outcome, Notice::Draw, effects);
        } else {
            self.await_turn(effects);
        }
        Ok(())
    }

    fn arm_timer(&mut self, effects: &mut Vec<Effect>) {
        if self.timer_armed {
            return;
        }
        self.timer_armed = true;
        if let Some(countdown) = Countdown::from_minutes(*self.config.timer_minutes()) {
            debug!(seconds = countdown.remaining(), "Starting countdown");
            self.time_label = countdown.label();
            self.countdown = Some(countdown);
            effects.push(Effect::StartTimer {
                round: self.round_id,
            });
        }
    }

    fn finish_round(&mut self, outcome: Outcome, notice: Notice, effects: &mut Vec<Effect>) {
        self.phase = Phase::RoundOver;
        self.match_state.record(outcome);
        info!(round = %self.round_id, ?outcome, %notice, "Round over");

        self.countdown = None;
        effects.push(Effect::CancelTimer);
        effects.push(Effect::Notify {
            notice,
            delay: self.config.notice_delay(),
        });
        self.begin_round(effects);
    }

    fn begin_round(&mut self, effects: &mut Vec<Effect>) {
        self.round_id = self.round_id.next();
        self.round = GameRound::new(self.match_state.starting_player());
        self.countdown = None;
        self.timer_armed = false;
        if *self.config.timer_minutes() == 0 {
            self.time_label.clear();
        }
        debug!(round = %self.round_id, starting = ?self.round.to_move(), "Round started");
        self.await_turn(effects);
    }

    fn await_turn(&mut self, effects: &mut Vec<Effect>) {
        self.phase = self.phase_for_turn();
        if self.phase == Phase::AwaitingComputerMove {
            effects.push(Effect::ScheduleComputerMove {
                round: self.round_id,
                delay: self.config.computer_delay(),
            });
        }
    }

    fn phase_for_turn(&self) -> Phase {
        if self.is_computer(self.round.to_move()) {
            Phase::AwaitingComputerMove
        } else {
            Phase::AwaitingHumanMove
        }
    }
}
