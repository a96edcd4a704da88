//! Async session driver.
//!
//! Runs a [`GameSession`] on tokio. Commands arrive on a channel; the
//! effects they produce become sleeping tasks that feed callbacks back
//! into the same loop, so the session itself is only ever touched from
//! one task. Each state change is rendered before any notice or computer
//! reply it schedules.

use crate::events::{Command, Effect, Notice, RoundId};
use crate::{GameSession, SessionView};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, info, instrument};

/// Countdown resolution.
const TICK: Duration = Duration::from_secs(1);

/// Output for the presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Session state changed.
    Render(SessionView),
    /// A notice is due.
    Notice(Notice),
}

/// Callbacks delivered by scheduled tasks.
#[derive(Debug, Clone, Copy)]
enum Deferred {
    ComputerTurn(RoundId),
    Tick(RoundId),
    Notice(Notice),
}

/// Owns a session and realises its effects with tokio timers.
pub struct SessionDriver {
    session: GameSession,
    events: mpsc::UnboundedSender<SessionEvent>,
    deferred_tx: mpsc::UnboundedSender<Deferred>,
    deferred_rx: mpsc::UnboundedReceiver<Deferred>,
    timer: Option<JoinHandle<()>>,
}

impl SessionDriver {
    /// Creates a driver sending renders and notices to `events`.
    pub fn new(session: GameSession, events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        let (deferred_tx, deferred_rx) = mpsc::unbounded_channel();
        Self {
            session,
            events,
            deferred_tx,
            deferred_rx,
            timer: None,
        }
    }

    /// Spawns a driver task. Returns the command sender, the event
    /// receiver and the task handle; dropping the sender stops the task.
    pub fn spawn(
        session: GameSession,
    ) -> (
        mpsc::UnboundedSender<Command>,
        mpsc::UnboundedReceiver<SessionEvent>,
        JoinHandle<()>,
    ) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let driver = Self::new(session, event_tx);
        let handle = tokio::spawn(driver.run(command_rx));
        (command_tx, event_rx, handle)
    }

    /// Runs until the command channel closes or the adapter stops
    /// listening.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        info!("Session driver started");
        let initial = self.session.reset_round();
        if self.render().is_ok() {
            self.schedule(initial);
            self.event_loop(&mut commands).await;
        }
        self.cancel_timer();
        info!("Session driver stopped");
    }

    async fn event_loop(&mut self, commands: &mut mpsc::UnboundedReceiver<Command>) {
        loop {
            let effects = tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => {
                        debug!(?command, "Command received");
                        self.session.handle(command)
                    }
                    None => return,
                },
                Some(deferred) = self.deferred_rx.recv() => match deferred {
                    Deferred::ComputerTurn(round) => self.session.on_computer_turn(round),
                    Deferred::Tick(round) => self.session.on_timer_tick(round),
                    Deferred::Notice(notice) => {
                        if self.events.send(SessionEvent::Notice(notice)).is_err() {
                            return;
                        }
                        continue;
                    }
                },
            };

            if self.render().is_err() {
                return;
            }
            self.schedule(effects);
        }
    }

    fn render(&self) -> Result<(), mpsc::error::SendError<SessionEvent>> {
        self.events.send(SessionEvent::Render(self.session.view()))
    }

    fn schedule(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleComputerMove { round, delay } => {
                    self.defer(delay, Deferred::ComputerTurn(round));
                }
                Effect::Notify { notice, delay } => {
                    self.defer(delay, Deferred::Notice(notice));
                }
                Effect::StartTimer { round } => self.start_timer(round),
                Effect::CancelTimer => self.cancel_timer(),
            }
        }
    }

    fn defer(&self, delay: Duration, deferred: Deferred) {
        let tx = self.deferred_tx.clone();
        tokio::spawn(async move {
            sleep(delay).await;
            let _ = tx.send(deferred);
        });
    }

    fn start_timer(&mut self, round: RoundId) {
        self.cancel_timer();
        debug!(%round, "Countdown started");
        let tx = self.deferred_tx.clone();
        self.timer = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + TICK, TICK);
            loop {
                ticks.tick().await;
                if tx.send(Deferred::Tick(round)).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!("Countdown cancelled");
            timer.abort();
        }
    }
}
