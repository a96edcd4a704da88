//! Threemark - terminal front end
//!
//! Reads commands from stdin, forwards them to a session driver and prints
//! each render and notice it produces.

#![warn(missing_docs)]

mod cli;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use input::Input;
use std::path::Path;
use threemark::{GameSession, SessionConfig, SessionDriver, SessionEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let config = load_config(&cli)?;
    info!(?config, "Starting threemark");

    let (commands, mut events, handle) = SessionDriver::spawn(GameSession::new(config));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    if !cli.json {
        println!("{}", input::HELP);
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                match input::parse_line(&line) {
                    Ok(Input::Command(command)) => {
                        if commands.send(command).is_err() {
                            warn!("Session driver is gone");
                            break;
                        }
                    }
                    Ok(Input::Help) => println!("{}", input::HELP),
                    Ok(Input::Quit) => break,
                    Err(e) => println!("{:#}", e),
                }
            }
            event = events.recv() => match event {
                Some(event) => print_event(&event, cli.json)?,
                None => break,
            },
        }
    }

    drop(commands);
    handle.await.context("Session driver panicked")?;
    info!("Goodbye");
    Ok(())
}

fn print_event(event: &SessionEvent, json: bool) -> Result<()> {
    match (event, json) {
        (SessionEvent::Render(view), true) => {
            println!("{}", serde_json::to_string(view)?);
        }
        (SessionEvent::Notice(notice), true) => {
            let line = serde_json::json!({ "notice": notice, "message": notice.to_string() });
            println!("{}", line);
        }
        (SessionEvent::Render(view), false) => print!("{}", render::render_view(view)),
        (SessionEvent::Notice(notice), false) => println!("{}", render::render_notice(*notice)),
    }
    Ok(())
}

/// Builds the session config from the optional file and flag overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config = config.with_mode(mode);
    }
    if let Some(difficulty) = cli.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(minutes) = cli.timer {
        config = config.with_timer_minutes(minutes);
    }
    if let Some(theme) = cli.theme {
        config = config.with_theme(theme);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Logs go to a file so they never interleave with the board.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,threemark=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
