//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;
use threemark::{Difficulty, Mode, Theme};

/// Three-mark tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "threemark")]
#[command(about = "Tic-tac-toe where each player keeps at most three marks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session config file (TOML). Flags below override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Play mode: two-player or vs-computer
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Computer difficulty: random, bounded or optimal
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Countdown per round in minutes (0 disables)
    #[arg(long)]
    pub timer: Option<u32>,

    /// Theme: light or dark
    #[arg(long)]
    pub theme: Option<Theme>,

    /// RNG seed for reproducible evictions and random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit renders and notices as JSON lines instead of a drawn board
    #[arg(long)]
    pub json: bool,

    /// Where tracing output goes
    #[arg(long, default_value = "threemark.log")]
    pub log_file: PathBuf,
}
