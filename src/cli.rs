//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Noughts - hot-seat tic-tac-toe for two players
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the log file used by the terminal UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Pre-filled name for player 1 (X)
        #[arg(long)]
        player1: Option<String>,

        /// Pre-filled name for player 2 (O)
        #[arg(long)]
        player2: Option<String>,
    },

    /// Replay a list of moves without the UI and print the result
    Replay {
        /// Board indices 0-8, comma separated (e.g. "0,3,1,4,2")
        #[arg(short, long)]
        moves: String,

        /// Name for player 1 (X)
        #[arg(long)]
        player1: Option<String>,

        /// Name for player 2 (O)
        #[arg(long)]
        player2: Option<String>,

        /// Print a JSON summary instead of boards
        #[arg(long)]
        json: bool,
    },
}
