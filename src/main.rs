//! Noughts - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{AppConfig, ConsolePresenter, logging};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?.with_log_file(cli.log_file);

    match cli.command.unwrap_or(Command::Play {
        player1: None,
        player2: None,
    }) {
        Command::Play { player1, player2 } => run_play(config.with_player_names(player1, player2)),
        Command::Replay {
            moves,
            player1,
            player2,
            json,
        } => run_replay(config.with_player_names(player1, player2), &moves, json),
    }
}

fn player_names(config: &AppConfig) -> [String; 2] {
    [
        config.player_one().clone().unwrap_or_default(),
        config.player_two().clone().unwrap_or_default(),
    ]
}

/// Run the terminal UI
fn run_play(config: AppConfig) -> Result<()> {
    logging::init_file(config.log_file(), config.log_filter())?;
    info!(log_file = %config.log_file().display(), "Starting noughts");
    noughts::tui::run_tui(player_names(&config))
}

/// Replay moves headlessly
#[instrument(skip(config))]
fn run_replay(config: AppConfig, moves: &str, json: bool) -> Result<()> {
    logging::init_stderr(config.log_filter());

    let indices = noughts::parse_moves(moves).context("Moves must be numbers 0-8")?;
    info!(count = indices.len(), "Replaying moves");

    if json {
        let mut presenter = ConsolePresenter::new(std::io::sink(), player_names(&config));
        let summary = noughts::replay(&indices, &mut presenter)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let mut presenter = ConsolePresenter::new(std::io::stdout().lock(), player_names(&config));
        noughts::replay(&indices, &mut presenter)?;
        presenter.finish().context("Failed to write to stdout")?;
    }

    Ok(())
}
