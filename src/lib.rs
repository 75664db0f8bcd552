//! Noughts - hot-seat tic-tac-toe
//!
//! Front ends for the game logic in [`noughts_core`].
//!
//! # Architecture
//!
//! - **Config**: TOML settings with name defaults and logging options
//! - **Console**: plain-text presenter used by `replay`
//! - **TUI**: ratatui front end, the default `play` mode

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use console::ConsolePresenter;
pub use replay::{MoveRecord, ReplaySummary, parse_moves, replay};
