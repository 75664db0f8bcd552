//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: nine cells with get/set/reset/snapshot
//! - **Players**: the two named players and their marks
//! - **Controller**: turn order, move validation, win/draw transitions
//! - **Context**: the one application-owned game, with `start`/`restart`
//!
//! Mutations return [`GameEvent`]s instead of drawing anything; a
//! [`Presenter`] implementation decides how to show them.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, GameController, MoveOutcome, PlayerRegistry, Position, Seat};
//!
//! let mut board = Board::new();
//! let mut players = PlayerRegistry::new();
//! players.create("Ada", "");
//! let mut controller = GameController::new();
//!
//! let report = controller.handle_move(&mut board, &players, Position::Center);
//! assert_eq!(report.outcome(), MoveOutcome::Continue { next: Seat::Second });
//! assert_eq!(players.get(Seat::Second).name(), "Player 2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod context;
mod controller;
mod error;
mod event;
mod players;
mod position;
pub mod presenter;
pub mod rules;
mod session;
mod types;

pub use board::{Board, Snapshot};
pub use context::{GameContext, Lifecycle};
pub use controller::{DRAW_MESSAGE, GameController, IgnoreReason, MoveOutcome, MoveReport};
pub use error::PositionError;
pub use event::{BoardDisplay, GameEvent};
pub use players::{Player, PlayerRegistry};
pub use position::Position;
pub use presenter::Presenter;
pub use session::{Phase, Session};
pub use types::{Cell, Mark, Seat};
