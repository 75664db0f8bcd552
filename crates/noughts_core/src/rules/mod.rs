//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Snapshot`](crate::Snapshot). Rules are kept apart
//! from board storage so the controller and tests can evaluate any position.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, is_win};
