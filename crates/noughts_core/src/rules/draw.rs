//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Snapshot;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Snapshot) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Snapshot) -> bool {
    is_full(board) && check_winner(board).is_none()
}
