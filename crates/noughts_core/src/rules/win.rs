//! Win detection logic for tic-tac-toe.

use crate::{Cell, Mark, Position, Snapshot};
use tracing::instrument;

/// The eight winning triples: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` fills any of the eight triples.
#[instrument(skip(board))]
pub fn is_win(board: &Snapshot, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Cell::Marked(mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first completed triple, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Snapshot) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| is_win(board, mark))
}
