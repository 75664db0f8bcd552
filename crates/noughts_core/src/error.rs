//! Error types for the game core.

use derive_more::{Display, Error};
use tracing::instrument;

/// A board index outside 0-8, with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Position {} out of bounds (must be 0-8) at {}:{}", index, file, line)]
pub struct PositionError {
    /// The rejected index.
    pub index: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new position error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(index: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
