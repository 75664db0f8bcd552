//! Change descriptions emitted by game state mutations.
//!
//! Mutations never touch the display directly. They return a list of
//! [`GameEvent`]s; the presentation layer decides how to show them.

use crate::Snapshot;
use serde::{Deserialize, Serialize};

/// Whether the board display should exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardDisplay {
    /// Create the board display if it is missing.
    Shown,
    /// Tear the board display down.
    Removed,
}

/// Something the presentation layer should reflect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board changed; repaint all nine cells.
    BoardChanged(Snapshot),
    /// New result text. An empty string clears it.
    ResultMessage(String),
    /// Show or hide the start/restart controls.
    ControlsVisible(bool),
    /// Create or remove the board display.
    BoardDisplay(BoardDisplay),
    /// Both player name inputs should be emptied.
    PlayerInputsCleared,
}

impl GameEvent {
    /// Result message event.
    pub fn result(text: impl Into<String>) -> Self {
        GameEvent::ResultMessage(text.into())
    }
}
