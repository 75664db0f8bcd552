//! Turn and phase tracking for one game.

use crate::{Mark, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Phase of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current seat to move.
    #[default]
    AwaitingMove,
    /// A triple was completed.
    Won {
        /// Seat that completed the triple.
        winner: Seat,
        /// Mark of the winning seat.
        mark: Mark,
    },
    /// The board filled up without a triple.
    Draw,
}

impl Phase {
    /// Terminal phases accept no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::AwaitingMove)
    }
}

/// Current seat and phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Session {
    /// Seat whose turn it is.
    #[getter(copy)]
    current: Seat,
    /// Where the state machine is.
    #[getter(copy)]
    phase: Phase,
}

impl Session {
    /// Creates a session at the first seat, awaiting a move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the game has reached a terminal phase.
    pub fn ended(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Hands the turn to the other seat.
    pub(crate) fn advance_turn(&mut self) {
        self.current = self.current.next();
    }

    /// Enters a new phase.
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Back to the initial state.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}
