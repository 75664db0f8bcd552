//! Application-owned game context.
//!
//! One [`GameContext`] holds everything a single game needs: the board, the
//! player registry and the controller. Front ends create exactly one and pass
//! it by reference to whatever handles input.

use crate::presenter::{Presenter, apply};
use crate::{
    Board, BoardDisplay, GameController, GameEvent, IgnoreReason, MoveOutcome, PlayerRegistry,
    Position, Seat, Session,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whether a game is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Name entry; no board is displayed.
    #[default]
    Idle,
    /// Players are set and the board is displayed.
    Playing,
}

/// Owns the board, players and controller of the one running game.
#[derive(Debug, Clone, Default)]
pub struct GameContext {
    board: Board,
    players: PlayerRegistry,
    controller: GameController,
    lifecycle: Lifecycle,
}

impl GameContext {
    /// Creates an idle context with an empty board and default players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player registry.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Current seat and phase.
    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    /// Whether a game is on screen.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The "start" action.
    ///
    /// Reads both names, creates the players and shows the board. Does nothing
    /// if a game is already on screen.
    #[instrument(skip_all, fields(lifecycle = ?self.lifecycle))]
    pub fn start<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        if self.lifecycle == Lifecycle::Playing {
            debug!("Start ignored, game already displayed");
            return;
        }

        let names = Seat::ALL.map(|seat| presenter.read_player_name(seat));
        self.players.create(&names[0], &names[1]);
        self.lifecycle = Lifecycle::Playing;
        info!("Game started");

        apply(
            presenter,
            &[
                GameEvent::BoardDisplay(BoardDisplay::Shown),
                GameEvent::ControlsVisible(false),
                GameEvent::BoardChanged(self.board.snapshot()),
            ],
        );
    }

    /// Single dispatch entry point for a click on a board square.
    #[instrument(skip(self, presenter))]
    pub fn handle_move<P: Presenter + ?Sized>(
        &mut self,
        pos: Position,
        presenter: &mut P,
    ) -> MoveOutcome {
        if self.lifecycle == Lifecycle::Idle {
            debug!("Move before start ignored");
            return MoveOutcome::Ignored(IgnoreReason::NotStarted);
        }

        let (outcome, events) = self
            .controller
            .handle_move(&mut self.board, &self.players, pos)
            .dissolve();
        apply(presenter, &events);
        outcome
    }

    /// The "restart" action.
    ///
    /// Resets the game, clears the name inputs, removes the board and shows
    /// the start controls again. Callable at any time.
    #[instrument(skip_all, fields(lifecycle = ?self.lifecycle))]
    pub fn restart<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        let mut events = self.controller.reset_game(&mut self.board);
        events.extend([
            GameEvent::PlayerInputsCleared,
            GameEvent::BoardDisplay(BoardDisplay::Removed),
            GameEvent::ControlsVisible(true),
        ]);
        self.lifecycle = Lifecycle::Idle;
        info!("Game restarted");

        apply(presenter, &events);
    }
}
