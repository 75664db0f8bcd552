//! Display collaborator interface.

use crate::{BoardDisplay, GameEvent, Seat, Snapshot};
use tracing::{instrument, trace};

/// The presentation layer the game talks to.
///
/// Implemented by each front end (terminal UI, console, test recorders).
pub trait Presenter {
    /// Paints the current board.
    fn render_board(&mut self, cells: &Snapshot);

    /// Shows the result text; an empty string clears it.
    fn set_result_message(&mut self, text: &str);

    /// Shows or hides the start/restart affordances.
    fn set_controls_visible(&mut self, visible: bool);

    /// Reads the raw name input for a seat.
    fn read_player_name(&self, seat: Seat) -> String;

    /// Empties both name inputs.
    fn clear_player_name_inputs(&mut self);

    /// Removes the board container.
    fn remove_board_display(&mut self);

    /// Creates the board container if it does not exist yet.
    fn ensure_board_display(&mut self);
}

/// Dispatches events to a presenter, in order.
#[instrument(skip_all, fields(count = events.len()))]
pub fn apply<P: Presenter + ?Sized>(presenter: &mut P, events: &[GameEvent]) {
    for event in events {
        trace!(?event, "Presenting event");
        match event {
            GameEvent::BoardChanged(snapshot) => presenter.render_board(snapshot),
            GameEvent::ResultMessage(text) => presenter.set_result_message(text),
            GameEvent::ControlsVisible(visible) => presenter.set_controls_visible(*visible),
            GameEvent::BoardDisplay(BoardDisplay::Shown) => presenter.ensure_board_display(),
            GameEvent::BoardDisplay(BoardDisplay::Removed) => presenter.remove_board_display(),
            GameEvent::PlayerInputsCleared => presenter.clear_player_name_inputs(),
        }
    }
}
