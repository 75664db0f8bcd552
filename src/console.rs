//! Line-oriented presenter for headless play.

use noughts_core::{Presenter, Seat, Snapshot};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Presenter that writes boards and results as plain text.
///
/// Write failures are remembered and reported by [`ConsolePresenter::finish`],
/// since presenter callbacks cannot fail.
#[derive(Debug)]
pub struct ConsolePresenter<W: Write> {
    out: W,
    names: [String; 2],
    board_shown: bool,
    controls_visible: bool,
    result: String,
    error: Option<io::Error>,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter whose name inputs hold `names`.
    pub fn new(out: W, names: [String; 2]) -> Self {
        Self {
            out,
            names,
            board_shown: false,
            controls_visible: true,
            result: String::new(),
            error: None,
        }
    }

    /// The last result message shown.
    pub fn result_message(&self) -> &str {
        &self.result
    }

    /// Whether the start/restart controls are visible.
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Whether the board display exists.
    pub fn board_shown(&self) -> bool {
        self.board_shown
    }

    /// Returns the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write(&mut self, text: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(text) {
            warn!(error = %err, "Console write failed");
            self.error = Some(err);
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_board(&mut self, cells: &Snapshot) {
        if !self.board_shown {
            debug!("No board display, skipping render");
            return;
        }
        self.write(format_args!("{}\n\n", cells));
    }

    fn set_result_message(&mut self, text: &str) {
        self.result = text.to_string();
        if !text.is_empty() {
            self.write(format_args!("Result: {}\n", text));
        }
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn read_player_name(&self, seat: Seat) -> String {
        self.names[seat.index()].clone()
    }

    fn clear_player_name_inputs(&mut self) {
        self.names = Default::default();
    }

    fn remove_board_display(&mut self) {
        self.board_shown = false;
    }

    fn ensure_board_display(&mut self) {
        self.board_shown = true;
    }
}
