//! Terminal application state and key handling.

use crossterm::event::KeyCode;
use noughts_core::{GameContext, Position, Presenter, Seat, Snapshot};
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};

/// Main application state.
///
/// Doubles as the presenter: the game context pushes board, result and
/// visibility changes into it, and the renderer reads them back.
#[derive(Debug)]
pub struct App {
    names: [String; 2],
    focus: Seat,
    board_shown: bool,
    cells: Snapshot,
    cursor: Position,
    result: String,
    controls_visible: bool,
    should_quit: bool,
}

impl App {
    /// Creates the app on the name entry screen.
    pub fn new(names: [String; 2]) -> Self {
        Self {
            names,
            focus: Seat::First,
            board_shown: false,
            cells: Snapshot::default(),
            cursor: Position::Center,
            result: String::new(),
            controls_visible: true,
            should_quit: false,
        }
    }

    /// Name input contents, in seat order.
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Name input with keyboard focus.
    pub fn focus(&self) -> Seat {
        self.focus
    }

    /// Whether the board is on screen.
    pub fn board_shown(&self) -> bool {
        self.board_shown
    }

    /// Last rendered board.
    pub fn cells(&self) -> &Snapshot {
        &self.cells
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Result text ("" when none).
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Whether the start controls are shown.
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self, context))]
    pub fn handle_key(&mut self, key: KeyCode, context: &mut GameContext) {
        if self.board_shown {
            self.handle_board_key(key, context);
        } else {
            self.handle_setup_key(key, context);
        }
    }

    fn handle_setup_key(&mut self, key: KeyCode, context: &mut GameContext) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.next();
            }
            KeyCode::Enter if self.controls_visible => context.start(self),
            KeyCode::Backspace => {
                self.names[self.focus.index()].pop();
            }
            KeyCode::Char(c) => self.names[self.focus.index()].push(c),
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyCode, context: &mut GameContext) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => context.restart(self),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let outcome = context.handle_move(self.cursor, self);
                debug!(?outcome, "Move dispatched");
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    let outcome = context.handle_move(pos, self);
                    debug!(?outcome, "Move dispatched");
                }
            }
        }
    }
}

impl Presenter for App {
    fn render_board(&mut self, cells: &Snapshot) {
        self.cells = *cells;
    }

    fn set_result_message(&mut self, text: &str) {
        self.result = text.to_string();
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn read_player_name(&self, seat: Seat) -> String {
        self.names[seat.index()].clone()
    }

    fn clear_player_name_inputs(&mut self) {
        self.names = Default::default();
        self.focus = Seat::First;
    }

    fn remove_board_display(&mut self) {
        self.board_shown = false;
    }

    fn ensure_board_display(&mut self) {
        if !self.board_shown {
            self.board_shown = true;
            self.cursor = Position::Center;
        }
    }
}
