//! Game controller: validates moves and drives the phase state machine.

use crate::rules::{is_full, is_win};
use crate::{Board, GameEvent, Mark, Phase, PlayerRegistry, Position, Seat, Session};
use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result message shown when the board fills without a triple.
pub const DRAW_MESSAGE: &str = "draw";

/// Why a move was dropped.
///
/// Every reason has the same visible effect (nothing happens); the reason is
/// kept for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The targeted cell already holds a mark.
    #[display("square {} is already occupied", _0)]
    Occupied(Position),
    /// The game is already won or drawn.
    #[display("game is already over")]
    GameOver,
    /// No game has been started yet.
    #[display("game has not started")]
    NotStarted,
}

/// What a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was dropped; board and turn are unchanged.
    Ignored(IgnoreReason),
    /// The move was placed and play passes to `next`.
    Continue {
        /// Seat that moves next.
        next: Seat,
    },
    /// The move completed a triple.
    Won {
        /// Seat that won.
        winner: Seat,
    },
    /// The move filled the board without a triple.
    Draw,
}

impl MoveOutcome {
    /// Whether the move changed the board.
    pub fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// Outcome of a move together with the events it produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct MoveReport {
    /// What happened.
    #[getter(copy)]
    outcome: MoveOutcome,
    /// Events for the presentation layer, in emission order.
    events: Vec<GameEvent>,
}

impl MoveReport {
    fn ignored(reason: IgnoreReason) -> Self {
        Self {
            outcome: MoveOutcome::Ignored(reason),
            events: Vec::new(),
        }
    }
}

/// Owns the turn and phase of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameController {
    session: Session,
}

impl GameController {
    /// Creates a controller at the first seat, awaiting a move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Plays the current seat's mark at `pos`.
    ///
    /// Occupied cells and moves after the game has ended are ignored without
    /// error: the report says why, and nothing else changes.
    #[instrument(skip(self, board, players), fields(seat = ?self.session.current()))]
    pub fn handle_move(
        &mut self,
        board: &mut Board,
        players: &PlayerRegistry,
        pos: Position,
    ) -> MoveReport {
        if self.session.ended() {
            debug!(phase = ?self.session.phase(), "Move after game over ignored");
            return MoveReport::ignored(IgnoreReason::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Move on occupied square ignored");
            return MoveReport::ignored(IgnoreReason::Occupied(pos));
        }

        let seat = self.session.current();
        let player = players.get(seat);
        let mark: Mark = *player.mark();
        let snapshot = board.set(pos, mark);
        let mut events = vec![GameEvent::BoardChanged(snapshot)];

        let outcome = if is_win(&snapshot, mark) {
            info!(winner = %player.name(), %mark, "Game won");
            events.push(GameEvent::result(format!("{} win", player.name())));
            events.push(GameEvent::ControlsVisible(false));
            self.session.set_phase(Phase::Won { winner: seat, mark });
            MoveOutcome::Won { winner: seat }
        } else if is_full(&snapshot) {
            info!("Game drawn");
            events.push(GameEvent::result(DRAW_MESSAGE));
            self.session.set_phase(Phase::Draw);
            MoveOutcome::Draw
        } else {
            self.session.advance_turn();
            debug!(next = ?self.session.current(), "Turn passed");
            MoveOutcome::Continue {
                next: self.session.current(),
            }
        };

        MoveReport { outcome, events }
    }

    /// Clears the board and result, and returns to the first seat.
    ///
    /// Callable from any phase.
    #[instrument(skip_all)]
    pub fn reset_game(&mut self, board: &mut Board) -> Vec<GameEvent> {
        let snapshot = board.reset();
        self.session.reset();
        info!("Game reset");
        vec![GameEvent::BoardChanged(snapshot), GameEvent::result("")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    struct Table {
        board: Board,
        players: PlayerRegistry,
        controller: GameController,
    }

    impl Table {
        fn new() -> Self {
            let mut players = PlayerRegistry::new();
            players.create("Ada", "Grace");
            Self {
                board: Board::new(),
                players,
                controller: GameController::new(),
            }
        }

        fn play(&mut self, index: usize) -> MoveReport {
            let pos = Position::from_index(index).unwrap();
            self.controller
                .handle_move(&mut self.board, &self.players, pos)
        }
    }

    #[test]
    fn test_first_move_places_x_and_passes_turn() {
        let mut table = Table::new();
        let report = table.play(4);
        assert_eq!(report.outcome(), MoveOutcome::Continue { next: Seat::Second });
        assert_eq!(table.board.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(report.events().len(), 1);
        assert!(matches!(report.events()[0], GameEvent::BoardChanged(_)));
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut table = Table::new();
        table.play(4);
        let before = table.board.snapshot();
        let report = table.play(4);
        assert_eq!(
            report.outcome(),
            MoveOutcome::Ignored(IgnoreReason::Occupied(Position::Center))
        );
        assert!(report.events().is_empty());
        assert_eq!(table.board.snapshot(), before);
        assert_eq!(table.controller.session().current(), Seat::Second);
    }

    #[test]
    fn test_top_row_win() {
        let mut table = Table::new();
        for index in [0, 3, 1, 4] {
            assert!(table.play(index).outcome().is_accepted());
        }
        let report = table.play(2);
        assert_eq!(report.outcome(), MoveOutcome::Won { winner: Seat::First });
        assert_eq!(
            report.events()[1..],
            [GameEvent::result("Ada win"), GameEvent::ControlsVisible(false)]
        );
        assert_eq!(
            table.controller.session().phase(),
            Phase::Won {
                winner: Seat::First,
                mark: Mark::X
            }
        );
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut table = Table::new();
        for index in [0, 3, 1, 4, 2] {
            table.play(index);
        }
        let before = table.board.snapshot();
        let report = table.play(8);
        assert_eq!(report.outcome(), MoveOutcome::Ignored(IgnoreReason::GameOver));
        assert_eq!(table.board.snapshot(), before);
        assert_eq!(table.controller.session().current(), Seat::First);
    }

    #[test]
    fn test_second_seat_can_win() {
        let mut table = Table::new();
        for index in [0, 2, 1, 4, 8] {
            table.play(index);
        }
        let report = table.play(6);
        assert_eq!(report.outcome(), MoveOutcome::Won { winner: Seat::Second });
        assert!(report.events().contains(&GameEvent::result("Grace win")));
    }

    #[test]
    fn test_full_board_without_triple_is_draw() {
        let mut table = Table::new();
        // X: 0,1,5,6,8  O: 2,3,4,7
        let moves = [0, 2, 1, 3, 5, 4, 6, 7, 8];
        for &index in &moves[..8] {
            assert!(matches!(
                table.play(index).outcome(),
                MoveOutcome::Continue { .. }
            ));
        }
        let report = table.play(moves[8]);
        assert_eq!(report.outcome(), MoveOutcome::Draw);
        assert_eq!(report.events().last(), Some(&GameEvent::result(DRAW_MESSAGE)));
        assert_eq!(table.controller.session().phase(), Phase::Draw);
    }

    #[test]
    fn test_win_on_last_square_is_not_a_draw() {
        let mut table = Table::new();
        // X completes the 0-3-6 column with the ninth move.
        for index in [0, 1, 2, 4, 3, 5, 7, 8] {
            table.play(index);
        }
        let report = table.play(6);
        assert_eq!(report.outcome(), MoveOutcome::Won { winner: Seat::First });
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut table = Table::new();
        for index in [0, 3, 1, 4, 2] {
            table.play(index);
        }
        let events = table.controller.reset_game(&mut table.board);
        assert_eq!(events[1], GameEvent::result(""));
        assert_eq!(*table.controller.session(), Session::new());
        assert_eq!(table.board.marked_count(), 0);
        assert!(table.play(0).outcome().is_accepted());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut table = Table::new();
        table.play(4);
        let first = table.controller.reset_game(&mut table.board);
        let state = (table.controller.clone(), table.board.clone());
        let second = table.controller.reset_game(&mut table.board);
        assert_eq!(first, second);
        assert_eq!(state, (table.controller.clone(), table.board.clone()));
    }
}
