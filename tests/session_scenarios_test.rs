//! End-to-end scenarios through the game context.

use noughts_core::{
    Cell, GameContext, IgnoreReason, Lifecycle, Mark, MoveOutcome, Phase, Position, Presenter,
    Seat, Snapshot,
};

/// Everything the context asked the display to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Render(Snapshot),
    Result(String),
    Controls(bool),
    ClearInputs,
    RemoveBoard,
    EnsureBoard,
}

#[derive(Debug, Default)]
struct RecordingPresenter {
    names: [String; 2],
    calls: Vec<Call>,
}

impl RecordingPresenter {
    fn with_names(first: &str, second: &str) -> Self {
        Self {
            names: [first.to_string(), second.to_string()],
            calls: Vec::new(),
        }
    }

    fn last_result(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Result(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn render_board(&mut self, cells: &Snapshot) {
        self.calls.push(Call::Render(*cells));
    }

    fn set_result_message(&mut self, text: &str) {
        self.calls.push(Call::Result(text.to_string()));
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.calls.push(Call::Controls(visible));
    }

    fn read_player_name(&self, seat: Seat) -> String {
        self.names[seat.index()].clone()
    }

    fn clear_player_name_inputs(&mut self) {
        self.names = Default::default();
        self.calls.push(Call::ClearInputs);
    }

    fn remove_board_display(&mut self) {
        self.calls.push(Call::RemoveBoard);
    }

    fn ensure_board_display(&mut self) {
        self.calls.push(Call::EnsureBoard);
    }
}

fn started(first: &str, second: &str) -> (GameContext, RecordingPresenter) {
    let mut context = GameContext::new();
    let mut presenter = RecordingPresenter::with_names(first, second);
    context.start(&mut presenter);
    presenter.calls.clear();
    (context, presenter)
}

fn play(context: &mut GameContext, presenter: &mut RecordingPresenter, index: usize) -> MoveOutcome {
    let pos = Position::try_from(index).expect("valid index");
    context.handle_move(pos, presenter)
}

#[test]
fn test_start_shows_board_and_hides_controls() {
    let mut context = GameContext::new();
    let mut presenter = RecordingPresenter::with_names("Ada", "Grace");
    context.start(&mut presenter);

    assert_eq!(context.lifecycle(), Lifecycle::Playing);
    assert_eq!(
        presenter.calls,
        vec![
            Call::EnsureBoard,
            Call::Controls(false),
            Call::Render(Snapshot::default()),
        ]
    );
}

#[test]
fn test_empty_names_get_defaults_and_marks() {
    let (context, _) = started("", "");
    let [first, second] = context.players().all();
    assert_eq!(first.name(), "Player 1");
    assert_eq!(*first.mark(), Mark::X);
    assert_eq!(second.name(), "Player 2");
    assert_eq!(*second.mark(), Mark::O);
}

#[test]
fn test_second_start_is_ignored() {
    let (mut context, mut presenter) = started("Ada", "Grace");
    presenter.names = ["Linus".into(), "Ken".into()];
    context.start(&mut presenter);
    assert!(presenter.calls.is_empty());
    assert_eq!(context.players().get(Seat::First).name(), "Ada");
}

#[test]
fn test_moves_before_start_are_ignored() {
    let mut context = GameContext::new();
    let mut presenter = RecordingPresenter::default();
    assert_eq!(
        play(&mut context, &mut presenter, 4),
        MoveOutcome::Ignored(IgnoreReason::NotStarted)
    );
    assert!(presenter.calls.is_empty());
    assert_eq!(context.board().marked_count(), 0);
}

#[test]
fn test_top_row_win_then_moves_are_noops() {
    let (mut context, mut presenter) = started("Ada", "Grace");
    for index in [0, 3, 1, 4] {
        play(&mut context, &mut presenter, index);
    }
    assert_eq!(
        play(&mut context, &mut presenter, 2),
        MoveOutcome::Won { winner: Seat::First }
    );
    assert_eq!(presenter.last_result(), Some("Ada win"));
    assert_eq!(presenter.calls.last(), Some(&Call::Controls(false)));
    assert!(matches!(context.session().phase(), Phase::Won { mark: Mark::X, .. }));

    let calls_before = presenter.calls.len();
    let board_before = context.board().snapshot();
    for index in 0..9 {
        assert_eq!(
            play(&mut context, &mut presenter, index),
            MoveOutcome::Ignored(IgnoreReason::GameOver)
        );
    }
    assert_eq!(presenter.calls.len(), calls_before);
    assert_eq!(context.board().snapshot(), board_before);
}

#[test]
fn test_full_board_without_triple_reports_draw() {
    let (mut context, mut presenter) = started("", "");
    // X: 0,1,5,6,8  O: 2,3,4,7
    let outcomes: Vec<_> = [0, 2, 1, 3, 5, 4, 6, 7, 8]
        .into_iter()
        .map(|index| play(&mut context, &mut presenter, index))
        .collect();
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Draw));
    assert_eq!(presenter.last_result(), Some("draw"));
    assert_eq!(context.session().phase(), Phase::Draw);
    assert!(context.session().ended());
}

#[test]
fn test_occupied_cell_leaves_board_and_turn_unchanged() {
    let (mut context, mut presenter) = started("", "");
    play(&mut context, &mut presenter, 4);
    let board = context.board().snapshot();
    let seat = context.session().current();
    presenter.calls.clear();

    assert_eq!(
        play(&mut context, &mut presenter, 4),
        MoveOutcome::Ignored(IgnoreReason::Occupied(Position::Center))
    );
    assert_eq!(context.board().snapshot(), board);
    assert_eq!(context.session().current(), seat);
    assert!(presenter.calls.is_empty());
}

#[test]
fn test_restart_resets_everything() {
    let (mut context, mut presenter) = started("Ada", "Grace");
    for index in [0, 3, 1, 4, 2] {
        play(&mut context, &mut presenter, index);
    }
    presenter.calls.clear();
    context.restart(&mut presenter);

    assert_eq!(
        presenter.calls,
        vec![
            Call::Render(Snapshot::default()),
            Call::Result(String::new()),
            Call::ClearInputs,
            Call::RemoveBoard,
            Call::Controls(true),
        ]
    );
    assert_eq!(context.lifecycle(), Lifecycle::Idle);
    assert_eq!(context.session().current(), Seat::First);
    assert_eq!(context.session().phase(), Phase::AwaitingMove);
    assert!(context.board().cells().iter().all(|cell| *cell == Cell::Empty));
}

#[test]
fn test_restart_twice_matches_restart_once() {
    let (mut context, mut presenter) = started("Ada", "Grace");
    play(&mut context, &mut presenter, 0);

    context.restart(&mut presenter);
    let once = (
        context.board().snapshot(),
        *context.session(),
        context.lifecycle(),
    );
    context.restart(&mut presenter);
    let twice = (
        context.board().snapshot(),
        *context.session(),
        context.lifecycle(),
    );
    assert_eq!(once, twice);
}

#[test]
fn test_new_game_after_restart_uses_new_names() {
    let (mut context, mut presenter) = started("Ada", "Grace");
    context.restart(&mut presenter);
    presenter.names = ["Linus".into(), String::new()];
    context.start(&mut presenter);

    assert_eq!(context.players().get(Seat::First).name(), "Linus");
    assert_eq!(context.players().get(Seat::Second).name(), "Player 2");
    assert!(play(&mut context, &mut presenter, 8).is_accepted());
}

/// Walks every legal game from `context`, checking invariants at each step.
fn explore(context: &GameContext, moves_played: usize, games: &mut usize) {
    let board = context.board().snapshot();
    assert_eq!(board.marked_count(), moves_played);

    if context.session().ended() {
        *games += 1;
        return;
    }

    for pos in Position::ALL {
        let mut next = context.clone();
        let mut presenter = RecordingPresenter::default();
        let expected_mark = context.session().current().mark();
        let outcome = next.handle_move(pos, &mut presenter);

        if board.get(pos) != Cell::Empty {
            assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::Occupied(pos)));
            assert_eq!(next.board().snapshot(), board);
            continue;
        }

        assert!(outcome.is_accepted());
        assert_eq!(next.board().get(pos), Cell::Marked(expected_mark));
        let won = noughts_core::rules::is_win(&next.board().snapshot(), expected_mark);
        match outcome {
            MoveOutcome::Won { .. } => assert!(won),
            MoveOutcome::Draw => {
                assert!(!won);
                assert_eq!(moves_played + 1, 9);
            }
            MoveOutcome::Continue { next: seat } => {
                assert!(!won);
                assert_eq!(seat, context.session().current().next());
            }
            MoveOutcome::Ignored(_) => unreachable!(),
        }
        explore(&next, moves_played + 1, games);
    }
}

#[test]
fn test_every_legal_game_respects_board_invariants() {
    let (context, _) = started("", "");
    let mut games = 0;
    explore(&context, 0, &mut games);
    // Number of distinct tic-tac-toe games (known result).
    assert_eq!(games, 255_168);
}
