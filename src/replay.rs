//! Headless replay of a move list.

use crate::console::ConsolePresenter;
use noughts_core::{GameContext, MoveOutcome, Phase, Player, Position, PositionError, Snapshot};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// One dispatched move and what it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// Board index as given on the command line.
    pub index: usize,
    /// Controller verdict.
    pub outcome: MoveOutcome,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// The nine cells.
    pub board: Snapshot,
    /// Both players, in seat order.
    pub players: [Player; 2],
    /// Final phase.
    pub phase: Phase,
    /// Last result message shown ("" if none).
    pub result: String,
    /// Per-move outcomes, in input order.
    pub moves: Vec<MoveRecord>,
}

/// Parses a comma- or space-separated list of board indices.
pub fn parse_moves(input: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Starts a game on `presenter` and dispatches every index in order.
///
/// All indices are validated before the game starts, so an out-of-range
/// index produces no output.
#[instrument(skip(presenter))]
pub fn replay<W: Write>(
    indices: &[usize],
    presenter: &mut ConsolePresenter<W>,
) -> Result<ReplaySummary, PositionError> {
    let positions = indices
        .iter()
        .map(|&index| Position::try_from(index))
        .collect::<Result<Vec<_>, _>>()?;

    let mut context = GameContext::new();
    context.start(presenter);

    let moves = indices
        .iter()
        .zip(positions)
        .map(|(&index, pos)| MoveRecord {
            index,
            outcome: context.handle_move(pos, presenter),
        })
        .collect::<Vec<_>>();

    let summary = ReplaySummary {
        board: context.board().snapshot(),
        players: context.players().all(),
        phase: context.session().phase(),
        result: presenter.result_message().to_string(),
        moves,
    };
    info!(phase = ?summary.phase, "Replay finished");
    Ok(summary)
}
