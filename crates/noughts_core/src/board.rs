//! Board state: nine cells in row-major order.

use crate::{Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Immutable copy of all nine cells, in board order.
///
/// Returned by every board mutation as the render notification for the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    cells: [Cell; 9],
}

impl Snapshot {
    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns all cells as an array.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates positions with their cells, in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.iter().map(|&pos| (pos, self.get(pos)))
    }

    /// Number of cells holding a mark.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl std::fmt::Display for Snapshot {
    /// Renders rows as `X|O|3`, empty squares showing their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Marked(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Places a mark at the given position, overwriting the cell.
    ///
    /// Callers are responsible for checking that the cell is empty; the
    /// controller never overwrites a marked cell.
    #[instrument(skip(self))]
    pub fn set(&mut self, pos: Position, mark: Mark) -> Snapshot {
        self.cells[pos.index()] = Cell::Marked(mark);
        debug!(marked = self.marked_count(), "Board updated");
        self.snapshot()
    }

    /// Clears all nine cells.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        self.cells = [Cell::Empty; 9];
        debug!("Board reset");
        self.snapshot()
    }

    /// Returns an immutable copy of the cells.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { cells: self.cells }
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Number of cells holding a mark.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.snapshot(), f)
    }
}
