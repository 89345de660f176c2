//! The 3x3 tic-tac-toe board.

use serde::Serialize;

use crate::domain::{BoardError, Mark};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Lines checked by [`Board::evaluate`], in priority order:
/// rows, then columns, then diagonals.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
    InProgress,
}

/// Board cells, indexed row-major from the top-left corner.
///
/// A cell only ever goes from empty to a mark; [`Board::reset`] is the only
/// way to clear it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied().flatten()
    }

    /// Place `mark` at `position`.
    pub fn place(&mut self, position: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(BoardError::OutOfRange(position))?;
        if cell.is_some() {
            return Err(BoardError::CellOccupied(position));
        }
        *cell = Some(mark);
        Ok(())
    }

    /// Evaluate the board. The first matching line wins (rows, columns, diagonals).
    pub fn evaluate(&self) -> Outcome {
        if let Some(mark) = self.winning_line().and_then(|[a, _, _]| self.cells[a]) {
            return Outcome::Win(mark);
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// First line holding three identical marks, in evaluation order.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.into_iter().find(|&[a, b, c]| {
            self.cells[a].is_some()
                && self.cells[a] == self.cells[b]
                && self.cells[a] == self.cells[c]
        })
    }

    /// Mark whose turn it is. X always opens.
    pub fn next_mark(&self) -> Mark {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        if x_count > o_count { Mark::O } else { Mark::X }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }
}
