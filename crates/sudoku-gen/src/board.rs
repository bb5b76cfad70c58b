//! Play-grid state and mistake checking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, Position};
use crate::error::RuleError;
use crate::generator::SudokuPuzzle;

/// State of one play-grid cell. This is the single canonical cell
/// representation; front ends convert at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    /// Current value, 0 when empty.
    pub value: usize,
    /// The cell's value in the solved grid, 0 when unknown.
    pub solution: usize,
    /// Whether the cell is a given, fixed at creation.
    pub is_locked: bool,
    /// Whether the mistake checker flagged this cell.
    pub is_error: bool,
}

impl CellState {
    fn empty() -> Self {
        Self {
            value: 0,
            solution: 0,
            is_locked: false,
            is_error: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// How player moves are checked for mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MistakeCheckingPolicy {
    /// Never flag anything.
    NoChecking,
    /// Flag values that break a row, column, or box uniqueness rule.
    CheckViolations,
    /// Flag values that differ from the stored solution.
    CheckAgainstSolution,
}

/// A play grid of cell states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimension: Dimension,
    cells: Vec<CellState>,
}

impl Board {
    /// Empty board: no givens, no attached solution.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            dimension,
            cells: vec![CellState::empty(); dimension.total_cells()],
        }
    }

    /// Derive the play grid from an assembled puzzle: zero-fill, overlay
    /// the givens as locked cells, attach the per-cell solution.
    pub fn from_puzzle(puzzle: &SudokuPuzzle) -> Self {
        let mut board = Self::empty(puzzle.dimension);
        let n = puzzle.dimension.unique_digits();
        for (i, cell) in board.cells.iter_mut().enumerate() {
            cell.solution = puzzle.solution_grid[i / n][i % n];
        }
        for given in &puzzle.givens {
            let index = puzzle.dimension.cell_index(given.pos);
            board.cells[index].value = given.value;
            board.cells[index].is_locked = true;
        }
        board
    }

    /// Board over raw values; non-zero cells become locked givens. Returns
    /// `None` when the value count or a value is out of range.
    pub fn from_values(dimension: Dimension, values: &[usize]) -> Option<Self> {
        if values.len() != dimension.total_cells() {
            return None;
        }
        if values.iter().any(|&v| v > dimension.unique_digits()) {
            return None;
        }
        let mut board = Self::empty(dimension);
        for (cell, &value) in board.cells.iter_mut().zip(values) {
            cell.value = value;
            cell.is_locked = value != 0;
        }
        Some(board)
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[self.dimension.cell_index(pos)]
    }

    /// Set a non-locked cell's value (0 clears it). Returns false and does
    /// nothing for locked cells.
    pub fn set_value(&mut self, pos: Position, value: usize) -> bool {
        let index = self.dimension.cell_index(pos);
        if self.cells[index].is_locked {
            return false;
        }
        self.cells[index].value = value;
        true
    }

    /// True when every cell holds a value.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// True when complete and equal to the attached solution.
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.cells.iter().all(|c| c.value == c.solution)
    }

    /// Positions of all empty cells, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let n = self.dimension.unique_digits();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Position::new(i / n, i % n))
            .collect()
    }

    /// Values of all cells, in row-major order.
    pub fn values(&self) -> Vec<usize> {
        self.cells.iter().map(|c| c.value).collect()
    }

    /// Check the grid for mistakes under `policy`, returning the flagged
    /// copy. The receiver is never mutated. Locked cells and empty cells
    /// are never flagged.
    pub fn check_mistakes(&self, policy: MistakeCheckingPolicy) -> Board {
        let mut checked = self.clone();
        match policy {
            MistakeCheckingPolicy::NoChecking => {
                for cell in &mut checked.cells {
                    if !cell.is_locked {
                        cell.is_error = false;
                    }
                }
            }
            MistakeCheckingPolicy::CheckViolations => {
                let n = self.dimension.unique_digits();
                for index in 0..checked.cells.len() {
                    let cell = checked.cells[index];
                    if cell.is_locked {
                        continue;
                    }
                    let pos = Position::new(index / n, index % n);
                    checked.cells[index].is_error =
                        !cell.is_empty() && self.has_conflict(pos, cell.value);
                }
            }
            MistakeCheckingPolicy::CheckAgainstSolution => {
                for cell in &mut checked.cells {
                    if !cell.is_locked {
                        cell.is_error = !cell.is_empty() && cell.value != cell.solution;
                    }
                }
            }
        }
        checked
    }

    /// Would `value` at `pos` break a row, column, or box uniqueness rule?
    ///
    /// `value` must be in 1..=N and `pos` on the grid; anything else is a
    /// caller bug and fails fast. The cell's own coordinates are excluded
    /// from all three scans, so a placed value never conflicts with itself.
    pub fn value_violates_rules(&self, pos: Position, value: usize) -> Result<bool, RuleError> {
        let n = self.dimension.unique_digits();
        if value == 0 || value > n {
            return Err(RuleError::InvalidDigit { value, max: n });
        }
        if !self.dimension.contains(pos) {
            return Err(RuleError::OutOfBounds { pos, side: n });
        }
        Ok(self.has_conflict(pos, value))
    }

    /// Row, column, and box duplicate scan, excluding `pos` itself.
    pub(crate) fn has_conflict(&self, pos: Position, value: usize) -> bool {
        let n = self.dimension.unique_digits();
        for col in 0..n {
            if col != pos.col && self.cell(Position::new(pos.row, col)).value == value {
                return true;
            }
        }
        for row in 0..n {
            if row != pos.row && self.cell(Position::new(row, pos.col)).value == value {
                return true;
            }
        }
        let origin = self.dimension.box_origin(pos);
        for row in origin.row..origin.row + self.dimension.box_height() {
            for col in origin.col..origin.col + self.dimension.box_width() {
                if (row, col) != (pos.row, pos.col)
                    && self.cell(Position::new(row, col)).value == value
                {
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension.unique_digits();
        let width = n.to_string().len();
        for row in 0..n {
            if row > 0 && row % self.dimension.box_height() == 0 {
                for stack in 0..self.dimension.stack_count() {
                    if stack > 0 {
                        write!(f, "-+")?;
                    }
                    let dashes = (width + 1) * self.dimension.box_width();
                    write!(f, "{}", "-".repeat(dashes))?;
                }
                writeln!(f)?;
            }
            for col in 0..n {
                if col > 0 && col % self.dimension.box_width() == 0 {
                    write!(f, " |")?;
                }
                let cell = self.cell(Position::new(row, col));
                if cell.is_empty() {
                    write!(f, " {:>width$}", ".")?;
                } else {
                    write!(f, " {:>width$}", cell.value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
