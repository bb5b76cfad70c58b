//! Grid geometry: box dimensions and cell positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DimensionError;

/// Box geometry of a Sudoku grid.
///
/// A grid is defined by the width and height of one box; the side length of
/// the full grid is `box_width * box_height`, which is also the number of
/// distinct digits. A classic 9x9 grid has 3x3 boxes, a 6x6 grid has 3x2
/// boxes. Compared by value, immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    box_width: usize,
    box_height: usize,
}

impl Dimension {
    /// 4x4 grid with 2x2 boxes.
    pub const FOUR: Dimension = Dimension {
        box_width: 2,
        box_height: 2,
    };
    /// 6x6 grid with 3x2 boxes.
    pub const SIX: Dimension = Dimension {
        box_width: 3,
        box_height: 2,
    };
    /// Classic 9x9 grid with 3x3 boxes.
    pub const NINE: Dimension = Dimension {
        box_width: 3,
        box_height: 3,
    };
    /// 16x16 grid with 4x4 boxes.
    pub const SIXTEEN: Dimension = Dimension {
        box_width: 4,
        box_height: 4,
    };

    /// Create a dimension from box width and height.
    pub fn new(box_width: usize, box_height: usize) -> Result<Self, DimensionError> {
        if box_width == 0 || box_height == 0 {
            return Err(DimensionError::ZeroBoxSide {
                box_width,
                box_height,
            });
        }
        Ok(Self {
            box_width,
            box_height,
        })
    }

    /// Look up a shipped grid size by its side length (unique digit count).
    pub fn from_unique_digits(n: usize) -> Option<Self> {
        match n {
            4 => Some(Self::FOUR),
            6 => Some(Self::SIX),
            9 => Some(Self::NINE),
            16 => Some(Self::SIXTEEN),
            _ => None,
        }
    }

    pub fn box_width(&self) -> usize {
        self.box_width
    }

    pub fn box_height(&self) -> usize {
        self.box_height
    }

    /// Number of distinct digits, and the side length of the grid.
    pub fn unique_digits(&self) -> usize {
        self.box_width * self.box_height
    }

    /// Total number of cells in the grid.
    pub fn total_cells(&self) -> usize {
        self.unique_digits() * self.unique_digits()
    }

    /// Number of horizontal bands (groups of `box_height` consecutive rows).
    pub fn band_count(&self) -> usize {
        self.unique_digits() / self.box_height
    }

    /// Number of vertical stacks (groups of `box_width` consecutive columns).
    pub fn stack_count(&self) -> usize {
        self.unique_digits() / self.box_width
    }

    /// Whether boxes keep their shape under a quarter-turn rotation.
    pub fn has_square_boxes(&self) -> bool {
        self.box_width == self.box_height
    }

    /// Top-left cell of the box containing `pos`.
    pub fn box_origin(&self, pos: Position) -> Position {
        Position::new(
            (pos.row / self.box_height) * self.box_height,
            (pos.col / self.box_width) * self.box_width,
        )
    }

    /// Row-major cell index of `pos`.
    pub fn cell_index(&self, pos: Position) -> usize {
        pos.row * self.unique_digits() + pos.col
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.unique_digits() && pos.col < self.unique_digits()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.unique_digits();
        write!(f, "{}x{}", n, n)
    }
}

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
