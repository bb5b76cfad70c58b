//! Error types, one enum per failure family.

use thiserror::Error;

use crate::dimension::{Dimension, Position};
use crate::schema::Difficulty;

/// Invalid grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("box sides must be positive, got {box_width}x{box_height}")]
    ZeroBoxSide { box_width: usize, box_height: usize },
}

/// Malformed token strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("invalid token {token:?} at byte {offset}")]
    InvalidToken { token: String, offset: usize },
    #[error("template holds {actual} cells, expected {expected}")]
    CellCount { expected: usize, actual: usize },
    #[error("token {token:?} decodes to {value}, outside 1..={max}")]
    ValueOutOfRange { token: String, value: usize, max: usize },
}

/// Failures while assembling a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no schemas available for a {0} grid")]
    NoSchemasForDimension(Dimension),
    #[error("no {difficulty} schemas available for a {dimension} grid")]
    NoSchemasForDifficulty {
        dimension: Dimension,
        difficulty: Difficulty,
    },
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Precondition violations in rule checks. These are caller bugs, not
/// gameplay conditions; wrong digits entered by a player are never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("digit {value} is outside 1..={max}")]
    InvalidDigit { value: usize, max: usize },
    #[error("position {pos} is outside a {side}x{side} grid")]
    OutOfBounds { pos: Position, side: usize },
}
