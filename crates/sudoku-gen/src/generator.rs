//! Puzzle assembly from curated schemas.

use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, Position};
use crate::error::GenerateError;
use crate::layout::Layout;
use crate::rng::SimpleRng;
use crate::schema::{Difficulty, SchemaRepository};
use crate::token::{self, TokenMap};

/// A given (pre-filled, locked) cell of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Given {
    pub pos: Position,
    pub value: usize,
}

/// A fully assembled puzzle. Read-only after assembly; play state lives in
/// [`crate::Board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuPuzzle {
    pub difficulty: Difficulty,
    pub dimension: Dimension,
    /// Token string of the puzzle grid, row-major.
    pub puzzle: String,
    /// Token string of the solved grid, row-major.
    pub solution: String,
    /// The non-empty puzzle cells.
    pub givens: Vec<Given>,
    /// Full solution grid, indexed `[row][col]`.
    pub solution_grid: Vec<Vec<usize>>,
}

/// Assembles puzzles from a schema repository.
pub struct Generator {
    repository: SchemaRepository,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator over the built-in seed library.
    pub fn new() -> Self {
        Self {
            repository: SchemaRepository::builtin(),
        }
    }

    /// Generator over a custom repository.
    pub fn with_repository(repository: SchemaRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &SchemaRepository {
        &self.repository
    }

    /// Assemble a puzzle for the given dimension and difficulty.
    ///
    /// All randomness derives from `seed` through one PRNG, drawn in a
    /// fixed order (schema pick, rotation, band/row/stack/column shuffles,
    /// digit relabeling), so the same inputs always produce the same
    /// puzzle. Repository errors propagate unchanged.
    pub fn assemble(
        &self,
        dimension: Dimension,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<SudokuPuzzle, GenerateError> {
        let mut rng = SimpleRng::with_seed(seed);
        let schema = self.repository.pick_random(dimension, difficulty, &mut rng)?;

        let mut layout = Layout::base(dimension);
        layout.rotate(&mut rng);
        layout.shuffle(&mut rng);

        let token_map = TokenMap::random(dimension, &mut rng);

        let puzzle_values = realize(&schema.puzzle, dimension, &layout, &token_map)?;
        let solution_values = realize(&schema.solution, dimension, &layout, &token_map)?;

        let n = dimension.unique_digits();
        let givens = puzzle_values
            .iter()
            .enumerate()
            .filter(|(_, &value)| value != 0)
            .map(|(i, &value)| Given {
                pos: Position::new(i / n, i % n),
                value,
            })
            .collect();
        let solution_grid = solution_values.chunks(n).map(<[usize]>::to_vec).collect();

        Ok(SudokuPuzzle {
            difficulty,
            dimension,
            puzzle: token::encode_values(&puzzle_values),
            solution: token::encode_values(&solution_values),
            givens,
            solution_grid,
        })
    }
}

/// Decode a template, relabel its digits, and push it through the layout.
fn realize(
    template: &str,
    dimension: Dimension,
    layout: &Layout,
    token_map: &TokenMap,
) -> Result<Vec<usize>, GenerateError> {
    let values = token::decode_template(template, dimension)?;
    let relabeled: Vec<usize> = values.iter().map(|&v| token_map.relabel(v)).collect();
    Ok(layout.apply(&relabeled))
}
