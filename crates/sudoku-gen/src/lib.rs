//! Schema-driven Sudoku engine.
//!
//! Generates square and rectangular-box Sudoku puzzles of arbitrary
//! dimension from a library of curated templates, and provides the play
//! runtime: mistake checking, backtracking solving, and move suggestions.
//!
//! Assembly is deterministic: every randomized step (schema pick, layout
//! rotation and shuffling, digit relabeling) draws from one seeded PRNG in
//! a fixed order, so a (dimension, difficulty, seed) triple always produces
//! the same puzzle.

mod board;
mod dimension;
mod error;
mod generator;
mod layout;
mod rng;
mod schema;
mod seeds;
mod solver;
mod token;

pub use board::{Board, CellState, MistakeCheckingPolicy};
pub use dimension::{Dimension, Position};
pub use error::{DimensionError, GenerateError, RuleError, TokenError};
pub use generator::{Generator, Given, SudokuPuzzle};
pub use layout::Layout;
pub use rng::SimpleRng;
pub use schema::{Difficulty, Schema, SchemaRepository};
pub use solver::{Hint, SolveOutcome, Solver};
pub use token::{
    decode, decode_template, encode, encode_values, extract_tokens, TokenMap, EMPTY_TOKEN,
};
