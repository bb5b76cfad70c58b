//! Backtracking solver and move suggestion.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::dimension::Position;
use crate::rng::SimpleRng;

/// Outcome of a solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The grid was completed. `steps` counts attempted placements.
    Solved { board: Board, steps: usize },
    /// No assignment satisfies the grid.
    Unsolvable,
}

/// A suggested next move: a naked single.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub pos: Position,
    pub value: usize,
    /// Explanation of the hint.
    pub explanation: String,
}

/// Stateless solver; all state is per call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve by plain backtracking: first empty cell in row-major order,
    /// candidate values tried ascending 1..=N. No propagation and no
    /// ordering heuristics; grid sizes are bounded and schemas are
    /// validated at authoring time. The caller's board is never mutated.
    pub fn solve(&self, board: &Board) -> SolveOutcome {
        let mut working = board.clone();
        let mut steps = 0;
        if self.solve_recursive(&mut working, &mut steps) {
            SolveOutcome::Solved {
                board: working,
                steps,
            }
        } else {
            SolveOutcome::Unsolvable
        }
    }

    fn solve_recursive(&self, board: &mut Board, steps: &mut usize) -> bool {
        let pos = match first_empty(board) {
            Some(pos) => pos,
            None => return true,
        };
        let n = board.dimension().unique_digits();
        for value in 1..=n {
            *steps += 1;
            if board.has_conflict(pos, value) {
                continue;
            }
            board.set_value(pos, value);
            if self.solve_recursive(board, steps) {
                return true;
            }
            // backtrack
            board.set_value(pos, 0);
        }
        false
    }

    /// Suggest the next move: the first naked single among the empty
    /// cells, visited in a shuffled order so repeated calls vary the hint.
    /// Returns `None` when no cell has exactly one candidate; this never
    /// guesses and never backtracks.
    pub fn suggest_next_move(&self, board: &Board) -> Option<Hint> {
        self.suggest_with_rng(board, &mut SimpleRng::new())
    }

    fn suggest_with_rng(&self, board: &Board, rng: &mut SimpleRng) -> Option<Hint> {
        let mut empties = board.empty_positions();
        rng.shuffle(&mut empties);
        let n = board.dimension().unique_digits();
        for pos in empties {
            let mut candidates = (1..=n).filter(|&value| !board.has_conflict(pos, value));
            if let (Some(value), None) = (candidates.next(), candidates.next()) {
                return Some(Hint {
                    pos,
                    value,
                    explanation: format!(
                        "Cell ({}, {}) can only be {} - it's the only candidate left.",
                        pos.row + 1,
                        pos.col + 1,
                        value
                    ),
                });
            }
        }
        None
    }
}

fn first_empty(board: &Board) -> Option<Position> {
    let n = board.dimension().unique_digits();
    (0..n * n)
        .map(|i| Position::new(i / n, i % n))
        .find(|&pos| board.cell(pos).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::token::{decode_template, encode_values};

    fn board_from_template(template: &str, dimension: Dimension) -> Board {
        let values = decode_template(template, dimension).unwrap();
        Board::from_values(dimension, &values).unwrap()
    }

    #[test]
    fn test_solves_the_known_4x4_schema() {
        let board = board_from_template("-BCDCDA-BAD--CBA", Dimension::FOUR);
        match Solver::new().solve(&board) {
            SolveOutcome::Solved { board, steps } => {
                assert_eq!(encode_values(&board.values()), "ABCDCDABBADCDCBA");
                assert!(steps > 0);
            }
            SolveOutcome::Unsolvable => panic!("known-solvable schema reported unsolvable"),
        }
    }

    #[test]
    fn test_solve_does_not_mutate_the_input() {
        let board = board_from_template("-BCDCDA-BAD--CBA", Dimension::FOUR);
        let before = board.clone();
        let _ = Solver::new().solve(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_contradictory_grid_reports_unsolvable() {
        // (0,3) is hemmed in: 1, 2, 3 sit in its row and 4 in its column,
        // so the first empty cell the scan reaches has no candidate left
        // and the search terminates instead of looping
        let values = vec![
            1, 2, 3, 0, //
            0, 0, 0, 4, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ];
        let board = Board::from_values(Dimension::FOUR, &values).unwrap();
        assert_eq!(Solver::new().solve(&board), SolveOutcome::Unsolvable);
    }

    #[test]
    fn test_advisor_finds_the_naked_single() {
        // row 0 holds 1, 2, 3: cell (0,3) is the only naked single
        let values = vec![
            1, 2, 3, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ];
        let board = Board::from_values(Dimension::FOUR, &values).unwrap();
        let hint = Solver::new().suggest_next_move(&board).unwrap();
        assert_eq!(hint.pos, Position::new(0, 3));
        assert_eq!(hint.value, 4);
        assert!(hint.explanation.contains("only candidate"));
    }

    #[test]
    fn test_advisor_returns_none_without_a_naked_single() {
        let board = Board::empty(Dimension::FOUR);
        assert!(Solver::new().suggest_next_move(&board).is_none());
    }

    #[test]
    fn test_advisor_returns_none_on_a_full_board() {
        let board = board_from_template("ABCDCDABBADCDCBA", Dimension::FOUR);
        assert!(Solver::new().suggest_next_move(&board).is_none());
    }
}
