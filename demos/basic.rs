//! Basic example of using the schema-driven Sudoku engine.

use sudoku_gen::{
    Board, Difficulty, Dimension, Generator, MistakeCheckingPolicy, SolveOutcome, Solver,
};

fn main() {
    // Assemble a puzzle; the same seed always yields the same puzzle
    println!("Assembling a Medium 9x9 puzzle from seed 42...\n");
    let generator = Generator::new();
    let puzzle = generator
        .assemble(Dimension::NINE, Difficulty::Medium, 42)
        .expect("builtin library covers 9x9");

    let board = Board::from_puzzle(&puzzle);
    println!("{}", board);
    println!("Givens: {}", puzzle.givens.len());
    println!("Template: {}\n", puzzle.puzzle);

    // Make a wrong move and let the mistake checker flag it
    let mut play = board.clone();
    let pos = play.empty_positions()[0];
    let wrong = play.cell(pos).solution % 9 + 1;
    play.set_value(pos, wrong);
    let checked = play.check_mistakes(MistakeCheckingPolicy::CheckAgainstSolution);
    println!(
        "Placed {} at {} - flagged as mistake: {}\n",
        wrong,
        pos,
        checked.cell(pos).is_error
    );

    // Ask for a hint
    let solver = Solver::new();
    match solver.suggest_next_move(&board) {
        Some(hint) => println!("Hint: {}", hint.explanation),
        None => println!("Hint: no naked single available."),
    }

    // Solve it outright
    println!("\nSolving...\n");
    match solver.solve(&board) {
        SolveOutcome::Solved { board, steps } => {
            println!("{}", board);
            println!("Solved in {} steps", steps);
        }
        SolveOutcome::Unsolvable => println!("No solution found (generated puzzles always solve)"),
    }
}
