//! Command-line front end for the sudoku-gen engine.

use clap::{Parser, Subcommand};
use lazy_static::lazy_static;
use regex::Regex;
use sudoku_gen::{
    decode_template, Board, Difficulty, Dimension, Generator, MistakeCheckingPolicy, Position,
    SimpleRng, SolveOutcome, Solver,
};

#[derive(Parser)]
#[command(
    name = "sudoku-gen",
    about = "Generate, solve, and hint schema-based Sudoku puzzles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle from the built-in schema library
    Generate {
        /// Grid size, e.g. "9x9" or "9"
        #[arg(long, default_value = "9x9")]
        size: String,
        /// Difficulty level: easy, medium, hard, or expert
        #[arg(long, default_value = "medium")]
        difficulty: String,
        /// Generation seed; drawn from entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
        /// Also print the solution template
        #[arg(long)]
        show_solution: bool,
    },
    /// Solve a puzzle template with the backtracking solver
    Solve {
        /// Grid size, e.g. "9x9" or "9"
        #[arg(long, default_value = "9x9")]
        size: String,
        /// Row-major token template, '-' for empty cells
        template: String,
    },
    /// Suggest the next move for a puzzle template
    Hint {
        /// Grid size, e.g. "9x9" or "9"
        #[arg(long, default_value = "9x9")]
        size: String,
        /// Row-major token template, '-' for empty cells
        template: String,
    },
    /// Check a filled-in grid for row, column, and box violations
    Check {
        /// Grid size, e.g. "9x9" or "9"
        #[arg(long, default_value = "9x9")]
        size: String,
        /// Row-major token template, '-' for empty cells
        template: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(cli.command) {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Generate {
            size,
            difficulty,
            seed,
            json,
            show_solution,
        } => {
            let dimension = parse_size(&size)?;
            let difficulty: Difficulty = difficulty.parse()?;
            let seed = seed.unwrap_or_else(|| SimpleRng::new().next_u64());
            let puzzle = Generator::new()
                .assemble(dimension, difficulty, seed)
                .map_err(|e| e.to_string())?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&puzzle).map_err(|e| e.to_string())?
                );
            } else {
                println!("{} {} puzzle, seed {}", dimension, difficulty, seed);
                println!();
                print!("{}", Board::from_puzzle(&puzzle));
                println!();
                println!("Template: {}", puzzle.puzzle);
                if show_solution {
                    println!("Solution: {}", puzzle.solution);
                }
            }
            Ok(())
        }
        Command::Solve { size, template } => {
            let board = parse_board(&size, &template)?;
            match Solver::new().solve(&board) {
                SolveOutcome::Solved { board, steps } => {
                    println!("Solved in {steps} steps");
                    println!();
                    print!("{board}");
                }
                SolveOutcome::Unsolvable => println!("Unsolvable"),
            }
            Ok(())
        }
        Command::Hint { size, template } => {
            let board = parse_board(&size, &template)?;
            match Solver::new().suggest_next_move(&board) {
                Some(hint) => println!("{}", hint.explanation),
                None => println!("No naked single available - fill in more cells first."),
            }
            Ok(())
        }
        Command::Check { size, template } => {
            let board = parse_play_board(&size, &template)?;
            let checked = board.check_mistakes(MistakeCheckingPolicy::CheckViolations);
            let n = checked.dimension().unique_digits();
            let conflicts: Vec<Position> = (0..n * n)
                .map(|i| Position::new(i / n, i % n))
                .filter(|&pos| checked.cell(pos).is_error)
                .collect();
            print!("{checked}");
            println!();
            if conflicts.is_empty() {
                println!("No rule violations.");
            } else {
                println!("{} cells break a row, column, or box rule:", conflicts.len());
                for pos in &conflicts {
                    println!("  {} holds {}", pos, checked.cell(*pos).value);
                }
            }
            Ok(())
        }
    }
}

fn parse_board(size: &str, template: &str) -> Result<Board, String> {
    let dimension = parse_size(size)?;
    let values = decode_template(template, dimension).map_err(|e| e.to_string())?;
    Board::from_values(dimension, &values)
        .ok_or_else(|| "template does not fit the grid".to_string())
}

/// Board whose filled cells stay editable, so the violation check can flag
/// them (locked givens are never flagged).
fn parse_play_board(size: &str, template: &str) -> Result<Board, String> {
    let dimension = parse_size(size)?;
    let values = decode_template(template, dimension).map_err(|e| e.to_string())?;
    let n = dimension.unique_digits();
    let mut board = Board::empty(dimension);
    for (i, &value) in values.iter().enumerate() {
        board.set_value(Position::new(i / n, i % n), value);
    }
    Ok(board)
}

/// Parse "9x9" / "9" style size specs.
fn parse_size(input: &str) -> Result<Dimension, String> {
    lazy_static! {
        static ref SIZE_REGEX: Regex = Regex::new("^(\\d+)(?:x(\\d+))?$").unwrap();
    }

    let captures = SIZE_REGEX
        .captures(input.trim())
        .ok_or_else(|| format!("unrecognized size: {input}"))?;
    let side: usize = captures[1]
        .parse()
        .map_err(|_| format!("unrecognized size: {input}"))?;
    if let Some(second) = captures.get(2) {
        if second.as_str() != &captures[1] {
            return Err(format!("only square grids are supported, got {input}"));
        }
    }
    Dimension::from_unique_digits(side)
        .ok_or_else(|| format!("no schemas ship for side length {side}"))
}
