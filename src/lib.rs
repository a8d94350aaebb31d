// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod config;
pub mod data;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;

use std::error::Error;
use std::path::Path;

use crate::config::Method;
use crate::puzzle::Puzzle;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadPuzzle for P {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse::<Puzzle>()?)
    }
}

/// Parses a puzzle from standard input.
pub fn load_stdin() -> Result<Puzzle, Box<dyn Error>> {
    let text = fs::read_stdin()?;
    Ok(text.parse::<Puzzle>()?)
}

pub trait Solve {
    fn solve(&self, method: Method) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;
    use std::time::Instant;

    use separator::Separatable;

    use super::*;

    #[test]
    fn test_puzzles() {
        // (file, fewest moves or None when unsolvable)
        let puzzles = [
            ("puzzles/solved.txt", Some(0)),
            ("puzzles/one-move.txt", Some(1)),
            // depth first wanders off and comes back with 55 moves
            ("puzzles/one-move-up.txt", Some(1)),
            ("puzzles/five-moves.txt", Some(5)),
            ("puzzles/eight-moves.txt", Some(8)),
            ("puzzles/blank-top-left.txt", Some(6)),
            ("puzzles/unsolvable.txt", None),
        ];

        let succeeded = puzzles
            .iter()
            .filter(|&&(path, expected)| test_puzzle(path, expected))
            .count();
        assert_eq!(succeeded, puzzles.len());
    }

    fn test_puzzle(path: &str, expected: Option<usize>) -> bool {
        let puzzle = path.load_puzzle().unwrap();
        let mut ok = true;

        for &method in &Method::ALL {
            if method == Method::Dfs && expected.map_or(false, |steps| steps > 1) {
                // depth first wanders through most of the state space
                continue;
            }

            let started = Instant::now();
            let result = puzzle.solve(method);
            // inaccurate, only useful to quickly see which puzzles are difficult
            let ms = started.elapsed().as_millis() as u64;

            let mut out = String::new();
            match (&result, expected) {
                (Err(SolverErr::Unsolvable), None) => {}
                (Ok(solver_ok), Some(steps)) => {
                    let solution = solver_ok.solution.as_ref().unwrap();
                    let replayed = solution
                        .moves
                        .replay(crate::state::State::new(puzzle.start))
                        .unwrap();
                    if replayed.last().map(|s| s.board()) != Some(puzzle.goal) {
                        writeln!(out, "{} doesn't reach the goal", solution.moves).unwrap();
                    }
                    if method.is_optimal() && solution.steps() != steps {
                        writeln!(out, "{} steps, expected {}", solution.steps(), steps).unwrap();
                    }
                    if solution.steps() < steps {
                        writeln!(out, "{} steps is below the optimum", solution.steps()).unwrap();
                    }
                }
                (result, expected) => {
                    writeln!(out, "got {:?}, expected {:?}", result.is_ok(), expected).unwrap();
                }
            }

            println!(
                "{} using {} in approximately {} ms",
                path,
                method,
                ms.separated_string()
            );
            if !out.is_empty() {
                print!("{}", out);
                ok = false;
            }
        }
        ok
    }
}
