use std::fmt::{self, Debug, Display, Formatter};

use crate::puzzle::Puzzle;
use crate::solver::Solution;

/// Prints the start board, then each move followed by the board it produced.
pub struct SolutionFormatter<'a> {
    puzzle: &'a Puzzle,
    solution: &'a Solution,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(puzzle: &'a Puzzle, solution: &'a Solution) -> Self {
        Self { puzzle, solution }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.puzzle.start)?;
        for (dir, board) in self.solution.moves.iter().zip(&self.solution.boards[1..]) {
            writeln!(f, "{}:", dir.capitalized())?;
            writeln!(f, "{}", board)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
