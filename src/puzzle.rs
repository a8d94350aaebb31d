use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::solution_formatter::SolutionFormatter;
use crate::solver::Solution;

/// A start arrangement and the arrangement to reach from it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub start: Board,
    pub goal: Board,
}

impl Puzzle {
    pub fn new(start: Board, goal: Board) -> Self {
        Puzzle { start, goal }
    }

    pub fn format_solution<'a>(&'a self, solution: &'a Solution) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, solution)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Start:")?;
        write!(f, "{}", self.start)?;
        writeln!(f, "Goal:")?;
        write!(f, "{}", self.goal)
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.start, self.goal)
    }
}
