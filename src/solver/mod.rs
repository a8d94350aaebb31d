mod backtracking;
mod best_first;
#[cfg(feature = "graph")]
mod graph;
mod heuristics;
mod preprocessing;
mod search;
mod stats;
mod uninformed;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::debug;

use crate::board::Board;
use crate::config::Method;
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

pub use self::heuristics::GoalPositions;
pub use self::preprocessing::{inversions, is_solvable};
pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    Unsolvable,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::Unsolvable => write!(f, "Not solvable"),
        }
    }
}

impl Error for SolverErr {}

/// The path found by a search.
#[derive(Clone, PartialEq, Eq)]
pub struct Solution {
    /// Directions the blank moved in.
    pub moves: Moves,
    /// Every board from the start to the goal, both inclusive.
    pub boards: Vec<Board>,
}

impl Solution {
    pub(crate) fn new(moves: Moves, boards: Vec<Board>) -> Self {
        debug_assert_eq!(moves.move_cnt() + 1, boards.len());
        Solution { moves, boards }
    }

    pub fn steps(&self) -> usize {
        self.moves.move_cnt()
    }
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} steps)", self.moves, self.steps())
    }
}

pub struct SolverOk {
    /// `None` when the frontier ran out without reaching the goal.
    pub solution: Option<Solution>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(solution: Option<Solution>, stats: Stats, method: Method) -> Self {
        Self {
            solution,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.solution {
            None => writeln!(f, "{}: No solution", self.method)?,
            Some(ref solution) => writeln!(f, "{}: {}", self.method, solution.steps())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, method: Method) -> Result<SolverOk, SolverErr> {
        solve(self, method)
    }
}

fn solve(puzzle: &Puzzle, method: Method) -> Result<SolverOk, SolverErr> {
    if !is_solvable(puzzle.start, puzzle.goal) {
        debug!("Parity of start and goal differs, not searching");
        return Err(SolverErr::Unsolvable);
    }

    let start = State::new(puzzle.start);
    let goal = State::new(puzzle.goal);

    debug!("Searching using {}", method);
    let (solution, stats) = match method {
        Method::Dfs => uninformed::dfs(start, goal),
        Method::Bfs => uninformed::bfs(start, goal),
        Method::Idfs => uninformed::idfs(start, goal),
        Method::AStar(heuristic) => best_first::a_star(start, goal, heuristic),
        Method::Greedy(heuristic) => best_first::greedy(start, goal, heuristic),
    };
    debug!("Search finished:\n{:?}", stats);

    Ok(SolverOk::new(solution, stats, method))
}
